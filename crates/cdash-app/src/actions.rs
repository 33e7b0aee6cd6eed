//! Action handlers: UpdateAction dispatch and background task spawning

use cdash_api::DataSource;
use cdash_core::prelude::*;
use cdash_core::DashboardStats;
use tokio::sync::mpsc;

use crate::config;
use crate::handler::{Task, UpdateAction};
use crate::join::join_first_failure;
use crate::load_state::PageError;
use crate::message::Message;
use crate::page::UserDetail;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: &S)
where
    S: DataSource + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::SpawnTask(task) => {
            let source = source.clone();
            tokio::spawn(async move {
                let message = execute_task(task, &source).await;
                if msg_tx.send(message).await.is_err() {
                    debug!("Message channel closed, dropping result of {:?}", task);
                }
            });
        }

        UpdateAction::SaveLocale { locale, config_dir } => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = config::save_locale(&config_dir, locale) {
                    warn!("Failed to save locale preference: {}", e);
                }
            });
        }
    }
}

/// Run one fetch cycle and wrap its outcome in the matching result message
pub async fn execute_task<S>(task: Task, source: &S) -> Message
where
    S: DataSource + Sync,
{
    debug!("Executing {:?}", task);

    match task {
        Task::LoadDashboard { ticket } => {
            let result = join_first_failure(source.fetch_users(), source.fetch_all_posts())
                .await
                .map(|(users, posts)| DashboardStats::from_collections(&users, &posts))
                .map_err(PageError::from);
            Message::DashboardLoaded { ticket, result }
        }

        Task::LoadUsers { ticket } => {
            let result = source.fetch_users().await.map_err(PageError::from);
            Message::UsersLoaded { ticket, result }
        }

        Task::LoadUserDetail { ticket, user_id } => {
            let result = join_first_failure(
                source.fetch_user_by_id(user_id),
                source.fetch_posts_by_user(user_id),
            )
            .await
            .map(|(user, posts)| UserDetail { user, posts })
            .map_err(PageError::from);
            Message::UserDetailLoaded { ticket, result }
        }
    }
}

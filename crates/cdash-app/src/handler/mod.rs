//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use cdash_core::Locale;

use crate::load_state::FetchTicket;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn a background fetch
    SpawnTask(Task),

    /// Write the locale choice to `preferences.toml`
    SaveLocale { locale: Locale, config_dir: PathBuf },
}

/// Background fetches, one per page kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Users and posts for the dashboard totals
    LoadDashboard { ticket: FetchTicket },
    /// The full users collection
    LoadUsers { ticket: FetchTicket },
    /// One user together with their posts
    LoadUserDetail { ticket: FetchTicket, user_id: u32 },
}

impl Task {
    pub fn ticket(&self) -> FetchTicket {
        match self {
            Task::LoadDashboard { ticket }
            | Task::LoadUsers { ticket }
            | Task::LoadUserDetail { ticket, .. } => *ticket,
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Spawn `task` if there is one
    pub fn task(task: Option<Task>) -> Self {
        match task {
            Some(task) => Self::action(UpdateAction::SpawnTask(task)),
            None => Self::none(),
        }
    }
}

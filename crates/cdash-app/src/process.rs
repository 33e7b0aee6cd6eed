//! Message processing: runs the TEA update loop and dispatches actions

use cdash_api::DataSource;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are handled in the same call; actions are spawned and
/// report back through `msg_tx`.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &S,
) where
    S: DataSource + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source);
        }

        msg = result.message;
    }
}

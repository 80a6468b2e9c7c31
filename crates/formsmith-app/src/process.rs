//! Message processing
//!
//! Runs a message through the TEA update function, following up chained
//! messages and dispatching any resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::clipboard::ClipboardService;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    clipboard: &Arc<dyn ClipboardService>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), clipboard.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::clipboard::ClipboardService;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    clipboard: Arc<dyn ClipboardService>,
) {
    match action {
        UpdateAction::CopyToClipboard { content, request } => {
            spawn_clipboard_write(msg_tx, clipboard, content, request);
        }

        UpdateAction::ScheduleCopyReset { generation, after } => {
            spawn_copy_reset(msg_tx, generation, after);
        }
    }
}

/// Write `content` on a blocking thread and report the outcome
fn spawn_clipboard_write(
    msg_tx: mpsc::Sender<Message>,
    clipboard: Arc<dyn ClipboardService>,
    content: String,
    request: u64,
) {
    tokio::spawn(async move {
        let bytes = content.len();
        let result = tokio::task::spawn_blocking(move || clipboard.write_text(&content)).await;

        let msg = match result {
            Ok(Ok(())) => {
                debug!("Clipboard write of {} bytes completed", bytes);
                Message::ClipboardCopied { request }
            }
            Ok(Err(e)) => Message::ClipboardFailed {
                request,
                error: e.to_string(),
            },
            Err(e) => {
                warn!("Clipboard task did not complete: {}", e);
                Message::ClipboardFailed {
                    request,
                    error: format!("clipboard task failed: {}", e),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed before clipboard result was delivered");
        }
    });
}

/// Expire the "Copied!" acknowledgment after `after`
fn spawn_copy_reset(msg_tx: mpsc::Sender<Message>, generation: u64, after: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        let _ = msg_tx
            .send(Message::CopyAcknowledgementExpired { generation })
            .await;
    });
}

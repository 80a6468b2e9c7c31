//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `pointer`: Mouse event handlers (card hit testing, drag gestures)
//! - `fields`: Field list and editing handlers
//! - `reorder`: Drag reorder handlers
//! - `summary`: Generation, result modal and clipboard handlers

pub(crate) mod fields;
pub(crate) mod keys;
pub(crate) mod pointer;
pub(crate) mod reorder;
pub(crate) mod summary;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Write text to the system clipboard off the UI thread; the outcome
    /// message carries `request` back
    CopyToClipboard { content: String, request: u64 },

    /// Send `CopyAcknowledgementExpired { generation }` after a delay
    ScheduleCopyReset { generation: u64, after: Duration },
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
}

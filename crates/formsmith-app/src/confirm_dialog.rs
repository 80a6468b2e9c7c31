//! Confirm dialog state.
//!
//! Data model for the blocking yes/no gate. The rendering widget lives in
//! formsmith-tui's `widgets/confirm_dialog.rs`.

use crate::message::Message;

/// Answer of a confirmation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Secondary line shown under the message
    pub detail: Option<String>,
    /// Exactly two options: confirm first, cancel second
    pub options: [(String, Message); 2],
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm: (&str, Message),
        cancel: (&str, Message),
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            detail: None,
            options: [
                (confirm.0.to_string(), confirm.1),
                (cancel.0.to_string(), cancel.1),
            ],
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Confirmation shown before clearing every value
    pub fn clear_values(field_count: usize) -> Self {
        let detail = if field_count == 1 {
            "1 field will be affected.".to_string()
        } else {
            format!("{} fields will be affected.", field_count)
        };
        Self::new(
            "Clear Values?",
            "Are you sure you want to clear all descriptions? Labels will remain.",
            ("Clear", Message::ConfirmClearAll),
            ("Cancel", Message::CancelClearAll),
        )
        .with_detail(detail)
    }

    pub fn confirm_label(&self) -> &str {
        &self.options[0].0
    }

    pub fn cancel_label(&self) -> &str {
        &self.options[1].0
    }

    /// Message to dispatch for the given outcome
    pub fn message_for(&self, outcome: ConfirmOutcome) -> Message {
        match outcome {
            ConfirmOutcome::Confirmed => self.options[0].1.clone(),
            ConfirmOutcome::Cancelled => self.options[1].1.clone(),
        }
    }
}

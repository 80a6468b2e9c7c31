//! Message types for the application (TEA pattern)

use formsmith_core::{FieldChanges, FieldId};

use crate::input_key::{InputKey, PointerEvent};
use crate::state::EditTarget;
use crate::text_input::TextEdit;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse event from terminal
    Pointer(PointerEvent),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Field List Messages
    // ─────────────────────────────────────────────────────────
    /// Append a blank field and select it
    AddField,
    /// Apply a partial update to a field
    UpdateField { id: FieldId, changes: FieldChanges },
    /// Remove a field (or reset it when it is the last one)
    RemoveField { id: FieldId },
    /// Remove the selected field
    RemoveSelected,
    /// Ask to clear all values (opens the confirmation dialog)
    RequestClearAll,
    /// Confirmation dialog answered "yes"
    ConfirmClearAll,
    /// Confirmation dialog answered "no"
    CancelClearAll,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Select the field at a position
    SelectField(usize),
    SelectNext,
    SelectPrevious,
    /// Switch focus between label and value of the selected field
    ToggleEditTarget,

    // ─────────────────────────────────────────────────────────
    // Editing Messages
    // ─────────────────────────────────────────────────────────
    /// Start editing part of the selected field
    StartEdit(EditTarget),
    /// Start editing the form title
    StartEditTitle,
    /// Apply an edit to the text being edited
    EditText(TextEdit),
    /// Move editing to the other part of the field
    SwitchEditTarget,
    /// Stop editing
    FinishEdit,

    // ─────────────────────────────────────────────────────────
    // Drag Reorder Messages
    // ─────────────────────────────────────────────────────────
    /// Pick up the field at a position
    BeginDrag { index: usize },
    /// Pointer (or keyboard) is over the field at a position
    DragOver { index: usize },
    /// Move the pending target one position up (keyboard drag)
    DragTargetUp,
    /// Move the pending target one position down (keyboard drag)
    DragTargetDown,
    /// Release the dragged field
    Drop,
    /// Abort the drag
    CancelDrag,

    // ─────────────────────────────────────────────────────────
    // Summary & Result Messages
    // ─────────────────────────────────────────────────────────
    /// Generate the summary from the current fields
    Generate,
    /// Hide the result modal (output is kept)
    CloseResult,
    /// Show the last output again
    ReopenResult,
    /// Copy the shown output to the clipboard
    CopyResult,
    /// Clipboard write of copy `request` succeeded
    ClipboardCopied { request: u64 },
    /// Clipboard write of copy `request` failed
    ClipboardFailed { request: u64, error: String },
    /// "Copied!" acknowledgment timer fired
    CopyAcknowledgementExpired { generation: u64 },
    /// Scroll the result content up
    ScrollResultUp(usize),
    /// Scroll the result content down
    ScrollResultDown(usize),

    /// Dismiss a blocking notice
    DismissNotice,
}

//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{fields, keys::handle_key, pointer::handle_pointer, reorder, summary, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Pointer(event) => match handle_pointer(state, event) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Field List Messages
        // ─────────────────────────────────────────────────────────
        Message::AddField => fields::handle_add_field(state),
        Message::UpdateField { id, changes } => fields::handle_update_field(state, &id, changes),
        Message::RemoveField { id } => fields::handle_remove_field(state, &id),
        Message::RemoveSelected => fields::handle_remove_selected(state),
        Message::RequestClearAll => fields::handle_request_clear_all(state),
        Message::ConfirmClearAll => fields::handle_confirm_clear_all(state),
        Message::CancelClearAll => fields::handle_cancel_clear_all(state),

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectField(index) => fields::handle_select_field(state, index),
        Message::SelectNext => {
            let next = state.selected + 1;
            fields::handle_select_field(state, next)
        }
        Message::SelectPrevious => {
            let prev = state.selected.saturating_sub(1);
            fields::handle_select_field(state, prev)
        }
        Message::ToggleEditTarget => {
            state.edit_target = state.edit_target.toggled();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editing Messages
        // ─────────────────────────────────────────────────────────
        Message::StartEdit(target) => fields::handle_start_edit(state, target),
        Message::StartEditTitle => fields::handle_start_edit_title(state),
        Message::EditText(edit) => fields::handle_edit_text(state, edit),
        Message::SwitchEditTarget => fields::handle_switch_edit_target(state),
        Message::FinishEdit => fields::handle_finish_edit(state),

        // ─────────────────────────────────────────────────────────
        // Drag Reorder Messages
        // ─────────────────────────────────────────────────────────
        Message::BeginDrag { index } => reorder::handle_begin_drag(state, index),
        Message::DragOver { index } => reorder::handle_drag_over(state, index),
        Message::DragTargetUp => reorder::handle_drag_step(state, -1),
        Message::DragTargetDown => reorder::handle_drag_step(state, 1),
        Message::Drop => reorder::handle_drop(state),
        Message::CancelDrag => reorder::handle_cancel_drag(state),

        // ─────────────────────────────────────────────────────────
        // Summary & Result Messages
        // ─────────────────────────────────────────────────────────
        Message::Generate => summary::handle_generate(state),
        Message::CloseResult => summary::handle_close_result(state),
        Message::ReopenResult => summary::handle_reopen_result(state),
        Message::CopyResult => summary::handle_copy_result(state),
        Message::ClipboardCopied { request } => summary::handle_clipboard_copied(state, request),
        Message::ClipboardFailed { request, error } => {
            summary::handle_clipboard_failed(state, request, error)
        }
        Message::CopyAcknowledgementExpired { generation } => {
            summary::handle_copy_ack_expired(state, generation)
        }
        Message::ScrollResultUp(lines) => {
            state.result.scroll_up(lines);
            UpdateResult::none()
        }
        Message::ScrollResultDown(lines) => {
            state.result.scroll_down(lines);
            UpdateResult::none()
        }

        Message::DismissNotice => summary::handle_dismiss_notice(state),
    }
}

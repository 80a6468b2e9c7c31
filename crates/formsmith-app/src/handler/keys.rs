//! Key event handlers for different UI modes

use crate::confirm_dialog::ConfirmOutcome;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, EditFocus, EditTarget, UiMode};
use crate::text_input::TextEdit;

/// Lines moved by PageUp/PageDown in the result modal
const RESULT_PAGE_LINES: usize = 10;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal if state.drag.is_active() => handle_key_dragging(key),
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Editing => handle_key_editing(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
        UiMode::Result => handle_key_result(key),
        UiMode::Notice => handle_key_notice(key),
    }
}

/// Handle key events in normal (navigation) mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Home => Some(Message::SelectField(0)),
        InputKey::End => Some(Message::SelectField(
            state.fields.len().saturating_sub(1),
        )),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleEditTarget),

        // ─────────────────────────────────────────────────────────
        // Editing
        // ─────────────────────────────────────────────────────────
        InputKey::Enter | InputKey::Char('i') => Some(Message::StartEdit(state.edit_target)),
        InputKey::Char('t') => Some(Message::StartEditTitle),

        // ─────────────────────────────────────────────────────────
        // Field List
        // ─────────────────────────────────────────────────────────
        InputKey::Char('a') => Some(Message::AddField),
        InputKey::Char('d') | InputKey::Delete => Some(Message::RemoveSelected),
        InputKey::Char('C') => Some(Message::RequestClearAll),
        InputKey::Char('m' | ' ') => Some(Message::BeginDrag {
            index: state.selected,
        }),

        // ─────────────────────────────────────────────────────────
        // Summary
        // ─────────────────────────────────────────────────────────
        InputKey::Char('g') => Some(Message::Generate),
        InputKey::Char('o') => Some(Message::ReopenResult),

        _ => None,
    }
}

/// Handle key events while a card is picked up
fn handle_key_dragging(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::DragTargetUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::DragTargetDown),
        InputKey::Enter | InputKey::Char('m' | ' ') => Some(Message::Drop),
        InputKey::Esc => Some(Message::CancelDrag),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while editing a label, value or the title
fn handle_key_editing(state: &AppState, key: InputKey) -> Option<Message> {
    let editing_field = matches!(
        state.edit.as_ref().map(|s| &s.focus),
        Some(EditFocus::Field { .. })
    );
    let editing_value = state.edit.as_ref().is_some_and(|s| {
        matches!(
            s.focus,
            EditFocus::Field {
                target: EditTarget::Value,
                ..
            }
        )
    });

    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::FinishEdit),
        InputKey::Tab | InputKey::BackTab if editing_field => Some(Message::SwitchEditTarget),

        // Newline inside a value (Ctrl+J is LF in raw mode)
        InputKey::CharCtrl('j') if editing_value => Some(Message::EditText(TextEdit::Insert('\n'))),
        InputKey::CharCtrl('u') => Some(Message::EditText(TextEdit::ClearToStart)),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => Some(Message::EditText(TextEdit::Insert(c))),
        InputKey::Backspace => Some(Message::EditText(TextEdit::Backspace)),
        InputKey::Delete => Some(Message::EditText(TextEdit::Delete)),
        InputKey::Left => Some(Message::EditText(TextEdit::Left)),
        InputKey::Right => Some(Message::EditText(TextEdit::Right)),
        InputKey::Home => Some(Message::EditText(TextEdit::Home)),
        InputKey::End => Some(Message::EditText(TextEdit::End)),

        _ => None,
    }
}

/// Handle key events in the clear-all confirmation dialog
fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let outcome = match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => ConfirmOutcome::Confirmed,
        InputKey::Char('n' | 'N') | InputKey::Esc => ConfirmOutcome::Cancelled,
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        _ => return None,
    };

    match &state.confirm_dialog_state {
        Some(dialog) => Some(dialog.message_for(outcome)),
        None => Some(match outcome {
            ConfirmOutcome::Confirmed => Message::ConfirmClearAll,
            ConfirmOutcome::Cancelled => Message::CancelClearAll,
        }),
    }
}

/// Handle key events in the result modal
fn handle_key_result(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseResult),
        InputKey::Char('c' | 'y') | InputKey::Enter => Some(Message::CopyResult),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollResultUp(1)),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollResultDown(1)),
        InputKey::PageUp => Some(Message::ScrollResultUp(RESULT_PAGE_LINES)),
        InputKey::PageDown => Some(Message::ScrollResultDown(RESULT_PAGE_LINES)),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Any key dismisses a notice; Ctrl+C still quits
fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => Some(Message::DismissNotice),
    }
}

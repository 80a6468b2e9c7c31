//! Field list, selection and text editing handlers

use formsmith_core::prelude::*;
use formsmith_core::{FieldChanges, FieldId};

use crate::confirm_dialog::{ConfirmDialogState, ConfirmOutcome};
use crate::message::Message;
use crate::state::{AppState, EditFocus, EditSession, EditTarget, UiMode};
use crate::text_input::{TextCursor, TextEdit};

use super::UpdateResult;

/// Append a blank field and focus its label
pub fn handle_add_field(state: &mut AppState) -> UpdateResult {
    state.fields.add();
    state.selected = state.fields.len() - 1;
    state.edit_target = EditTarget::Label;
    UpdateResult::none()
}

pub fn handle_update_field(
    state: &mut AppState,
    id: &FieldId,
    changes: FieldChanges,
) -> UpdateResult {
    state.fields.update(id, changes);
    UpdateResult::none()
}

pub fn handle_remove_field(state: &mut AppState, id: &FieldId) -> UpdateResult {
    let editing_removed = matches!(
        &state.edit,
        Some(EditSession { focus: EditFocus::Field { id: editing, .. }, .. }) if editing == id
    );
    if editing_removed {
        state.edit = None;
        state.ui_mode = UiMode::Normal;
    }

    if state.fields.remove(id) {
        state.clamp_selection();
    }
    UpdateResult::none()
}

pub fn handle_remove_selected(state: &mut AppState) -> UpdateResult {
    match state.selected_field() {
        Some(field) => UpdateResult::message(Message::RemoveField {
            id: field.id.clone(),
        }),
        None => UpdateResult::none(),
    }
}

/// Open the clear-all confirmation, or clear directly when confirmation is disabled
pub fn handle_request_clear_all(state: &mut AppState) -> UpdateResult {
    if !state.settings.behavior.confirm_clear {
        debug!("Clear confirmation disabled, clearing directly");
        return UpdateResult::message(Message::ConfirmClearAll);
    }

    state.confirm_dialog_state = Some(ConfirmDialogState::clear_values(state.fields.len()));
    state.ui_mode = UiMode::ConfirmDialog;
    UpdateResult::none()
}

pub fn handle_confirm_clear_all(state: &mut AppState) -> UpdateResult {
    state.fields.clear_all(ConfirmOutcome::Confirmed);
    close_confirm_dialog(state);
    UpdateResult::none()
}

pub fn handle_cancel_clear_all(state: &mut AppState) -> UpdateResult {
    state.fields.clear_all(ConfirmOutcome::Cancelled);
    close_confirm_dialog(state);
    UpdateResult::none()
}

fn close_confirm_dialog(state: &mut AppState) {
    state.confirm_dialog_state = None;
    if state.ui_mode == UiMode::ConfirmDialog {
        state.ui_mode = UiMode::Normal;
    }
}

/// Select the field at `index`; out-of-range positions are ignored
pub fn handle_select_field(state: &mut AppState, index: usize) -> UpdateResult {
    if index < state.fields.len() {
        state.selected = index;
    }
    UpdateResult::none()
}

/// Start editing the label or value of the selected field
pub fn handle_start_edit(state: &mut AppState, target: EditTarget) -> UpdateResult {
    let Some(field) = state.selected_field() else {
        return UpdateResult::none();
    };

    let text = match target {
        EditTarget::Label => &field.label,
        EditTarget::Value => &field.value,
    };
    let session = EditSession {
        focus: EditFocus::Field {
            id: field.id.clone(),
            target,
        },
        cursor: TextCursor::at_end(text),
    };

    state.edit = Some(session);
    state.edit_target = target;
    state.ui_mode = UiMode::Editing;
    UpdateResult::none()
}

pub fn handle_start_edit_title(state: &mut AppState) -> UpdateResult {
    state.edit = Some(EditSession {
        focus: EditFocus::Title,
        cursor: TextCursor::at_end(&state.title),
    });
    state.ui_mode = UiMode::Editing;
    UpdateResult::none()
}

/// Apply a text edit to whatever is being edited.
///
/// Field edits are routed through `Message::UpdateField`; the title is
/// written directly.
pub fn handle_edit_text(state: &mut AppState, edit: TextEdit) -> UpdateResult {
    let Some(text) = state.editing_text().map(str::to_owned) else {
        // Field vanished underneath the edit session
        return handle_finish_edit(state);
    };
    let Some(session) = state.edit.as_mut() else {
        return UpdateResult::none();
    };

    // Only values are multi-line
    let multiline = matches!(
        session.focus,
        EditFocus::Field {
            target: EditTarget::Value,
            ..
        }
    );
    if edit == TextEdit::Insert('\n') && !multiline {
        return UpdateResult::none();
    }

    let Some(new_text) = session.cursor.apply(&text, edit) else {
        return UpdateResult::none();
    };

    match &session.focus {
        EditFocus::Title => {
            state.title = new_text;
            UpdateResult::none()
        }
        EditFocus::Field { id, target } => {
            let changes = match target {
                EditTarget::Label => FieldChanges::label(new_text),
                EditTarget::Value => FieldChanges::value(new_text),
            };
            UpdateResult::message(Message::UpdateField {
                id: id.clone(),
                changes,
            })
        }
    }
}

/// Move the edit session to the other part of the same field
pub fn handle_switch_edit_target(state: &mut AppState) -> UpdateResult {
    let Some(EditSession {
        focus: EditFocus::Field { id, target },
        ..
    }) = state.edit.clone()
    else {
        return UpdateResult::none();
    };
    let Some(field) = state.fields.find(&id) else {
        return handle_finish_edit(state);
    };

    let target = target.toggled();
    let text = match target {
        EditTarget::Label => &field.label,
        EditTarget::Value => &field.value,
    };
    let cursor = TextCursor::at_end(text);

    state.edit = Some(EditSession {
        focus: EditFocus::Field { id, target },
        cursor,
    });
    state.edit_target = target;
    UpdateResult::none()
}

pub fn handle_finish_edit(state: &mut AppState) -> UpdateResult {
    if state.edit.take().is_some() {
        trace!("Edit session finished");
    }
    if state.ui_mode == UiMode::Editing {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

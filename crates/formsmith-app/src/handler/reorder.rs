//! Drag reorder handlers

use formsmith_core::prelude::*;

use crate::state::{AppState, UiMode};

use super::UpdateResult;

/// Pick up the field at `index`. Only starts from normal mode.
pub fn handle_begin_drag(state: &mut AppState, index: usize) -> UpdateResult {
    if state.ui_mode != UiMode::Normal || index >= state.fields.len() {
        return UpdateResult::none();
    }
    if state.drag.begin(index) {
        state.selected = index;
    }
    UpdateResult::none()
}

pub fn handle_drag_over(state: &mut AppState, index: usize) -> UpdateResult {
    if index < state.fields.len() {
        state.drag.hover(index);
    }
    UpdateResult::none()
}

/// Move the pending target by `delta` positions (keyboard dragging)
pub fn handle_drag_step(state: &mut AppState, delta: isize) -> UpdateResult {
    let Some(current) = state.drag.effective_target() else {
        return UpdateResult::none();
    };
    let last = state.fields.len().saturating_sub(1);
    let next = current.saturating_add_signed(delta).min(last);
    state.drag.hover(next);
    UpdateResult::none()
}

/// Release the dragged field; the selection follows it
pub fn handle_drop(state: &mut AppState) -> UpdateResult {
    let source = state.drag.source();
    match state.drag.drop_onto(&mut state.fields) {
        Some(reorder) => {
            info!("Moved field from {} to {}", reorder.from, reorder.to);
            state.selected = reorder.to;
        }
        None => {
            if let Some(source) = source {
                state.selected = source;
            }
        }
    }
    state.clamp_selection();
    UpdateResult::none()
}

pub fn handle_cancel_drag(state: &mut AppState) -> UpdateResult {
    if let Some(source) = state.drag.source() {
        state.selected = source;
    }
    state.drag.cancel();
    UpdateResult::none()
}

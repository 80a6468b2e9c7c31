//! Mouse event handlers
//!
//! Pointer positions are mapped to list positions through the card regions
//! the renderer recorded on the previous frame.

use crate::input_key::{PointerEvent, PointerKind};
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Lines scrolled per wheel notch in the result modal
const WHEEL_LINES: usize = 3;

/// Convert a pointer event to a message based on current UI mode
pub fn handle_pointer(state: &AppState, event: PointerEvent) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_pointer_normal(state, event),
        UiMode::Result => match event.kind {
            PointerKind::ScrollUp => Some(Message::ScrollResultUp(WHEEL_LINES)),
            PointerKind::ScrollDown => Some(Message::ScrollResultDown(WHEEL_LINES)),
            _ => None,
        },
        UiMode::Editing => match event.kind {
            // Clicking elsewhere ends the edit
            PointerKind::Down => Some(Message::FinishEdit),
            _ => None,
        },
        UiMode::ConfirmDialog | UiMode::Notice => None,
    }
}

fn handle_pointer_normal(state: &AppState, event: PointerEvent) -> Option<Message> {
    let hit = state
        .card_at(event.column, event.row)
        .map(|region| region.index);

    match event.kind {
        PointerKind::Down => hit.map(|index| Message::BeginDrag { index }),
        PointerKind::Drag if state.drag.is_active() => hit.map(|index| Message::DragOver { index }),
        // Drops on the last hovered card, wherever the button is released
        PointerKind::Up if state.drag.is_active() => Some(Message::Drop),
        PointerKind::ScrollUp => Some(Message::SelectPrevious),
        PointerKind::ScrollDown => Some(Message::SelectNext),
        _ => None,
    }
}

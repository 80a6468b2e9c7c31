//! Key hint footer
//!
//! One row of `[key] action` hints for the current mode.

use formsmith_app::state::{AppState, EditTarget, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

type Hint = (&'static str, &'static str);

const NORMAL_HINTS: &[Hint] = &[
    ("a", "Add"),
    ("Enter", "Edit"),
    ("g", "Generate"),
    ("m", "Move"),
    ("d", "Remove"),
    ("Tab", "Label/Value"),
    ("C", "Clear"),
    ("t", "Title"),
    ("q", "Quit"),
];

const DRAG_HINTS: &[Hint] = &[
    ("↑↓", "Choose position"),
    ("Enter", "Drop"),
    ("Esc", "Cancel"),
];

const EDIT_LABEL_HINTS: &[Hint] = &[("Enter", "Done"), ("Tab", "Value"), ("Esc", "Done")];

const EDIT_VALUE_HINTS: &[Hint] = &[
    ("Enter", "Done"),
    ("Ctrl+J", "New line"),
    ("Tab", "Label"),
    ("Esc", "Done"),
];

const EDIT_TITLE_HINTS: &[Hint] = &[("Enter", "Done"), ("Ctrl+U", "Clear")];

const CONFIRM_HINTS: &[Hint] = &[("y", "Confirm"), ("n", "Cancel")];

const RESULT_HINTS: &[Hint] = &[("c", "Copy"), ("↑↓", "Scroll"), ("Esc", "Close")];

const NOTICE_HINTS: &[Hint] = &[("any key", "Dismiss")];

pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [Hint] {
        let state = self.state;
        match state.ui_mode {
            UiMode::Normal if state.drag.is_active() => DRAG_HINTS,
            UiMode::Normal => NORMAL_HINTS,
            UiMode::Editing if state.is_editing_title() => EDIT_TITLE_HINTS,
            UiMode::Editing if state.edit_target == EditTarget::Value => EDIT_VALUE_HINTS,
            UiMode::Editing => EDIT_LABEL_HINTS,
            UiMode::ConfirmDialog => CONFIRM_HINTS,
            UiMode::Result => RESULT_HINTS,
            UiMode::Notice => NOTICE_HINTS,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", action), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use formsmith_app::handler::update;
    use formsmith_app::message::Message;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(Footer::new(state), term.area());
        term
    }

    #[test]
    fn test_normal_mode_hints() {
        let state = AppState::new();
        let term = render(&state);
        assert!(term.buffer_contains("[a] Add"));
        assert!(term.buffer_contains("[g] Generate"));
    }

    #[test]
    fn test_drag_hints_replace_normal_hints() {
        let mut state = AppState::new();
        update(&mut state, Message::AddField);
        update(&mut state, Message::BeginDrag { index: 0 });

        let term = render(&state);

        assert!(term.buffer_contains("Drop"));
        assert!(!term.buffer_contains("Generate"));
    }

    #[test]
    fn test_value_edit_hints_mention_new_line() {
        let mut state = AppState::new();
        update(&mut state, Message::StartEdit(EditTarget::Value));

        let term = render(&state);

        assert!(term.buffer_contains("[Ctrl+J] New line"));
    }

    #[test]
    fn test_result_hints() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::Result;

        let term = render(&state);

        assert!(term.buffer_contains("[c] Copy"));
        assert!(term.buffer_contains("[Esc] Close"));
    }
}

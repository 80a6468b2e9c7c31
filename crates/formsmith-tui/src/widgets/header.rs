//! Header bar widget
//!
//! Shows the app name, the form title (editable in place) and the field
//! count.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use formsmith_app::state::AppState;

use super::input_text::cursor_line;
use crate::theme::{palette, styles};

/// Placeholder shown when the title is blank
pub const TITLE_PLACEHOLDER: &str = "Untitled form";

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn title_spans(&self) -> Vec<Span<'static>> {
        let state = self.state;
        if state.is_editing_title() {
            let cursor = state
                .edit
                .as_ref()
                .map(|s| s.cursor.position())
                .unwrap_or(0);
            return cursor_line(&state.title, cursor, styles::text_secondary()).spans;
        }
        if state.title.is_empty() {
            vec![Span::styled(TITLE_PLACEHOLDER, styles::placeholder())]
        } else {
            vec![Span::styled(state.title.clone(), styles::text_secondary())]
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.state.is_editing_title())
            .style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::raw(" "),
            Span::styled("Formsmith", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
        ];
        left.extend(self.title_spans());
        let left_line = Line::from(left);

        let count = self.state.fields.len();
        let count_text = format!(
            "{} field{} ",
            count,
            if count == 1 { "" } else { "s" }
        );
        let count_width = UnicodeWidthStr::width(count_text.as_str()) as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the count when it doesn't collide with the title
        let left_width = left_line.width() as u16;
        if left_width + count_width + 2 <= inner.width {
            let x = inner.x + inner.width - count_width;
            buf.set_string(x, inner.y, &count_text, styles::text_muted());
        }
    }
}

//! Result modal: generated summary, copy action and the "Copied!" acknowledgment

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use formsmith_app::result::ResultState;
use formsmith_core::GeneratedOutput;

use super::modal_overlay::{centered_rect, prepare_modal};
use super::wrap::wrapped_rows;
use crate::theme::styles;

const MAX_WIDTH: u16 = 72;
/// Rows used by borders, metadata, spacers and the action row
const CHROME_ROWS: u16 = 6;

/// Where the parts of the modal land for a given screen area
struct ModalLayout {
    modal: Rect,
    meta: Rect,
    content: Rect,
    actions: Rect,
    /// Content height once word-wrapped to `content.width`
    content_rows: usize,
}

impl ModalLayout {
    fn new(output: &GeneratedOutput, area: Rect) -> Self {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        // Border plus one column of margin on each side
        let text_width = width.saturating_sub(4);
        let content_rows = wrapped_rows(&output.content, text_width);

        let wanted = u16::try_from(content_rows)
            .unwrap_or(u16::MAX)
            .saturating_add(CHROME_ROWS);
        let height = wanted.min(area.height.saturating_sub(2));
        let modal = centered_rect(width, height, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Metadata
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Actions
        ])
        .split(modal.inner(Margin::new(1, 1)));

        Self {
            modal,
            meta: chunks[0],
            content: chunks[2].inner(Margin::new(1, 0)),
            actions: chunks[4],
            content_rows,
        }
    }

    fn max_scroll(&self) -> usize {
        self.content_rows
            .saturating_sub(usize::from(self.content.height))
    }
}

/// Largest useful scroll offset of the modal drawn in `area`, or `None`
/// when there is nothing to show
pub fn result_max_scroll(state: &ResultState, area: Rect) -> Option<usize> {
    state
        .output
        .as_ref()
        .map(|output| ModalLayout::new(output, area).max_scroll())
}

pub const COPIED_LABEL: &str = "✓ Copied!";

pub struct ResultModal<'a> {
    state: &'a ResultState,
}

impl<'a> ResultModal<'a> {
    pub fn new(state: &'a ResultState) -> Self {
        Self { state }
    }

    fn copy_status(&self) -> Vec<Span<'static>> {
        if self.state.copied {
            vec![Span::styled(COPIED_LABEL, styles::status_green())]
        } else if self.state.copy_pending {
            vec![Span::styled("Copying...", styles::accent())]
        } else {
            vec![
                Span::styled("[", styles::text_muted()),
                Span::styled("c", styles::keybinding()),
                Span::styled("] Copy to clipboard", styles::text_muted()),
            ]
        }
    }

    fn actions(&self) -> Line<'static> {
        let mut spans = self.copy_status();
        spans.extend([
            Span::raw("   "),
            Span::styled("[", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled("] Close", styles::text_muted()),
        ]);
        Line::from(spans)
    }
}

impl Widget for ResultModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(output) = &self.state.output else {
            return;
        };

        let layout = ModalLayout::new(output, area);
        let modal_area = prepare_modal(buf, area, layout.modal.width, layout.modal.height);

        let title = format!(" {} ", output.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        block.render(modal_area, buf);

        let lines = output.line_count();
        let meta = format!(
            "Generated at {} · {} line{}",
            output.formatted_time(),
            lines,
            if lines == 1 { "" } else { "s" }
        );
        Paragraph::new(meta)
            .alignment(Alignment::Center)
            .style(styles::text_muted())
            .render(layout.meta, buf);

        let scroll = self.state.scroll.min(layout.max_scroll());
        Paragraph::new(output.content.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(layout.content, buf);

        Paragraph::new(self.actions())
            .alignment(Alignment::Center)
            .render(layout.actions, buf);
    }
}

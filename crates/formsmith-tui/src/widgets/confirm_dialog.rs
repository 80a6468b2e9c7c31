//! Confirmation dialog widget for destructive actions

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use formsmith_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay::prepare_modal;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 10;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("y", styles::status_green()),
            Span::styled(format!("] {}  ", self.state.confirm_label()), styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::status_red()),
            Span::styled(format!("] {}", self.state.cancel_label()), styles::text_muted()),
        ])
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = prepare_modal(buf, area, MODAL_WIDTH, MODAL_HEIGHT);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message
            Constraint::Length(1), // Detail
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::text_primary())
            .render(chunks[1], buf);

        if let Some(detail) = &self.state.detail {
            Paragraph::new(detail.as_str())
                .alignment(Alignment::Center)
                .style(styles::text_secondary())
                .render(chunks[2], buf);
        }

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}

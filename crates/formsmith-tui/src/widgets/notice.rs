//! Blocking notice modal, dismissed by any key

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use formsmith_app::result::NoticeState;

use super::modal_overlay::prepare_modal;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 48;
const MODAL_HEIGHT: u16 = 7;

pub struct Notice<'a> {
    state: &'a NoticeState,
}

impl<'a> Notice<'a> {
    pub fn new(state: &'a NoticeState) -> Self {
        Self { state }
    }
}

impl Widget for Notice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = prepare_modal(buf, area, MODAL_WIDTH, MODAL_HEIGHT);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::text_bright())
            .render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(
            "Press any key to continue",
            styles::text_muted(),
        )))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }
}

//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the title header (top border + title row + bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the key hint footer
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title header
    pub header: Rect,

    /// Scrollable stack of field cards
    pub fields: Rect,

    /// Key hints for the current mode
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        fields: chunks[1],
        footer: chunks[2],
    }
}

//! Field card stack
//!
//! Each field renders as a bordered card: the label on the first row and
//! the (possibly multi-line) value below it. The stack scrolls so the
//! selected card, or the pending drop position while dragging, stays on
//! screen.

use formsmith_app::state::{AppState, CardRegion, EditTarget, UiMode};
use formsmith_core::Field;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use super::input_text::{cursor_line_window, cursor_lines, ellipsize};
use super::wrap::{cursor_row, wrapped_rows};
use crate::theme::styles;

/// Most value rows a card shows at once
pub const MAX_VALUE_ROWS: usize = 6;

/// Placeholders for the first card
pub const FIRST_LABEL_PLACEHOLDER: &str = "e.g., Professor Name";
pub const FIRST_VALUE_PLACEHOLDER: &str = "e.g., Dr. Jane Smith";

/// Placeholders for every other card
pub const LABEL_PLACEHOLDER: &str = "Label";
pub const VALUE_PLACEHOLDER: &str = "Enter description...";

/// (label, value) placeholders for the card at `index`
pub fn placeholders(index: usize) -> (&'static str, &'static str) {
    if index == 0 {
        (FIRST_LABEL_PLACEHOLDER, FIRST_VALUE_PLACEHOLDER)
    } else {
        (LABEL_PLACEHOLDER, VALUE_PLACEHOLDER)
    }
}

/// Value rows of a card whose text is `width` columns wide
fn value_rows(field: &Field, width: u16) -> u16 {
    wrapped_rows(&field.value, width).clamp(1, MAX_VALUE_ROWS) as u16
}

/// Total rows of a card `width` columns wide: borders, label row and the
/// wrapped value rows
pub fn card_height(field: &Field, width: u16) -> u16 {
    2 + 1 + value_rows(field, width.saturating_sub(2))
}

/// Compute which cards are visible in `area` and where.
///
/// The returned regions are also what pointer hit-testing uses.
pub fn layout_cards(state: &AppState, area: Rect) -> Vec<CardRegion> {
    let heights: Vec<u16> = state
        .fields
        .iter()
        .map(|field| card_height(field, area.width))
        .collect();
    if heights.is_empty() || area.height == 0 {
        return Vec::new();
    }

    let focus = state
        .drag
        .effective_target()
        .unwrap_or(state.selected)
        .min(heights.len() - 1);
    let span = |from: usize| -> u32 { heights[from..=focus].iter().map(|&h| u32::from(h)).sum() };

    let mut first = 0;
    while first < focus && span(first) > u32::from(area.height) {
        first += 1;
    }

    let mut regions = Vec::new();
    let mut top = area.y;
    for (index, &height) in heights.iter().enumerate().skip(first) {
        if top.saturating_add(height) > area.bottom() {
            break;
        }
        regions.push(region(index, area, top, top + height));
        top += height;
    }

    // A single card taller than the area is clipped rather than hidden
    if regions.is_empty() {
        regions.push(region(first, area, area.y, area.bottom()));
    }
    regions
}

fn region(index: usize, area: Rect, top: u16, bottom: u16) -> CardRegion {
    CardRegion {
        index,
        left: area.x,
        right: area.right(),
        top,
        bottom,
        value_row: top + 2,
    }
}

/// Renders the visible field cards
pub struct FieldCards<'a> {
    state: &'a AppState,
    regions: &'a [CardRegion],
}

impl<'a> FieldCards<'a> {
    pub fn new(state: &'a AppState, regions: &'a [CardRegion]) -> Self {
        Self { state, regions }
    }

    fn card_block(&self, index: usize) -> Block<'static> {
        let number = index + 1;
        let drag = &self.state.drag;

        if drag.source() == Some(index) {
            styles::drag_source_block().title(format!(" {} · moving ", number))
        } else if drag.is_active() && drag.effective_target() == Some(index) {
            styles::drop_target_block().title(format!(" {} · drop here ", number))
        } else {
            let selected = index == self.state.selected;
            styles::glass_block(selected).title(Span::styled(
                format!(" {} ", number),
                if selected {
                    styles::accent_bold()
                } else {
                    styles::text_muted()
                },
            ))
        }
    }

    /// Whether `target` of the card at `index` carries the focus highlight
    fn is_focused(&self, index: usize, target: EditTarget) -> bool {
        self.state.ui_mode == UiMode::Normal
            && !self.state.drag.is_active()
            && index == self.state.selected
            && self.state.edit_target == target
    }

    fn cursor(&self) -> usize {
        self.state
            .edit
            .as_ref()
            .map(|s| s.cursor.position())
            .unwrap_or(0)
    }

    fn label_line(&self, index: usize, field: &Field, width: u16, dimmed: bool) -> Line<'static> {
        let style = if dimmed {
            styles::text_muted()
        } else {
            styles::accent_bold()
        };
        let (label_placeholder, _) = placeholders(index);

        if self.state.is_editing_field(index, EditTarget::Label) {
            return cursor_line_window(&field.label, self.cursor(), width, style);
        }

        let focused = self.is_focused(index, EditTarget::Label);
        let span = if field.label.is_empty() {
            Span::styled(label_placeholder, styles::placeholder())
        } else {
            Span::styled(ellipsize(&field.label, width), style)
        };
        if focused {
            Line::from(span.patch_style(styles::focused_selected()))
        } else {
            Line::from(span)
        }
    }

    /// Value text and the first wrapped row to show in `area`
    fn value_text(
        &self,
        index: usize,
        field: &Field,
        area: Rect,
        dimmed: bool,
    ) -> (Text<'static>, u16) {
        let style = if dimmed {
            styles::text_muted()
        } else {
            styles::text_primary()
        };
        let (_, value_placeholder) = placeholders(index);

        if self.state.is_editing_field(index, EditTarget::Value) {
            let cursor = self.cursor();
            let (lines, _) = cursor_lines(&field.value, cursor, style);
            let row = cursor_row(&field.value, cursor, area.width);
            let scroll = (row + 1).saturating_sub(usize::from(area.height));
            return (Text::from(lines), u16::try_from(scroll).unwrap_or(u16::MAX));
        }

        let lines: Vec<Line<'static>> = if field.value.is_empty() {
            vec![Line::from(Span::styled(
                value_placeholder,
                styles::placeholder(),
            ))]
        } else {
            field
                .value
                .split('\n')
                .map(|line| Line::styled(line.to_string(), style))
                .collect()
        };

        let lines = if self.is_focused(index, EditTarget::Value) {
            lines
                .into_iter()
                .map(|line| line.patch_style(styles::focused_selected()))
                .collect()
        } else {
            lines
        };
        (Text::from(lines), 0)
    }
}

impl Widget for FieldCards<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        for region in self.regions {
            let Some(field) = self.state.fields.get(region.index) else {
                continue;
            };
            let rect = Rect::new(
                region.left,
                region.top,
                region.right - region.left,
                region.bottom - region.top,
            );
            let dimmed = self.state.drag.source() == Some(region.index);

            let mut block = self.card_block(region.index);
            let inner = block.inner(rect);
            let editing = self.state.is_editing_field(region.index, EditTarget::Value);
            if !editing && wrapped_rows(&field.value, inner.width) > MAX_VALUE_ROWS {
                let more = Line::styled(" … ", styles::text_muted()).right_aligned();
                block = block.title_bottom(more);
            }
            block.render(rect, buf);

            if inner.height == 0 {
                continue;
            }
            let label_area = Rect { height: 1, ..inner };
            let value_area = Rect {
                y: inner.y + 1,
                height: inner.height - 1,
                ..inner
            };
            let dim = Style::default().add_modifier(Modifier::DIM);

            let mut label = Text::from(self.label_line(region.index, field, inner.width, dimmed));
            if dimmed {
                label = label.patch_style(dim);
            }
            Paragraph::new(label).render(label_area, buf);

            let (mut value, scroll) = self.value_text(region.index, field, value_area, dimmed);
            if dimmed {
                value = value.patch_style(dim);
            }
            Paragraph::new(value)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
                .render(value_area, buf);
        }
    }
}

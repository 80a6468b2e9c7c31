//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use formsmith_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// The only state written back is layout: `card_regions` (where each visible
/// card was drawn, so pointer events map back to list positions) and the
/// result modal's scroll bound.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);

    state.card_regions = widgets::layout_cards(state, areas.fields);
    frame.render_widget(
        widgets::FieldCards::new(state, &state.card_regions),
        areas.fields,
    );

    frame.render_widget(widgets::Footer::new(state), areas.footer);

    match state.ui_mode {
        UiMode::Normal | UiMode::Editing => {}
        UiMode::ConfirmDialog => {
            if let Some(ref dialog_state) = state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
            }
        }
        UiMode::Result => {
            if let Some(max) = widgets::result_max_scroll(&state.result, area) {
                state.result.set_max_scroll(max);
            }
            frame.render_widget(widgets::ResultModal::new(&state.result), area);
        }
        UiMode::Notice => {
            if let Some(ref notice) = state.notice {
                frame.render_widget(widgets::Notice::new(notice), area);
            }
        }
    }
}

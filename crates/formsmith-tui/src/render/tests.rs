//! Full-screen rendering tests for each UI mode

use super::view;
use crate::test_utils::TestTerminal;
use crate::widgets::COPIED_LABEL;
use formsmith_app::config::Settings;
use formsmith_app::handler::update;
use formsmith_app::input_key::{PointerEvent, PointerKind};
use formsmith_app::message::Message;
use formsmith_app::state::{AppState, UiMode};
use formsmith_core::FieldChanges;

fn create_base_state() -> AppState {
    let mut settings = Settings::default();
    settings.form.preset_labels = vec!["Name".into(), "Office".into(), "Email".into()];
    AppState::with_settings(settings)
}

fn set_value(state: &mut AppState, index: usize, value: &str) {
    let id = state.fields.get(index).unwrap().id.clone();
    update(
        state,
        Message::UpdateField {
            id,
            changes: FieldChanges::value(value),
        },
    );
}

/// Run a message and its follow-ups
fn process(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn render_screen(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view(frame, state));
}

#[test]
fn test_normal_mode_shows_header_cards_and_footer() {
    let mut term = TestTerminal::new();
    let mut state = create_base_state();

    render_screen(&mut term, &mut state);

    assert!(term.line_contains(1, "Formsmith"));
    assert!(term.line_contains(1, "Professor Summary App"));
    assert!(term.buffer_contains("Name"));
    assert!(term.buffer_contains("Office"));
    assert!(term.buffer_contains("Email"));
    assert!(term.line_contains(23, "[g] Generate"));
}

#[test]
fn test_view_records_card_regions() {
    let mut term = TestTerminal::new();
    let mut state = create_base_state();

    render_screen(&mut term, &mut state);

    assert_eq!(state.card_regions.len(), 3);
    assert_eq!(state.card_regions[0].top, 3);
    assert_eq!(state.card_regions[0].index, 0);
    assert_eq!(state.card_regions[2].index, 2);
}

#[test]
fn test_rendered_regions_drive_pointer_reorder() {
    let mut term = TestTerminal::new();
    let mut state = create_base_state();
    render_screen(&mut term, &mut state);

    let first = state.card_regions[0];
    let last = state.card_regions[2];
    let pointer = |kind, row| {
        Message::Pointer(PointerEvent {
            kind,
            column: 10,
            row,
        })
    };

    process(&mut state, pointer(PointerKind::Down, first.top + 1));
    process(&mut state, pointer(PointerKind::Drag, last.top + 1));
    process(&mut state, pointer(PointerKind::Up, last.top + 1));

    let labels: Vec<_> = state.fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, ["Office", "Email", "Name"]);
}

#[test]
fn test_confirm_dialog_overlay() {
    let mut term = TestTerminal::new();
    let mut state = create_base_state();
    update(&mut state, Message::RequestClearAll);
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

    render_screen(&mut term, &mut state);

    assert!(term.buffer_contains("Clear Values?"));
    assert!(term.buffer_contains("[y] Clear"));
}

#[test]
fn test_result_overlay_after_generate() {
    let mut term = TestTerminal::new();
    let mut state = create_base_state();
    set_value(&mut state, 0, "Dr. Smith");
    update(&mut state, Message::Generate);
    assert_eq!(state.ui_mode, UiMode::Result);

    render_screen(&mut term, &mut state);

    assert!(term.buffer_contains("Name: Dr. Smith"));
    assert!(term.buffer_contains("Office: N/A"));
    assert!(term.buffer_contains("Email: N/A"));
    assert!(term.buffer_contains("[c] Copy to clipboard"));
}

#[test]
fn test_result_overlay_shows_copied_acknowledgment() {
    let mut term = TestTerminal::new();
    let mut state = create_base_state();
    set_value(&mut state, 0, "Dr. Smith");
    update(&mut state, Message::Generate);
    update(&mut state, Message::CopyResult);
    let request = state.result.copy_request;
    update(&mut state, Message::ClipboardCopied { request });

    render_screen(&mut term, &mut state);

    assert!(term.buffer_contains(COPIED_LABEL));
}

#[test]
fn test_wrapped_result_scrolls_to_its_last_row() {
    let mut term = TestTerminal::with_size(80, 10);
    let mut state = create_base_state();
    let words: Vec<String> = (0..60).map(|i| format!("w{:02}", i)).collect();
    set_value(&mut state, 2, &format!("{} ENDMARK", words.join(" ")));
    update(&mut state, Message::Generate);

    render_screen(&mut term, &mut state);
    assert!(!term.buffer_contains("ENDMARK"));
    assert!(state.result.max_scroll.is_some_and(|max| max > 0));

    for _ in 0..20 {
        process(&mut state, Message::ScrollResultDown(3));
        render_screen(&mut term, &mut state);
    }

    assert!(term.buffer_contains("ENDMARK"));
    assert_eq!(Some(state.result.scroll), state.result.max_scroll);
}

#[test]
fn test_notice_overlay_when_all_fields_blank() {
    let mut term = TestTerminal::new();
    let mut settings = Settings::default();
    settings.form.preset_labels = Vec::new();
    let mut state = AppState::with_settings(settings);
    update(&mut state, Message::Generate);
    assert_eq!(state.ui_mode, UiMode::Notice);

    render_screen(&mut term, &mut state);

    assert!(term.buffer_contains("Please enter at least one field."));
}

#[test]
fn test_compact_terminal_renders_without_panic() {
    let mut term = TestTerminal::compact();
    let mut state = create_base_state();
    for _ in 0..10 {
        update(&mut state, Message::AddField);
    }

    render_screen(&mut term, &mut state);

    assert!(!state.card_regions.is_empty());
    assert!(state
        .card_regions
        .iter()
        .any(|region| region.index == state.selected));
}

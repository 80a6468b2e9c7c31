//! Application state (Model in TEA pattern)

use formsmith_core::prelude::*;
use formsmith_core::{Field, FieldId};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::drag::DragState;
use crate::field_list::FieldList;
use crate::result::{NoticeState, ResultState};
use crate::text_input::TextCursor;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Navigating the field cards
    #[default]
    Normal,

    /// Capturing text for a field label/value or the title
    Editing,

    /// Confirmation dialog (clear all values)
    ConfirmDialog,

    /// Result modal with the generated summary
    Result,

    /// Blocking notice (validation failure)
    Notice,
}

/// Which part of a field card is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTarget {
    #[default]
    Label,
    Value,
}

impl EditTarget {
    pub fn toggled(self) -> Self {
        match self {
            EditTarget::Label => EditTarget::Value,
            EditTarget::Value => EditTarget::Label,
        }
    }
}

/// What an edit session writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditFocus {
    Field { id: FieldId, target: EditTarget },
    Title,
}

/// Active text edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub focus: EditFocus,
    pub cursor: TextCursor,
}

/// Screen rows occupied by a rendered field card.
///
/// Recorded by the renderer each frame so pointer events can be mapped
/// back to list positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegion {
    pub index: usize,
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
    /// First row of the value text inside the card
    pub value_row: u16,
}

impl CardRegion {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.left && column < self.right && row >= self.top && row < self.bottom
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub ui_mode: UiMode,

    /// Form title (stamped on generated output)
    pub title: String,

    /// The form's rows
    pub fields: FieldList,

    /// Position of the focused card
    pub selected: usize,

    /// Focused part of the selected card
    pub edit_target: EditTarget,

    /// Text edit in progress (UiMode::Editing)
    pub edit: Option<EditSession>,

    /// Drag gesture state
    pub drag: DragState,

    /// Confirmation dialog state (UiMode::ConfirmDialog)
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Blocking notice (UiMode::Notice)
    pub notice: Option<NoticeState>,

    /// Generated output and copy feedback
    pub result: ResultState,

    /// Card hit regions from the last render
    pub card_regions: Vec<CardRegion>,

    /// Loaded settings
    pub settings: Settings,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state seeded from settings (title and preset labels)
    pub fn with_settings(settings: Settings) -> Self {
        let fields = FieldList::with_labels(settings.form.preset_labels.iter().cloned());
        info!(
            "Starting form {:?} with {} fields",
            settings.form.title,
            fields.len()
        );
        Self {
            ui_mode: UiMode::Normal,
            title: settings.form.title.clone(),
            fields,
            selected: 0,
            edit_target: EditTarget::Label,
            edit: None,
            drag: DragState::Idle,
            confirm_dialog_state: None,
            notice: None,
            result: ResultState::default(),
            card_regions: Vec::new(),
            settings,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }

    /// The focused field
    pub fn selected_field(&self) -> Option<&Field> {
        self.fields.get(self.selected)
    }

    /// Keep the selection inside the list after removals
    pub fn clamp_selection(&mut self) {
        let last = self.fields.len().saturating_sub(1);
        if self.selected > last {
            self.selected = last;
        }
    }

    /// Text currently targeted by the edit session
    pub fn editing_text(&self) -> Option<&str> {
        let session = self.edit.as_ref()?;
        match &session.focus {
            EditFocus::Title => Some(self.title.as_str()),
            EditFocus::Field { id, target } => {
                let field = self.fields.find(id)?;
                Some(match target {
                    EditTarget::Label => field.label.as_str(),
                    EditTarget::Value => field.value.as_str(),
                })
            }
        }
    }

    /// True when `index`/`target` is the part being edited
    pub fn is_editing_field(&self, index: usize, target: EditTarget) -> bool {
        match (&self.edit, self.fields.get(index)) {
            (
                Some(EditSession {
                    focus:
                        EditFocus::Field {
                            id,
                            target: editing,
                        },
                    ..
                }),
                Some(field),
            ) => id == &field.id && *editing == target,
            _ => false,
        }
    }

    pub fn is_editing_title(&self) -> bool {
        matches!(
            self.edit,
            Some(EditSession {
                focus: EditFocus::Title,
                ..
            })
        )
    }

    /// List position under a pointer, from the last rendered frame
    pub fn card_at(&self, column: u16, row: u16) -> Option<&CardRegion> {
        self.card_regions
            .iter()
            .find(|region| region.contains(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormSettings;

    #[test]
    fn test_new_state_has_one_blank_field() {
        let state = AppState::new();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert_eq!(state.title, "Professor Summary App");
        assert_eq!(state.fields.len(), 1);
        assert_eq!(state.selected, 0);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_with_settings_uses_preset_labels() {
        let settings = Settings {
            form: FormSettings {
                title: "Faculty".to_string(),
                preset_labels: vec!["Name".to_string(), "Office".to_string()],
            },
            ..Settings::default()
        };

        let state = AppState::with_settings(settings);

        assert_eq!(state.title, "Faculty");
        assert_eq!(state.fields.len(), 2);
        assert_eq!(state.fields.get(1).unwrap().label, "Office");
    }

    #[test]
    fn test_clamp_selection() {
        let mut state = AppState::new();
        state.selected = 5;
        state.clamp_selection();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_editing_text_for_title() {
        let mut state = AppState::new();
        state.edit = Some(EditSession {
            focus: EditFocus::Title,
            cursor: TextCursor::default(),
        });
        assert_eq!(state.editing_text(), Some("Professor Summary App"));
        assert!(state.is_editing_title());
    }

    #[test]
    fn test_is_editing_field() {
        let mut state = AppState::new();
        let id = state.fields.get(0).unwrap().id.clone();
        state.edit = Some(EditSession {
            focus: EditFocus::Field {
                id,
                target: EditTarget::Value,
            },
            cursor: TextCursor::default(),
        });
        assert!(state.is_editing_field(0, EditTarget::Value));
        assert!(!state.is_editing_field(0, EditTarget::Label));
        assert!(!state.is_editing_title());
    }

    #[test]
    fn test_card_at_hit_testing() {
        let mut state = AppState::new();
        state.card_regions = vec![
            CardRegion {
                index: 0,
                left: 0,
                right: 40,
                top: 3,
                bottom: 8,
                value_row: 5,
            },
            CardRegion {
                index: 1,
                left: 0,
                right: 40,
                top: 8,
                bottom: 13,
                value_row: 10,
            },
        ];

        assert_eq!(state.card_at(5, 3).map(|r| r.index), Some(0));
        assert_eq!(state.card_at(5, 8).map(|r| r.index), Some(1));
        assert!(state.card_at(5, 13).is_none());
        assert!(state.card_at(40, 4).is_none());
    }

    #[test]
    fn test_edit_target_toggle() {
        assert_eq!(EditTarget::Label.toggled(), EditTarget::Value);
        assert_eq!(EditTarget::Value.toggled(), EditTarget::Label);
    }
}

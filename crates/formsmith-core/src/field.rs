//! Field entity model: one label/value row of the form and its identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, unique identifier of a [`Field`].
///
/// Stable for the field's lifetime and never recycled: every call to
/// [`FieldId::new`] draws a fresh random UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One label/value row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    /// Name/title of the row
    pub label: String,
    /// Description of the row; may span multiple lines
    pub value: String,
}

impl Field {
    /// Create a blank field with a fresh identifier
    pub fn new() -> Self {
        Self {
            id: FieldId::new(),
            label: String::new(),
            value: String::new(),
        }
    }

    /// Create a field with a preset label and an empty value
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::new()
        }
    }

    /// True when both label and value are empty after trimming
    pub fn is_blank(&self) -> bool {
        trim_text(&self.label).is_empty() && trim_text(&self.value).is_empty()
    }

    /// Apply a partial update. Returns true if anything changed.
    pub fn apply(&mut self, changes: FieldChanges) -> bool {
        let mut changed = false;
        if let Some(label) = changes.label {
            changed |= self.label != label;
            self.label = label;
        }
        if let Some(value) = changes.value {
            changed |= self.value != value;
            self.value = value;
        }
        changed
    }

    /// Reset label and value, keeping the identifier
    pub fn reset(&mut self) {
        self.label.clear();
        self.value.clear();
    }
}

/// Whitespace stripped from field text: Unicode space separators, tab,
/// the line terminators and the byte order mark. U+0085 is not included.
pub fn is_trim_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing [`is_trim_whitespace`] characters
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_trim_whitespace)
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for a [`Field`]. `None` leaves the part unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldChanges {
    pub label: Option<String>,
    pub value: Option<String>,
}

impl FieldChanges {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: None,
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: Some(value.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.value.is_none()
    }
}

//! Ordered collection of form fields
//!
//! `FieldList` is the single owner of the form's rows. Every mutation is
//! addressed by [`FieldId`] except reordering, which works on positions
//! reported by the drag protocol. The list is never empty.

use formsmith_core::prelude::*;
use formsmith_core::{Field, FieldChanges, FieldId};

use crate::confirm_dialog::ConfirmOutcome;

/// Ordered, never-empty list of fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl Default for FieldList {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldList {
    /// Create a list holding a single blank field
    pub fn new() -> Self {
        Self {
            fields: vec![Field::new()],
        }
    }

    /// Create a list with one field per preset label.
    ///
    /// Falls back to a single blank field when `labels` is empty.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<Field> = labels.into_iter().map(Field::with_label).collect();
        if fields.is_empty() {
            Self::new()
        } else {
            Self { fields }
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn find(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// Current position of the field with `id`
    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn as_slice(&self) -> &[Field] {
        &self.fields
    }

    /// Identifiers in list order
    pub fn ids(&self) -> Vec<FieldId> {
        self.fields.iter().map(|f| f.id.clone()).collect()
    }

    /// Append a blank field with a fresh identifier
    pub fn add(&mut self) -> FieldId {
        let field = Field::new();
        let id = field.id.clone();
        self.fields.push(field);
        debug!("Added field {} (now {} fields)", id, self.fields.len());
        id
    }

    /// Apply a partial update to the field with `id`.
    ///
    /// Unknown identifiers are ignored. Returns true if a field matched.
    pub fn update(&mut self, id: &FieldId, changes: FieldChanges) -> bool {
        match self.fields.iter_mut().find(|f| &f.id == id) {
            Some(field) => {
                if field.apply(changes) {
                    trace!("Updated field {}", id);
                }
                true
            }
            None => {
                trace!("Ignoring update for unknown field {}", id);
                false
            }
        }
    }

    /// Remove the field with `id`.
    ///
    /// When it is the only field left it is reset instead, keeping its
    /// identifier. Returns true if a field matched.
    pub fn remove(&mut self, id: &FieldId) -> bool {
        let Some(index) = self.position(id) else {
            trace!("Ignoring remove for unknown field {}", id);
            return false;
        };

        if self.fields.len() == 1 {
            self.fields[0].reset();
            debug!("Reset last remaining field {}", id);
        } else {
            self.fields.remove(index);
            debug!("Removed field {} (now {} fields)", id, self.fields.len());
        }
        true
    }

    /// Clear every value, keeping labels and identifiers.
    ///
    /// Only mutates when the confirmation gate answered `Confirmed`.
    /// Returns true if the values were cleared.
    pub fn clear_all(&mut self, outcome: ConfirmOutcome) -> bool {
        if outcome != ConfirmOutcome::Confirmed {
            debug!("Clear all values cancelled");
            return false;
        }
        for field in &mut self.fields {
            field.value.clear();
        }
        info!("Cleared values of {} fields", self.fields.len());
        true
    }

    /// Move the field at `from` to position `to`, shifting the fields in
    /// between by one. Out-of-range positions and `from == to` are no-ops.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.fields.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let field = self.fields.remove(from);
        debug!("Moving field {} from {} to {}", field.id, from, to);
        self.fields.insert(to, field);
        true
    }
}

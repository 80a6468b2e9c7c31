//! Drag-and-drop reorder protocol
//!
//! A drag gesture is a two-state machine. Hovering only records a pending
//! target; the list is mutated once, on drop.
//!
//! ```text
//! Idle ──begin(i)──▶ Dragging { source: i, target: None }
//!                     │  hover(j) → target = Some(j)
//!                     ├─ drop_onto(list) → move source→target (if different) → Idle
//!                     └─ cancel()        → Idle
//! ```

use formsmith_core::prelude::*;

use crate::field_list::FieldList;

/// A committed reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// State of the drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Position of the item being dragged
        source: usize,
        /// Position currently hovered, if any
        target: Option<usize>,
    },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn source(&self) -> Option<usize> {
        match self {
            DragState::Dragging { source, .. } => Some(*source),
            DragState::Idle => None,
        }
    }

    /// Pending drop target
    pub fn target(&self) -> Option<usize> {
        match self {
            DragState::Dragging { target, .. } => *target,
            DragState::Idle => None,
        }
    }

    /// Where the dragged item would land if dropped now
    pub fn effective_target(&self) -> Option<usize> {
        match self {
            DragState::Dragging { source, target } => Some(target.unwrap_or(*source)),
            DragState::Idle => None,
        }
    }

    /// Start dragging the item at `index`.
    ///
    /// Only one drag may be active; a second `begin` is ignored.
    pub fn begin(&mut self, index: usize) -> bool {
        if self.is_active() {
            debug!("Ignoring drag start at {}: drag already active", index);
            return false;
        }
        *self = DragState::Dragging {
            source: index,
            target: None,
        };
        debug!("Drag started at {}", index);
        true
    }

    /// Record the item under the pointer as the pending target
    pub fn hover(&mut self, index: usize) {
        if let DragState::Dragging { target, .. } = self {
            *target = Some(index);
        }
    }

    /// Finish the gesture, committing the move if the target differs from the source
    pub fn drop_onto(&mut self, fields: &mut FieldList) -> Option<Reorder> {
        let DragState::Dragging { source, target } = std::mem::take(self) else {
            return None;
        };

        let to = target?;
        if to == source {
            debug!("Dropped on source position {}, order unchanged", source);
            return None;
        }

        if fields.move_item(source, to) {
            Some(Reorder { from: source, to })
        } else {
            warn!(
                "Drop target {} or source {} out of range for {} fields",
                to,
                source,
                fields.len()
            );
            None
        }
    }

    /// Abort the gesture without touching the list
    pub fn cancel(&mut self) {
        if self.is_active() {
            debug!("Drag cancelled");
        }
        *self = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_core::FieldId;

    fn abcd() -> FieldList {
        FieldList::with_labels(["A", "B", "C", "D"])
    }

    fn labels(list: &FieldList) -> Vec<String> {
        list.iter().map(|f| f.label.clone()).collect()
    }

    fn sorted_ids(list: &FieldList) -> Vec<FieldId> {
        let mut ids = list.ids();
        ids.sort();
        ids
    }

    #[test]
    fn test_drag_zero_to_two() {
        let mut list = abcd();
        let mut drag = DragState::default();

        drag.begin(0);
        drag.hover(1);
        drag.hover(2);
        let reorder = drag.drop_onto(&mut list);

        assert_eq!(reorder, Some(Reorder { from: 0, to: 2 }));
        assert_eq!(labels(&list), vec!["B", "C", "A", "D"]);
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_hover_does_not_mutate_list() {
        let mut list = abcd();
        let before = list.clone();
        let mut drag = DragState::default();

        drag.begin(3);
        drag.hover(0);

        assert_eq!(list, before);
        assert_eq!(drag.target(), Some(0));
        drag.cancel();
        assert_eq!(drag.drop_onto(&mut list), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_drop_on_source_is_noop() {
        let mut list = abcd();
        let before = list.clone();
        let mut drag = DragState::default();

        drag.begin(1);
        drag.hover(2);
        drag.hover(1);

        assert_eq!(drag.drop_onto(&mut list), None);
        assert_eq!(list, before);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_drop_without_hover_is_noop() {
        let mut list = abcd();
        let before = list.clone();
        let mut drag = DragState::default();

        drag.begin(2);
        assert_eq!(drag.drop_onto(&mut list), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_cancel_leaves_order() {
        let mut list = abcd();
        let before = list.clone();
        let mut drag = DragState::default();

        drag.begin(0);
        drag.hover(3);
        drag.cancel();

        assert_eq!(drag, DragState::Idle);
        assert_eq!(drag.drop_onto(&mut list), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_second_begin_is_ignored() {
        let mut drag = DragState::default();
        assert!(drag.begin(1));
        assert!(!drag.begin(3));
        assert_eq!(drag.source(), Some(1));
    }

    #[test]
    fn test_hover_while_idle_is_ignored() {
        let mut drag = DragState::default();
        drag.hover(2);
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_effective_target_defaults_to_source() {
        let mut drag = DragState::default();
        assert_eq!(drag.effective_target(), None);
        drag.begin(2);
        assert_eq!(drag.effective_target(), Some(2));
        drag.hover(0);
        assert_eq!(drag.effective_target(), Some(0));
    }

    #[test]
    fn test_reorder_is_permutation() {
        for from in 0..4 {
            for to in 0..4 {
                let mut list = abcd();
                let ids_before = sorted_ids(&list);
                let mut drag = DragState::default();

                drag.begin(from);
                drag.hover(to);
                drag.drop_onto(&mut list);

                assert_eq!(sorted_ids(&list), ids_before, "from {} to {}", from, to);
                assert_eq!(list.len(), 4);
            }
        }
    }

    #[test]
    fn test_out_of_range_target_is_noop() {
        let mut list = abcd();
        let before = list.clone();
        let mut drag = DragState::default();

        drag.begin(0);
        drag.hover(9);

        assert_eq!(drag.drop_onto(&mut list), None);
        assert_eq!(list, before);
    }
}

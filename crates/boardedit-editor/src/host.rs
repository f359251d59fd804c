//! Collaborators supplied by the host editing tool.
//!
//! The editor never owns undo transactions, user-facing messages or the
//! selection; it talks to the host through these traits. [`RecordingCommit`]
//! and [`RecordingWarnings`] are simple in-memory implementations, used by the
//! replay binary and the tests.

use crate::model::Shape;

/// Undo transaction sink.
pub trait CommitSink {
    /// Called before the first mutation of `shape` in a transaction.
    fn modify(&mut self, shape: &Shape);

    /// Registers an item created by the edit (for example the second half of
    /// a split segment).
    fn add(&mut self, shape: Shape);

    /// Finalizes the transaction with the edited shape.
    fn push(&mut self, message: &str, shape: &Shape);

    /// Abandons the transaction.
    fn revert(&mut self);
}

pub trait WarningSink {
    fn show_warning(&mut self, message: &str);
}

pub trait SelectionTracker {
    fn is_locked(&self, shape: &Shape) -> bool;

    /// Whether vertices may be added to or removed from `shape`.
    fn can_edit_corners(&self, shape: &Shape) -> bool {
        shape.supports_corners() && !self.is_locked(shape)
    }
}

/// Modifier keys sampled with each drag event.
pub trait ModifierState {
    /// The constraint modifier is held.
    fn alt_constraint(&self) -> bool;
}

impl ModifierState for bool {
    fn alt_constraint(&self) -> bool {
        *self
    }
}

/// Records every commit call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingCommit {
    pub modified: Vec<Shape>,
    pub added: Vec<Shape>,
    pub pushed: Vec<(String, Shape)>,
    pub reverts: usize,
}

impl CommitSink for RecordingCommit {
    fn modify(&mut self, shape: &Shape) {
        self.modified.push(shape.clone());
    }

    fn add(&mut self, shape: Shape) {
        self.added.push(shape);
    }

    fn push(&mut self, message: &str, shape: &Shape) {
        self.pushed.push((message.to_string(), shape.clone()));
    }

    fn revert(&mut self) {
        self.reverts += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingWarnings {
    pub messages: Vec<String>,
}

impl WarningSink for RecordingWarnings {
    fn show_warning(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// A tracker where nothing is locked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlocked;

impl SelectionTracker for Unlocked {
    fn is_locked(&self, _shape: &Shape) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Arc, Segment};
    use boardedit_core::Point;

    struct Locked;

    impl SelectionTracker for Locked {
        fn is_locked(&self, _shape: &Shape) -> bool {
            true
        }
    }

    #[test]
    fn test_corner_eligibility() {
        let seg: Shape = Segment::new(Point::new(0, 0), Point::new(1, 0)).into();
        let arc: Shape = Arc::new(Point::new(1, 0), Point::new(0, 1), Point::new(-1, 0), Point::new(0, 0)).into();
        assert!(Unlocked.can_edit_corners(&seg));
        assert!(!Unlocked.can_edit_corners(&arc));
        assert!(!Locked.can_edit_corners(&seg));
    }

    #[test]
    fn test_bool_modifier() {
        assert!(true.alt_constraint());
        assert!(!false.alt_constraint());
    }
}

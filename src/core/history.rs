//! Generic undo/redo timeline over immutable state snapshots.
//!
//! ## Model
//!
//! Two stacks of previously-held state values:
//!
//! - `past` — states to return to via [`Timeline::undo`]
//! - `future` — states undone and available via [`Timeline::redo`]
//!
//! Snapshots are complete position values, so undo followed by redo
//! restores the exact prior value. Any forward move clears the `future`
//! stack; redo is only possible immediately after an undo.
//!
//! Backed by `im::Vector` for O(1) structural-sharing clones; game states
//! embedding a timeline stay cheap to copy.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Undo/redo stacks layered over an engine's immutable state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timeline<T: Clone> {
    past: Vector<T>,
    future: Vector<T>,
}

impl<T: Clone> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Timeline<T> {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            past: Vector::new(),
            future: Vector::new(),
        }
    }

    /// Record a forward move: push the pre-move state onto the past and
    /// clear the redo stack.
    pub fn record(&mut self, current: T) {
        self.past.push_back(current);
        self.future.clear();
    }

    /// Step back: pop the newest past state, pushing `current` onto the
    /// redo stack. Returns `None` (leaving the stacks untouched) when
    /// there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.past.pop_back()?;
        self.future.push_front(current);
        Some(previous)
    }

    /// Step forward again: pop the next undone state, pushing `current`
    /// back onto the past. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.future.pop_front()?;
        self.past.push_back(current);
        Some(next)
    }

    /// Whether [`Timeline::undo`] would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether [`Timeline::redo`] would succeed.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// The most recent past state, without popping it.
    #[must_use]
    pub fn last_past(&self) -> Option<&T> {
        self.past.back()
    }

    /// Number of recorded past states.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.past.len()
    }
}

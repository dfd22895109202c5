//! Linear undo stack of full canvas snapshots.

use super::canvas::Canvas;
use std::collections::VecDeque;

/// Ordered canvas snapshots, newest last.
///
/// Every checkpoint is a deep copy, so restoring never depends on how the
/// live canvas was mutated in between.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    snapshots: VecDeque<Canvas>,
    /// Maximum number of snapshots kept (0 = unlimited)
    max_depth: usize,
}

impl UndoStack {
    /// Creates an empty stack holding at most `max_depth` snapshots (0 = unlimited).
    pub fn new(max_depth: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            max_depth,
        }
    }

    /// Pushes a deep copy of `canvas`, evicting the oldest snapshot when full.
    pub fn checkpoint(&mut self, canvas: &Canvas) {
        if self.max_depth > 0 && self.snapshots.len() >= self.max_depth {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(canvas.clone());
    }

    /// Replaces `canvas` with the most recent snapshot.
    ///
    /// Returns `false` and leaves the canvas untouched when the stack is empty.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        match self.snapshots.pop_back() {
            Some(snapshot) => {
                *canvas = snapshot;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

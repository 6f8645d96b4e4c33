//! Linear undo over full buffer snapshots

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::buffer::LineBuffer;
use crate::error::{EditError, EditResult};

/// Undo history
///
/// A stack of independent buffer copies, most recent at the back. The
/// back entry always equals the live buffer after a completed edit, and
/// the stack never drops below one entry.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    snapshots: VecDeque<LineBuffer>,
    limit: Option<NonZeroUsize>,
}

impl UndoHistory {
    /// Start a history whose first entry is `initial`
    pub fn new(initial: &LineBuffer) -> Self {
        Self::with_limit(initial, None)
    }

    /// Start a history that keeps at most `limit` snapshots.
    ///
    /// When full, the oldest snapshot is evicted, so the oldest retained
    /// state becomes the floor for `revert`.
    pub fn with_limit(initial: &LineBuffer, limit: Option<NonZeroUsize>) -> Self {
        let mut snapshots = VecDeque::new();
        snapshots.push_back(initial.clone());
        Self { snapshots, limit }
    }

    /// Push a deep copy of `buffer`
    pub fn snapshot(&mut self, buffer: &LineBuffer) {
        self.snapshots.push_back(buffer.clone());

        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit.get() {
                self.snapshots.pop_front();
            }
        }
        log::trace!("undo snapshot pushed (depth {})", self.snapshots.len());
    }

    /// Discard the current state and return a copy of the previous one
    pub fn revert(&mut self) -> EditResult<LineBuffer> {
        if self.snapshots.len() <= 1 {
            return Err(EditError::UndoUnavailable);
        }
        self.snapshots.pop_back();
        self.snapshots
            .back()
            .cloned()
            .ok_or(EditError::UndoUnavailable)
    }

    /// Number of stored snapshots, the initial one included
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn can_revert(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// The snapshot matching the live buffer
    pub fn current(&self) -> Option<&LineBuffer> {
        self.snapshots.back()
    }
}

//! Linear undo/redo history over full-text snapshots of one note.
//!
//! An edit after an undo discards the redo branch; there is no history tree.
//! The invariant `cursor < snapshots.len()` holds after every operation and
//! the note's live content is always `snapshots[cursor]`.

use std::collections::VecDeque;

use crate::model::{Note, NoteId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditHistory {
    note_id: NoteId,
    snapshots: VecDeque<String>,
    cursor: usize,
    /// 0 means unbounded
    limit: usize,
}

impl EditHistory {
    /// Fresh history whose only snapshot is the note's current content
    pub fn begin(note: &Note) -> Self {
        Self {
            note_id: note.id,
            snapshots: VecDeque::from([note.content.clone()]),
            cursor: 0,
            limit: 0,
        }
    }

    /// Cap the number of snapshots kept; the oldest are dropped first
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self.enforce_limit();
        self
    }

    /// Record new content as the latest snapshot, discarding any redo-able
    /// future. Returns `false` when the content equals the current snapshot.
    pub fn record(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        if content == self.current() {
            return false;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(content);
        self.cursor = self.snapshots.len() - 1;
        self.enforce_limit();
        true
    }

    /// Step back one snapshot. `None` (and no change) at the oldest one.
    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward one snapshot. `None` (and no change) at the newest one.
    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn current(&self) -> &str {
        &self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn enforce_limit(&mut self) {
        if self.limit == 0 {
            return;
        }
        while self.snapshots.len() > self.limit && self.cursor > 0 {
            self.snapshots.pop_front();
            self.cursor -= 1;
        }
        debug_assert!(self.cursor < self.snapshots.len());
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Linear undo/redo stack over snapshots.
//!
//! One stack exists per slide. It starts empty (uninitialized), is seeded
//! exactly once, and from then on behaves as a cursor over an append-only
//! list that is truncated whenever a new edit lands behind the tail.

use deck_scene_codec::Snapshot;
use tracing::debug;

/// Outcome of recording a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The stack was empty and is now seeded with the snapshot.
    Seeded,
    /// The snapshot was appended; any redo branch was discarded.
    Pushed {
        /// Entries dropped from the redo branch.
        truncated: usize,
    },
    /// The snapshot equals the entry under the cursor; nothing changed.
    Unchanged,
    /// `save` was called before `initialize`; nothing changed.
    Uninitialized,
}

impl SaveOutcome {
    /// Returns `true` if the stack changed.
    pub fn changed(self) -> bool {
        matches!(self, Self::Seeded | Self::Pushed { .. })
    }
}

/// Undo/redo history of one slide.
#[derive(Clone, Debug, Default)]
pub struct HistoryStack {
    entries: Vec<Snapshot>,
    cursor: usize,
}

impl HistoryStack {
    /// Create an uninitialized stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack already seeded with `snapshot`.
    pub fn seeded(snapshot: Snapshot) -> Self {
        Self {
            entries: vec![snapshot],
            cursor: 0,
        }
    }

    /// Seed the stack. Only the first call has an effect.
    ///
    /// Returns `false` (and leaves the stack alone) if already initialized,
    /// so a late read of the scene can never clobber accumulated history.
    pub fn initialize(&mut self, snapshot: Snapshot) -> bool {
        if self.is_initialized() {
            debug!(len = self.entries.len(), "history already initialized; ignoring");
            return false;
        }
        self.entries.push(snapshot);
        self.cursor = 0;
        true
    }

    /// Record a new state.
    ///
    /// No-op if `snapshot` equals the entry under the cursor. Otherwise
    /// everything after the cursor is dropped and `snapshot` becomes the new
    /// tail.
    pub fn save(&mut self, snapshot: Snapshot) -> SaveOutcome {
        let Some(current) = self.entries.get(self.cursor) else {
            debug!("save before initialize; ignoring");
            return SaveOutcome::Uninitialized;
        };
        if *current == snapshot {
            return SaveOutcome::Unchanged;
        }
        let truncated = self.entries.len() - self.cursor - 1;
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
        SaveOutcome::Pushed { truncated }
    }

    /// `initialize` if empty, `save` otherwise.
    pub fn record(&mut self, snapshot: Snapshot) -> SaveOutcome {
        if self.is_initialized() {
            self.save(snapshot)
        } else {
            self.entries.push(snapshot);
            self.cursor = 0;
            SaveOutcome::Seeded
        }
    }

    /// Step back. Returns the snapshot now under the cursor, or `None` at
    /// the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward. Returns the snapshot now under the cursor, or `None` at
    /// the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Whether `undo` would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether `redo` would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Whether the stack has been seeded.
    pub fn is_initialized(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    /// Cursor position (0 when uninitialized).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries, including the seed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when uninitialized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }
}

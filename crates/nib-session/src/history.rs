//! Render history for back/forward restoration.

use nib_core::Seed;
use serde_json::Value;

/// One restorable render: the seed plus the panel snapshot taken when the
/// entry was recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub seed: Seed,
    pub pane_state: Value,
}

/// A linear history with a cursor, mirroring browser pushState /
/// replaceState / popstate semantics.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new entry, discarding anything ahead of the cursor.
    pub fn push(&mut self, entry: HistoryEntry) {
        let keep = self.cursor.map(|c| c + 1).unwrap_or(0);
        self.entries.truncate(keep);
        self.entries.push(entry);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Replace the current entry, or record it if the history is empty.
    pub fn replace(&mut self, entry: HistoryEntry) {
        match self.cursor {
            Some(c) => self.entries[c] = entry,
            None => self.push(entry),
        }
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.map(|c| &self.entries[c])
    }

    /// Step back, returning the entry to restore.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        let c = self.cursor?;
        if c == 0 {
            return None;
        }
        self.cursor = Some(c - 1);
        self.entries.get(c - 1)
    }

    /// Step forward, returning the entry to restore.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        let c = self.cursor?;
        if c + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(c + 1);
        self.entries.get(c + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

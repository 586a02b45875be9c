//! Ephemeral history store.

use dorkscope_core::{HistoryEntry, HistoryError, HistoryStore};

/// Keeps the saved list in memory for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    entries: Vec<HistoryEntry>,
    saves: usize,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with entries already saved.
    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries, saves: 0 }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&mut self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        Ok(())
    }
}

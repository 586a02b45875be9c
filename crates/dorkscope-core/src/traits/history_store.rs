//! Persistence seam for the generation history.

use crate::errors::HistoryError;
use crate::types::HistoryEntry;

/// Loads and saves the whole history list, newest first.
///
/// The orchestrator saves the full list after every successful generation;
/// stores never merge or reorder entries.
pub trait HistoryStore {
    /// Previously saved entries. A store with nothing saved returns an empty list.
    fn load(&mut self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Replace the saved list with `entries`.
    fn save(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError>;

    /// Remove everything saved.
    fn clear(&mut self) -> Result<(), HistoryError>;
}

impl<S: HistoryStore + ?Sized> HistoryStore for Box<S> {
    fn load(&mut self) -> Result<Vec<HistoryEntry>, HistoryError> {
        (**self).load()
    }

    fn save(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        (**self).save(entries)
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        (**self).clear()
    }
}

//! Seams where callers inject behavior into the engine and session.

pub mod history_store;
pub mod random_source;

pub use history_store::HistoryStore;
pub use random_source::RandomSource;

//! `HistoryStore` implementations.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileHistoryStore;
pub use memory::MemoryHistoryStore;

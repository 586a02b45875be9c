//! # dorkscope-session
//!
//! Drives one interactive session: rejects blank intents, runs synthesis
//! then analysis, tracks the current dork and its refinements, and keeps a
//! capped generation history behind a `HistoryStore`.

pub mod builder;
pub mod history;
pub mod orchestrator;
pub mod store;

pub use builder::{build_from_config, ConfiguredOrchestrator};
pub use history::HistoryLog;
pub use orchestrator::{Orchestrator, Session};
pub use store::{JsonFileHistoryStore, MemoryHistoryStore};

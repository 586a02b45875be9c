//! Wiring an orchestrator from configuration.

use dorkscope_core::errors::SessionResult;
use dorkscope_core::{DorkscopeConfig, HistoryStore, RandomSource};
use dorkscope_risk::{SeededRandom, ThreadRandom};

use crate::orchestrator::Orchestrator;
use crate::store::{JsonFileHistoryStore, MemoryHistoryStore};

/// An orchestrator whose store and random source were chosen at runtime.
pub type ConfiguredOrchestrator = Orchestrator<Box<dyn HistoryStore>, Box<dyn RandomSource>>;

/// Build an orchestrator from resolved configuration.
///
/// History goes to `<storage_dir>/<key>.json` when persistence is on and a
/// directory is known, otherwise to memory. A configured seed pins the
/// fallback volume estimate.
pub fn build_from_config(config: &DorkscopeConfig) -> SessionResult<ConfiguredOrchestrator> {
    let history = &config.history;

    let persist = history.effective_persist();
    let store: Box<dyn HistoryStore> = match (persist, history.effective_storage_dir()) {
        (true, Some(dir)) => {
            let store = JsonFileHistoryStore::new(&dir, history.effective_key());
            tracing::debug!(path = %store.path().display(), "using file history store");
            Box::new(store)
        }
        (true, None) => {
            tracing::warn!("no home directory found, history will not be persisted");
            Box::new(MemoryHistoryStore::new())
        }
        (false, _) => Box::new(MemoryHistoryStore::new()),
    };

    let random: Box<dyn RandomSource> = match config.simulation.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    Orchestrator::new(store, random, history.effective_capacity())
}

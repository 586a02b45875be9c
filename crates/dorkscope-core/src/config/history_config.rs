//! History persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_KEY};

/// Configuration for the generation history log.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// Directory holding the history file. Default: `~/.dorkscope/`.
    pub storage_dir: Option<String>,
    /// Storage key; the file is `<storage_dir>/<key>.json`. Default: `dorkHistory`.
    pub key: Option<String>,
    /// Maximum entries kept, newest first. Default: 10.
    pub capacity: Option<usize>,
    /// Persist history to disk. Default: true.
    pub persist: Option<bool>,
}

impl HistoryConfig {
    /// Returns the effective capacity, defaulting to 10.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY)
    }

    /// Returns the effective storage key, defaulting to `dorkHistory`.
    pub fn effective_key(&self) -> &str {
        self.key.as_deref().unwrap_or(DEFAULT_HISTORY_KEY)
    }

    /// Returns whether history is written to disk, defaulting to true.
    pub fn effective_persist(&self) -> bool {
        self.persist.unwrap_or(true)
    }

    /// Returns the configured storage directory, or the user directory.
    pub fn effective_storage_dir(&self) -> Option<PathBuf> {
        match self.storage_dir {
            Some(ref dir) => Some(PathBuf::from(dir)),
            None => super::dorkscope_config::user_dir(),
        }
    }
}

//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Default filter when neither `DORKSCOPE_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, e.g. `dorkscope_synth=debug`.
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Returns the effective filter directive.
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

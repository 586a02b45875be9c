//! Simulated result-volume configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the simulated result estimator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the fallback volume estimate. Unset means a fresh thread RNG.
    pub seed: Option<u64>,
}

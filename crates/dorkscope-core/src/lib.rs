//! # dorkscope-core
//!
//! Foundation crate for the dorkscope query engine.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DorkscopeConfig;
pub use errors::{ConfigError, HistoryError, SessionError};
pub use traits::{HistoryStore, RandomSource};
pub use types::{
    DorkString, FactorKind, HistoryEntry, ImpactStats, Operator, Reach, Recommendation,
    ResultCount, RiskAssessment, RiskFactor, RiskFactors, RiskTier, SampleHit,
    SimulatedResultSet,
};

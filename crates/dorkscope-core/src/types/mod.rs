//! Shared data model: dork strings, risk factors, simulated results,
//! recommendations, and history entries.

pub mod dork;
pub mod history;
pub mod recommendation;
pub mod results;
pub mod risk;

pub use dork::{DorkString, Operator};
pub use history::HistoryEntry;
pub use recommendation::Recommendation;
pub use results::{group_thousands, ImpactStats, Reach, ResultCount, SampleHit, SimulatedResultSet};
pub use risk::{FactorKind, OverallRisk, RiskAssessment, RiskFactor, RiskFactors, RiskTier};

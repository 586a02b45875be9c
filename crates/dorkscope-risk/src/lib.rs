//! # dorkscope-risk
//!
//! Scores a dork on five weighted factors, estimates how many results it
//! would return, and ranks mitigation advice. Every function here is a pure
//! function of the dork text, apart from the injected random source used
//! for the fallback volume estimate.

pub mod analysis;
pub mod conditions;
pub mod descriptions;
pub mod factors;
pub mod impact;
pub mod random;
pub mod recommendations;
pub mod scoring;
pub mod simulation;

pub use analysis::{analyze, Analysis};
pub use impact::impact;
pub use random::{FixedRandom, SeededRandom, ThreadRandom};
pub use recommendations::recommend;
pub use scoring::assess;
pub use simulation::simulate;

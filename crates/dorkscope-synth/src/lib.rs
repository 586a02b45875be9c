//! # dorkscope-synth
//!
//! Turns free-text intent ("find exposed database backups") into a search
//! operator dork, a plain-language explanation, and refinement suggestions.
//!
//! Synthesis is a pure function of its input: an ordered table of category
//! rules is matched against the lower-cased text, and a keyword fallback
//! guarantees the dork is never empty.

pub mod explanation;
pub mod keywords;
pub mod refinements;
pub mod rules;
pub mod synthesizer;

pub use explanation::explain;
pub use refinements::{refine, Refinement};
pub use rules::{Category, PatternHealth};
pub use synthesizer::{synthesize, Synthesis};

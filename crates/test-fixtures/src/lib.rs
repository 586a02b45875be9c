//! Test fixture loader for dorkscope golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the fixtures: this crate's own directory.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One intent and the synthesis it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisCase {
    pub name: String,
    pub intent: String,
    pub dork: String,
    pub categories: Vec<String>,
    pub explanation: String,
}

/// Expected factor scores for a dork.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FactorScores {
    pub sensitivity: u8,
    pub exploitability: u8,
    pub prevalence: u8,
    pub scope: u8,
}

/// One dork and the risk analysis it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskCase {
    pub name: String,
    pub dork: String,
    pub factors: FactorScores,
    pub score: f64,
    pub tier: String,
    /// `None` when the dork falls through to the random volume estimate.
    pub count: Option<String>,
    pub recommendations: Vec<String>,
}

/// `golden/synthesis.json`.
pub fn synthesis_cases() -> Vec<SynthesisCase> {
    load_fixture("golden/synthesis.json")
}

/// `golden/risk.json`.
pub fn risk_cases() -> Vec<RiskCase> {
    load_fixture("golden/risk.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_files_load() {
        assert!(fixture_path("golden/synthesis.json").exists());
        assert!(!synthesis_cases().is_empty());
        assert!(!risk_cases().is_empty());
        assert!(load_fixture_value("golden/risk.json").is_array());
    }
}

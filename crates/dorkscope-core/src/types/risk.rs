//! Risk factors, the overall score, and severity tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five dimensions a dork is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    Sensitivity,
    Exploitability,
    Prevalence,
    Scope,
    Detectability,
}

impl FactorKind {
    /// Display order, also the order of the weighted sum.
    pub const ALL: [FactorKind; 5] = [
        Self::Sensitivity,
        Self::Exploitability,
        Self::Prevalence,
        Self::Scope,
        Self::Detectability,
    ];

    /// Contribution of this factor to the overall score. Weights sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Sensitivity => 0.35,
            Self::Exploitability => 0.30,
            Self::Prevalence => 0.15,
            Self::Scope => 0.15,
            Self::Detectability => 0.05,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sensitivity => "sensitivity",
            Self::Exploitability => "exploitability",
            Self::Prevalence => "prevalence",
            Self::Scope => "scope",
            Self::Detectability => "detectability",
        }
    }

    /// Heading used by reporters.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Sensitivity => "Data Sensitivity",
            Self::Exploitability => "Exploitability",
            Self::Prevalence => "Prevalence",
            Self::Scope => "Impact Scope",
            Self::Detectability => "Detectability",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scored factor: an integer in 1..=4 and its fixed description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub score: u8,
    pub description: String,
}

impl RiskFactor {
    pub fn new(score: u8, description: impl Into<String>) -> Self {
        Self {
            score,
            description: description.into(),
        }
    }
}

/// All five factors of an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub sensitivity: RiskFactor,
    pub exploitability: RiskFactor,
    pub prevalence: RiskFactor,
    pub scope: RiskFactor,
    pub detectability: RiskFactor,
}

impl RiskFactors {
    pub fn get(&self, kind: FactorKind) -> &RiskFactor {
        match kind {
            FactorKind::Sensitivity => &self.sensitivity,
            FactorKind::Exploitability => &self.exploitability,
            FactorKind::Prevalence => &self.prevalence,
            FactorKind::Scope => &self.scope,
            FactorKind::Detectability => &self.detectability,
        }
    }

    /// Factors paired with their kind, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FactorKind, &RiskFactor)> + '_ {
        FactorKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Weighted sum of the factor scores, rounded to two decimals.
    pub fn weighted_score(&self) -> f64 {
        let raw: f64 = self
            .iter()
            .map(|(kind, factor)| kind.weight() * f64::from(factor.score))
            .sum();
        round2(raw)
    }
}

/// Severity tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Classify a two-decimal score. Thresholds are inclusive lower bounds.
    pub fn from_score(score: f64) -> Self {
        if score >= 3.51 {
            Self::Critical
        } else if score >= 3.01 {
            Self::High
        } else if score >= 2.51 {
            Self::Medium
        } else if score >= 1.76 {
            Self::Low
        } else {
            Self::Minimal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Human label, e.g. `Critical Risk`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal Risk",
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
            Self::Critical => "Critical Risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall score and the tier it falls into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallRisk {
    pub score: f64,
    pub tier: RiskTier,
}

impl OverallRisk {
    pub fn from_score(score: f64) -> Self {
        let score = round2(score);
        Self {
            score,
            tier: RiskTier::from_score(score),
        }
    }
}

/// Five factors plus the overall result. Built fresh for every dork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub factors: RiskFactors,
    pub overall: OverallRisk,
}

impl RiskAssessment {
    pub fn new(factors: RiskFactors) -> Self {
        let overall = OverallRisk::from_score(factors.weighted_score());
        Self { factors, overall }
    }

    pub fn score(&self) -> f64 {
        self.overall.score
    }

    pub fn tier(&self) -> RiskTier {
        self.overall.tier
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

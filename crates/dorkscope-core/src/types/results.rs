//! Simulated search results and the impact statistics derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Estimated number of hits: `~1,240,000` or the literal `Unknown`.
///
/// Serializes as its display string and parses back from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ResultCount {
    Approximate(u64),
    Unknown,
}

impl ResultCount {
    /// The numeric estimate, 0 when unknown.
    pub fn numeric(&self) -> u64 {
        match self {
            Self::Approximate(n) => *n,
            Self::Unknown => 0,
        }
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approximate(n) => write!(f, "~{}", group_thousands(*n)),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

/// A result-count string that is neither `Unknown` nor `~` plus grouped digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid result count: {0:?}")]
pub struct ParseResultCountError(pub String);

impl FromStr for ResultCount {
    type Err = ParseResultCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Unknown" {
            return Ok(Self::Unknown);
        }
        let invalid = || ParseResultCountError(s.to_string());
        let digits = s.strip_prefix('~').ok_or_else(invalid)?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == ',') {
            return Err(invalid());
        }
        digits
            .replace(',', "")
            .parse::<u64>()
            .map(Self::Approximate)
            .map_err(|_| invalid())
    }
}

impl From<ResultCount> for String {
    fn from(count: ResultCount) -> Self {
        count.to_string()
    }
}

impl TryFrom<String> for ResultCount {
    type Error = ParseResultCountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One fabricated search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleHit {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

impl SampleHit {
    pub fn new(url: &str, title: &str, snippet: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            snippet: snippet.to_string(),
        }
    }
}

/// Estimated volume plus up to three sample hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedResultSet {
    pub count: ResultCount,
    pub samples: Vec<SampleHit>,
}

/// Reach label for an estimated result volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Reach {
    Limited,
    Moderate,
    Widespread,
    Global,
}

impl Reach {
    /// Thresholds are strict: exactly 500,000 is still `Widespread`.
    pub fn from_count(count: u64) -> Self {
        if count > 500_000 {
            Self::Global
        } else if count > 100_000 {
            Self::Widespread
        } else if count > 10_000 {
            Self::Moderate
        } else {
            Self::Limited
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limited => "Limited",
            Self::Moderate => "Moderate",
            Self::Widespread => "Widespread",
            Self::Global => "Global",
        }
    }
}

impl fmt::Display for Reach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headline numbers shown next to the simulated results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactStats {
    pub total_results: u64,
    pub affected_sites: u64,
    pub reach: Reach,
}

impl ImpactStats {
    /// Roughly 60% of hits are assumed to be distinct vulnerable sites.
    pub fn from_count(count: ResultCount) -> Self {
        let total_results = count.numeric();
        Self {
            total_results,
            affected_sites: total_results.saturating_mul(6) / 10,
            reach: Reach::from_count(total_results),
        }
    }

    /// `~27,000` style label for the affected-site estimate.
    pub fn affected_label(&self) -> String {
        format!("~{}", group_thousands(self.affected_sites))
    }
}

/// Format an integer with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_240_000), "1,240,000");
    }

    #[test]
    fn count_display_and_parse() {
        assert_eq!(ResultCount::Approximate(45_000).to_string(), "~45,000");
        assert_eq!("~1,240,000".parse::<ResultCount>(), Ok(ResultCount::Approximate(1_240_000)));
        assert_eq!("Unknown".parse::<ResultCount>(), Ok(ResultCount::Unknown));
        assert!("45,000".parse::<ResultCount>().is_err());
        assert!("~".parse::<ResultCount>().is_err());
        assert!("~4x".parse::<ResultCount>().is_err());
    }

    #[test]
    fn count_serializes_as_string() {
        let json = serde_json::to_string(&ResultCount::Approximate(7_200)).unwrap();
        assert_eq!(json, "\"~7,200\"");
        let back: ResultCount = serde_json::from_str("\"Unknown\"").unwrap();
        assert_eq!(back, ResultCount::Unknown);
    }

    #[test]
    fn impact_from_known_counts() {
        let stats = ImpactStats::from_count(ResultCount::Approximate(45_000));
        assert_eq!(stats.affected_sites, 27_000);
        assert_eq!(stats.affected_label(), "~27,000");
        assert_eq!(stats.reach, Reach::Moderate);

        assert_eq!(
            ImpactStats::from_count(ResultCount::Approximate(1_240_000)).reach,
            Reach::Global
        );
        let unknown = ImpactStats::from_count(ResultCount::Unknown);
        assert_eq!(unknown.total_results, 0);
        assert_eq!(unknown.reach, Reach::Limited);
    }

    #[test]
    fn impact_saturates_on_huge_counts() {
        let count: ResultCount = format!("~{}", u64::MAX).parse().unwrap();
        let stats = ImpactStats::from_count(count);
        assert_eq!(stats.total_results, u64::MAX);
        assert_eq!(stats.affected_sites, u64::MAX / 10);
        assert_eq!(stats.reach, Reach::Global);
    }

    #[test]
    fn reach_thresholds_are_strict() {
        assert_eq!(Reach::from_count(500_000), Reach::Widespread);
        assert_eq!(Reach::from_count(500_001), Reach::Global);
        assert_eq!(Reach::from_count(100_000), Reach::Moderate);
        assert_eq!(Reach::from_count(10_000), Reach::Limited);
    }
}

//! Fixed factor descriptions keyed by score.

use dorkscope_core::FactorKind;

pub const DETECTABILITY: &str = "Passive reconnaissance - no direct target interaction";

const SENSITIVITY: [&str; 4] = [
    "Low - Public or non-sensitive information",
    "Medium - Internal infrastructure details",
    "High - Sensitive configuration or user data",
    "Critical - Credentials, keys, or authentication data",
];

const EXPLOITABILITY: [&str; 4] = [
    "Low - Information requires significant additional analysis",
    "Medium - Moderate technical skill needed for exploitation",
    "High - Direct exploitation pathway available",
    "Critical - Immediate system access or data breach possible",
];

const PREVALENCE: [&str; 4] = [
    "Rare - Less than 100 results typically found",
    "Uncommon - 100 to 10,000 results expected",
    "Common - 10,000 to 100,000 results likely",
    "Widespread - Over 100,000 results globally",
];

const SCOPE: [&str; 4] = [
    "Individual - Single user or account affected",
    "Limited - Multiple users or single system compromise",
    "Organizational - Multiple systems or departments at risk",
    "Enterprise - Complete infrastructure compromise potential",
];

/// Description for `score` on `kind`. Scores outside 1..=4 get the tier-1 text.
pub fn describe(kind: FactorKind, score: u8) -> &'static str {
    let table = match kind {
        FactorKind::Sensitivity => &SENSITIVITY,
        FactorKind::Exploitability => &EXPLOITABILITY,
        FactorKind::Prevalence => &PREVALENCE,
        FactorKind::Scope => &SCOPE,
        FactorKind::Detectability => return DETECTABILITY,
    };
    match score {
        1..=4 => table[usize::from(score) - 1],
        _ => table[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_falls_back_to_tier_one() {
        assert_eq!(
            describe(FactorKind::Scope, 0),
            "Individual - Single user or account affected"
        );
        assert_eq!(describe(FactorKind::Scope, 9), describe(FactorKind::Scope, 1));
    }

    #[test]
    fn detectability_ignores_score() {
        assert_eq!(describe(FactorKind::Detectability, 1), DETECTABILITY);
        assert_eq!(describe(FactorKind::Detectability, 4), DETECTABILITY);
    }

    #[test]
    fn top_tiers() {
        assert!(describe(FactorKind::Sensitivity, 4).starts_with("Critical"));
        assert!(describe(FactorKind::Prevalence, 4).starts_with("Widespread"));
    }
}

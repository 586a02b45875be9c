//! Dork to risk assessment.

use dorkscope_core::constants::DETECTABILITY_SCORE;
use dorkscope_core::{FactorKind, RiskAssessment, RiskFactor, RiskFactors};

use crate::descriptions::describe;
use crate::factors::{FactorTable, EXPLOITABILITY, PREVALENCE, SCOPE, SENSITIVITY};

fn factor(table: &FactorTable, lowered: &str) -> RiskFactor {
    let score = table.score(lowered);
    RiskFactor::new(score, describe(table.kind, score))
}

/// Score a dork on the five weighted factors.
///
/// Matching is case-insensitive substring containment. Empty input scores
/// 1 on every content factor.
pub fn assess(dork: &str) -> RiskAssessment {
    let lowered = dork.to_lowercase();

    let factors = RiskFactors {
        sensitivity: factor(&SENSITIVITY, &lowered),
        exploitability: factor(&EXPLOITABILITY, &lowered),
        prevalence: factor(&PREVALENCE, &lowered),
        scope: factor(&SCOPE, &lowered),
        detectability: RiskFactor::new(
            DETECTABILITY_SCORE,
            describe(FactorKind::Detectability, DETECTABILITY_SCORE),
        ),
    };
    let assessment = RiskAssessment::new(factors);

    tracing::debug!(
        dork,
        score = assessment.score(),
        tier = %assessment.tier(),
        "assessed dork"
    );
    assessment
}

//! The full analysis bundle for one dork.

use serde::{Deserialize, Serialize};

use dorkscope_core::{ImpactStats, RandomSource, Recommendation, RiskAssessment, SimulatedResultSet};

use crate::impact::impact;
use crate::recommendations::recommend;
use crate::scoring::assess;
use crate::simulation::simulate;

/// Assessment, simulated results, advice, and impact for a dork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub assessment: RiskAssessment,
    pub results: SimulatedResultSet,
    pub recommendations: Vec<Recommendation>,
    pub impact: ImpactStats,
}

/// Run every risk stage over `dork`.
pub fn analyze<R: RandomSource>(dork: &str, random: R) -> Analysis {
    let assessment = assess(dork);
    let results = simulate(dork, random);
    let recommendations = recommend(&assessment, dork);
    let impact = impact(&results);
    Analysis {
        assessment,
        results,
        recommendations,
        impact,
    }
}

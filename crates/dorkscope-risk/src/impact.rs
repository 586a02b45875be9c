//! Impact statistics for a simulated result set.

use dorkscope_core::{ImpactStats, SimulatedResultSet};

/// Total hits, estimated affected sites, and reach for `results`.
pub fn impact(results: &SimulatedResultSet) -> ImpactStats {
    ImpactStats::from_count(results.count)
}

//! End-to-end scenarios from intent text through risk analysis.

use std::sync::LazyLock;

use dorkscope_core::{Reach, ResultCount, RiskTier};
use dorkscope_risk::{analyze, assess, impact, simulate, FixedRandom, SeededRandom};
use dorkscope_synth::synthesize;
use regex::Regex;

static FALLBACK_COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^~\d{3},000$").unwrap());

#[test]
fn database_backup_with_passwords() {
    let s = synthesize("find exposed database backup with passwords");
    for token in ["filetype:sql", "intext:\"INSERT INTO\"", "intext:\"password\""] {
        assert!(s.dork.contains(token), "missing {token} in {}", s.dork);
    }
    let a = assess(s.dork.as_str());
    assert_eq!(a.factors.sensitivity.score, 4);
    assert_eq!(a.factors.exploitability.score, 4);
}

#[test]
fn admin_login_page() {
    let s = synthesize("admin login page");
    assert!(s.dork.contains("inurl:admin"));
    assert!(s.dork.contains("intitle:login"));
    assert_eq!(assess(s.dork.as_str()).factors.exploitability.score, 3);
}

#[test]
fn git_index_scores_high_by_weights() {
    let a = assess("inurl:\"/.git\" intitle:\"Index of\"");
    assert_eq!(a.factors.sensitivity.score, 3);
    assert_eq!(a.factors.exploitability.score, 4);
    assert_eq!(a.factors.scope.score, 4);
    assert_eq!(a.score(), 3.2);
    assert_eq!(a.tier(), RiskTier::High);
}

#[test]
fn unrecognized_dork_uses_fallback_volume() {
    let set = simulate("\"quarterly\" \"sales\"", SeededRandom::new(7));
    assert!(FALLBACK_COUNT.is_match(&set.count.to_string()), "{}", set.count);
    assert_eq!(set.samples.len(), 3);
    for hit in &set.samples {
        assert!(!hit.url.is_empty());
        assert!(!hit.title.is_empty());
        assert!(!hit.snippet.is_empty());
    }
}

#[test]
fn assess_and_known_simulation_are_repeatable() {
    let dork = "intitle:\"Index of\" \"Parent Directory\"";
    assert_eq!(assess(dork), assess(dork));
    assert_eq!(
        simulate(dork, SeededRandom::new(1)),
        simulate(dork, SeededRandom::new(2))
    );
}

#[test]
fn impact_statistics() {
    let stats = impact(&simulate("filetype:sql password", FixedRandom(0)));
    assert_eq!(stats.total_results, 45_000);
    assert_eq!(stats.affected_label(), "~27,000");
    assert_eq!(stats.reach, Reach::Moderate);

    let global = impact(&simulate("index of parent directory", FixedRandom(0)));
    assert_eq!(global.reach, Reach::Global);
}

#[test]
fn analysis_bundles_every_stage() {
    let mut rng = FixedRandom(450);
    let analysis = analyze("\"recipes\"", &mut rng);
    assert_eq!(analysis.results.count, ResultCount::Approximate(450_000));
    assert_eq!(analysis.impact.affected_sites, 270_000);
    assert_eq!(analysis.impact.reach, Reach::Widespread);
    assert_eq!(analysis.assessment.tier(), RiskTier::Minimal);
    assert_eq!(analysis.recommendations.len(), 2);

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["results"]["count"], "~450,000");
    assert_eq!(json["assessment"]["overall"]["tier"], "minimal");
}

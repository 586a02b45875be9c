use dorkscope_core::RiskTier;
use dorkscope_risk::{assess, recommend, simulate, FixedRandom, SeededRandom};
use proptest::prelude::*;

const TERMS: &[&str] = &[
    "password", "filetype:sql", "ext:sql", "insert into", ".env", "db_password", ".git",
    "index of", "parent directory", "admin", "login", "phpinfo", "backup", ".bak", "config",
    "version", "filetype:pdf", "confidential", "filetype:log", "inurl:", "database", "users",
    "secret", "api_key", "directory", "recipes",
];

fn dork_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TERMS), 0..8).prop_map(|t| t.join(" "))
}

// ── Factor scores and the overall score stay in range ──────────────────────

proptest! {
    #[test]
    fn scores_are_bounded(dork in dork_strategy()) {
        let a = assess(&dork);
        for (_, f) in a.factors.iter() {
            prop_assert!((1..=4).contains(&f.score));
        }
        prop_assert!(a.score() >= 1.0 && a.score() <= 4.0);
        prop_assert_eq!(a.tier(), RiskTier::from_score(a.score()));
    }

    #[test]
    fn arbitrary_text_is_bounded(dork in "\\PC{0,120}") {
        let a = assess(&dork);
        prop_assert!(a.score() >= 1.0 && a.score() <= 4.0);
    }

    #[test]
    fn assess_is_idempotent(dork in dork_strategy()) {
        prop_assert_eq!(assess(&dork), assess(&dork));
    }

    #[test]
    fn assess_ignores_case(dork in dork_strategy()) {
        prop_assert_eq!(assess(&dork), assess(&dork.to_uppercase()));
    }
}

// ── Recommendations and simulated volume ───────────────────────────────────

proptest! {
    #[test]
    fn recommendations_are_capped(dork in dork_strategy()) {
        let recs = recommend(&assess(&dork), &dork);
        prop_assert!(recs.len() <= 6);
        let general = recs.iter().filter(|r| r.title == "Regular Security Audits").count();
        let robots = recs
            .iter()
            .filter(|r| r.title == "Robots.txt and Meta Tags")
            .count();
        let specific = recs.len() - general - robots;
        if specific < 6 {
            prop_assert_eq!(general, 1);
        }
    }

    #[test]
    fn fallback_volume_stays_in_range(seed in any::<u64>()) {
        let set = simulate("\"recipes\"", SeededRandom::new(seed));
        let n = set.count.numeric();
        prop_assert!((100_000..600_000).contains(&n));
        prop_assert_eq!(n % 1_000, 0);
        prop_assert_eq!(set.samples.len(), 3);
    }

    #[test]
    fn samples_never_exceed_three(dork in dork_strategy(), pick in 0u64..1_000) {
        let set = simulate(&dork, FixedRandom(pick));
        prop_assert!(set.samples.len() <= 3);
        prop_assert!(!set.samples.is_empty());
    }
}

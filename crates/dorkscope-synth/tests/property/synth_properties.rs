use dorkscope_synth::synthesize;
use proptest::prelude::*;

// ── Synthesis always produces a dork ───────────────────────────────────────

proptest! {
    #[test]
    fn dork_is_never_empty(intent in "\\PC{1,80}") {
        let s = synthesize(&intent);
        prop_assert!(!s.dork.is_empty(), "empty dork for {:?}", intent);
        prop_assert!(!s.categories.is_empty());
    }

    #[test]
    fn synthesis_is_deterministic(intent in "[a-zA-Z .]{0,60}") {
        prop_assert_eq!(synthesize(&intent), synthesize(&intent));
    }

    #[test]
    fn matching_ignores_case(intent in "[a-z ]{1,40}") {
        let lower = synthesize(&intent);
        let upper = synthesize(&intent.to_uppercase());
        prop_assert_eq!(lower.categories, upper.categories);
    }
}

// ── Refinements and explanation shape ──────────────────────────────────────

proptest! {
    #[test]
    fn refinements_extend_the_dork(intent in "[a-z ]{1,60}") {
        let s = synthesize(&intent);
        prop_assert!(s.refinements.len() <= 4);
        for r in &s.refinements {
            let prefix = format!("{} ", s.dork);
            prop_assert!(r.dork.as_str().starts_with(&prefix));
            prop_assert_eq!(
                r.dork.as_str().split(' ').count(),
                s.dork.as_str().split(' ').count() + 1
            );
        }
    }

    #[test]
    fn explanation_ends_with_period(intent in "[a-z ]{1,60}") {
        let s = synthesize(&intent);
        prop_assert!(s.explanation.ends_with('.'));
        prop_assert!(!s.explanation.ends_with(".."));
    }
}

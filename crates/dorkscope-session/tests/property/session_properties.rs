use dorkscope_risk::FixedRandom;
use dorkscope_session::{MemoryHistoryStore, Orchestrator};
use proptest::prelude::*;

proptest! {
    #[test]
    fn history_never_exceeds_capacity(
        capacity in 1usize..12,
        intents in prop::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,3}", 0..25)
    ) {
        let mut orch =
            Orchestrator::new(MemoryHistoryStore::new(), FixedRandom(100), capacity).unwrap();
        for intent in &intents {
            orch.generate(intent).unwrap();
        }
        prop_assert_eq!(orch.history().len(), intents.len().min(capacity));
        if let Some(last) = intents.last() {
            prop_assert_eq!(&orch.history()[0].input, last);
        }
    }

    #[test]
    fn whitespace_is_always_rejected(blank in "[ \t\n]{0,8}") {
        let mut orch = Orchestrator::new(MemoryHistoryStore::new(), FixedRandom(100), 10).unwrap();
        prop_assert!(orch.generate(&blank).is_err());
        prop_assert!(orch.history().is_empty());
    }
}

//! Golden synthesis cases: intent in, exact dork and explanation out.

use dorkscope_synth::synthesize;

#[test]
fn golden_synthesis_cases() {
    let cases = test_fixtures::synthesis_cases();
    assert!(!cases.is_empty());

    for case in &cases {
        let synthesis = synthesize(&case.intent);
        assert_eq!(synthesis.dork.as_str(), case.dork, "dork for {}", case.name);
        assert_eq!(
            synthesis.explanation, case.explanation,
            "explanation for {}",
            case.name
        );

        let categories: Vec<&str> = synthesis.categories.iter().map(|c| c.name()).collect();
        assert_eq!(categories, case.categories, "categories for {}", case.name);
    }
}

#[test]
fn golden_synthesis_serializes_categories_by_name() {
    let case = &test_fixtures::synthesis_cases()[0];
    let synthesis = synthesize(&case.intent);
    let value = serde_json::to_value(&synthesis).unwrap();
    assert_eq!(value["dork"], case.dork);
    assert_eq!(value["categories"], serde_json::json!(case.categories));
}

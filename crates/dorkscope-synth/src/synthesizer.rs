//! Intent text to dork synthesis.

use serde::{Deserialize, Serialize};

use dorkscope_core::DorkString;

use crate::explanation::explain;
use crate::keywords::fallback_tokens;
use crate::refinements::{refine, Refinement};
use crate::rules::{Category, RULES};

/// Output of one synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synthesis {
    pub dork: DorkString,
    pub explanation: String,
    pub refinements: Vec<Refinement>,
    /// Categories that contributed tokens, in table order.
    pub categories: Vec<Category>,
}

/// Translate free-text intent into a dork with explanation and refinements.
///
/// Never fails and never returns an empty dork: when no rule fires, the
/// keyword fallback produces at least one token.
pub fn synthesize(intent: &str) -> Synthesis {
    let (dork, categories) = build_dork(intent);
    let explanation = explain(&dork);
    let refinements = refine(&dork);

    tracing::debug!(
        dork = %dork,
        categories = ?categories,
        refinements = refinements.len(),
        "synthesized dork"
    );

    Synthesis {
        dork,
        explanation,
        refinements,
        categories,
    }
}

/// Run the rule table, then the fallback if nothing fired.
pub fn build_dork(intent: &str) -> (DorkString, Vec<Category>) {
    let lowered = intent.to_lowercase();
    let mut dork = DorkString::new();
    let mut categories = Vec::new();

    for rule in RULES {
        if rule.only_when_empty && !dork.is_empty() {
            continue;
        }
        if !rule.triggered(&lowered) {
            continue;
        }
        let tokens = rule.tokens_for(&lowered);
        if tokens.is_empty() {
            continue;
        }
        tracing::trace!(category = %rule.category, ?tokens, "rule fired");
        for token in tokens {
            dork.push(token);
        }
        categories.push(rule.category);
    }

    if dork.is_empty() {
        for token in fallback_tokens(intent, &lowered) {
            dork.push(&token);
        }
        categories.push(Category::Keywords);
    }

    (dork, categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_backup_with_passwords() {
        let s = synthesize("find exposed database backup with passwords");
        assert_eq!(
            s.dork.as_str(),
            "filetype:sql intext:\"INSERT INTO\" intext:\"password\""
        );
        assert_eq!(s.categories, vec![Category::Database]);
    }

    #[test]
    fn admin_login_page() {
        let s = synthesize("admin login page");
        assert_eq!(s.dork.as_str(), "inurl:admin intitle:login");
        assert_eq!(s.categories, vec![Category::AdminPanel]);
    }

    #[test]
    fn credentials_gate_blocks_after_earlier_rule() {
        // "login" would trigger credentials, but the admin rule already fired.
        let s = synthesize("admin login");
        assert!(!s.categories.contains(&Category::Credentials));

        let s = synthesize("leaked passwords");
        assert_eq!(
            s.dork.as_str(),
            "filetype:log intext:\"password\" intext:\"username\""
        );
    }

    #[test]
    fn rules_compose_in_table_order() {
        let s = synthesize("git repository on government servers");
        assert_eq!(
            s.dork.as_str(),
            "inurl:\"/.git\" intitle:\"Index of\" site:.gov"
        );
        assert_eq!(
            s.categories,
            vec![Category::GitRepository, Category::SiteScope]
        );
    }

    #[test]
    fn duplicate_tokens_are_kept() {
        let s = synthesize("git directory listing");
        assert_eq!(s.dork.as_str().matches("intitle:\"Index of\"").count(), 2);
    }

    #[test]
    fn backup_alone_uses_gated_rule() {
        let s = synthesize("backup");
        assert_eq!(s.dork.as_str(), "ext:bak inurl:backup");
    }

    #[test]
    fn keyword_fallback() {
        let s = synthesize("find quarterly sales figures");
        assert_eq!(s.dork.as_str(), "\"quarterly\" \"sales\" \"figures\"");
        assert_eq!(s.categories, vec![Category::Keywords]);
    }

    #[test]
    fn empty_input_still_yields_a_dork() {
        let s = synthesize("");
        assert_eq!(s.dork.as_str(), "intitle:\"\"");
    }
}

//! Substring conditions shared by the factor, sample, and advice tables.

/// A containment test against lower-cased dork text.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Contains any of the terms.
    Any(&'static [&'static str]),
    /// Contains any term of the first list and any term of the second.
    Both(&'static [&'static str], &'static [&'static str]),
}

impl Condition {
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::Any(terms) => contains_any(lowered, terms),
            Self::Both(left, right) => contains_any(lowered, left) && contains_any(lowered, right),
        }
    }
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_requires_each_side() {
        let c = Condition::Both(&["admin"], &["login"]);
        assert!(c.matches("inurl:admin intitle:login"));
        assert!(!c.matches("inurl:admin"));
        assert!(!c.matches("intitle:login"));
    }

    #[test]
    fn any_matches_substrings() {
        assert!(Condition::Any(&["index of", "directory"]).matches("intitle:\"index of\""));
        assert!(!Condition::Any(&[]).matches("anything"));
    }
}

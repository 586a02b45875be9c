//! Keyword fallback used when no category rule fires.

use dorkscope_core::constants::{FALLBACK_TITLE_CHARS, MAX_FALLBACK_KEYWORDS};
use dorkscope_core::Operator;

/// Filler words that never become keywords.
const STOP_WORDS: &[&str] = &[
    "find", "search", "locate", "discover", "show", "get", "looking", "for", "the", "a", "an",
    "with", "and", "or", "in", "on", "at", "to", "from",
];

/// Up to three words of the lower-cased text longer than three characters,
/// skipping stop words, in input order.
pub fn extract_keywords(lowered: &str) -> Vec<&str> {
    lowered
        .split_whitespace()
        .filter(|w| w.chars().count() > 3 && !STOP_WORDS.contains(w))
        .take(MAX_FALLBACK_KEYWORDS)
        .collect()
}

/// Fallback tokens: each keyword as a quoted phrase, or a title search on
/// the start of the raw input when no keyword survives.
pub fn fallback_tokens(raw: &str, lowered: &str) -> Vec<String> {
    let keywords = extract_keywords(lowered);
    if keywords.is_empty() {
        let head: String = raw.chars().take(FALLBACK_TITLE_CHARS).collect();
        return vec![Operator::Intitle.token(&format!("\"{head}\""))];
    }
    keywords.into_iter().map(|kw| format!("\"{kw}\"")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_and_short_words_are_dropped() {
        assert_eq!(
            extract_keywords("looking for quarterly sales figures from europe"),
            vec!["quarterly", "sales", "figures"]
        );
    }

    #[test]
    fn at_most_three_keywords() {
        assert_eq!(extract_keywords("alpha bravo charlie delta echo").len(), 3);
    }

    #[test]
    fn title_fallback_keeps_raw_case_and_truncates() {
        assert_eq!(fallback_tokens("Hi", "hi"), vec!["intitle:\"Hi\""]);
        let long = "ABC DEF GHI JKL MNO PQR STU VWX YZ";
        let tokens = fallback_tokens(long, &long.to_lowercase());
        assert_eq!(tokens, vec!["intitle:\"ABC DEF GHI JKL MNO PQR STU VW\""]);
    }

    #[test]
    fn keywords_are_quoted() {
        assert_eq!(
            fallback_tokens("Recipes please", "recipes please"),
            vec!["\"recipes\"", "\"please\""]
        );
    }

    #[test]
    fn lengths_count_unicode_scalars() {
        // Two emoji are two characters, so the word is too short.
        assert_eq!(extract_keywords("💾💾 data"), vec!["data"]);
        assert_eq!(fallback_tokens("💾💾", "💾💾"), vec!["intitle:\"💾💾\""]);

        let wide = "éé ".repeat(14);
        let tokens = fallback_tokens(&wide, &wide);
        assert_eq!(tokens, vec![format!("intitle:\"{}\"", "éé ".repeat(10))]);
    }
}

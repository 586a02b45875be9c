//! Plain-language explanation of a finished dork.

use std::sync::LazyLock;

use regex::Regex;

use dorkscope_core::{DorkString, Operator};

static FILE_TYPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?:filetype|ext):([A-Za-z0-9_]+)"));
static SITE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"site:([A-Za-z0-9_.]+)"));

fn compile(source: &str) -> Option<Regex> {
    match Regex::new(source) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(pattern = source, error = %e, "explanation pattern failed to compile");
            None
        }
    }
}

const GENERIC: &str = "Performs a targeted search based on your criteria";

fn first_capture<'a>(re: &LazyLock<Option<Regex>>, text: &'a str) -> Option<&'a str> {
    LazyLock::force(re)
        .as_ref()?
        .captures(text)?
        .get(1)
        .map(|m| m.as_str())
}

/// Describe what the operators in `dork` do, one sentence per operator kind.
pub fn explain(dork: &DorkString) -> String {
    let text = dork.as_str();
    let mut parts: Vec<String> = Vec::new();

    if dork.has_operator(Operator::Filetype) || dork.has_operator(Operator::Ext) {
        if let Some(ext) = first_capture(&FILE_TYPE, text) {
            parts.push(format!(
                "Searches specifically for {} files",
                ext.to_ascii_uppercase()
            ));
        }
    }
    if dork.has_operator(Operator::Intitle) {
        parts.push("Targets page titles for precise matching".to_string());
    }
    if dork.has_operator(Operator::Inurl) {
        parts.push("Filters results by URL structure".to_string());
    }
    if dork.has_operator(Operator::Intext) {
        parts.push("Searches within page content".to_string());
    }
    if dork.has_operator(Operator::Site) {
        if let Some(site) = first_capture(&SITE, text) {
            parts.push(format!("Limited to {site} domains"));
        }
    }

    if parts.is_empty() {
        parts.push(GENERIC.to_string());
    }
    format!("{}.", parts.join(". "))
}

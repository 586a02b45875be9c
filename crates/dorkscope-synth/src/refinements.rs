//! Follow-up variations offered after a synthesis.

use serde::{Deserialize, Serialize};

use dorkscope_core::constants::MAX_REFINEMENTS;
use dorkscope_core::{DorkString, Operator};

/// A labelled variation of a dork with one extra token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refinement {
    pub label: String,
    pub dork: DorkString,
}

impl Refinement {
    fn new(label: &str, base: &DorkString, token: &str) -> Self {
        Self {
            label: label.to_string(),
            dork: base.with_token(token),
        }
    }
}

/// Suggest up to four refinements for operators the dork does not use yet.
pub fn refine(dork: &DorkString) -> Vec<Refinement> {
    let mut out = Vec::new();

    if !dork.has_operator(Operator::Site) {
        out.push(Refinement::new("Limit to .gov sites", dork, "site:.gov"));
        out.push(Refinement::new("Limit to .edu sites", dork, "site:.edu"));
    }
    if !dork.has_operator(Operator::Inurl) {
        out.push(Refinement::new("Add /admin/ path", dork, "inurl:admin"));
    }
    if !dork.contains("filetype:pdf") && !dork.contains("filetype:doc") {
        out.push(Refinement::new("Only PDF files", dork, "filetype:pdf"));
    }

    out.truncate(MAX_REFINEMENTS);
    out
}

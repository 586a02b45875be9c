//! Dork tokens and dork strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Search operators that appear as `operator:value` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Filetype,
    Ext,
    Inurl,
    Intitle,
    Intext,
    Site,
}

impl Operator {
    /// Operator name without the colon.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Filetype => "filetype",
            Self::Ext => "ext",
            Self::Inurl => "inurl",
            Self::Intitle => "intitle",
            Self::Intext => "intext",
            Self::Site => "site",
        }
    }

    /// The marker substring as it appears in a dork, e.g. `filetype:`.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Filetype => "filetype:",
            Self::Ext => "ext:",
            Self::Inurl => "inurl:",
            Self::Intitle => "intitle:",
            Self::Intext => "intext:",
            Self::Site => "site:",
        }
    }

    /// Build an `operator:value` token.
    pub fn token(&self, value: &str) -> String {
        format!("{}{}", self.marker(), value)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, space-joined sequence of dork tokens.
///
/// Tokens keep the order they were pushed in and are never de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DorkString(String);

impl DorkString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join tokens left to right with single spaces.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dork = Self::new();
        for token in tokens {
            dork.push(token.as_ref());
        }
        dork
    }

    /// Append one token.
    pub fn push(&mut self, token: &str) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(token);
    }

    /// A copy of this dork with one more token appended.
    pub fn with_token(&self, token: &str) -> Self {
        let mut next = self.clone();
        next.push(token);
        next
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Whether the dork carries the given operator marker (case-sensitive).
    pub fn has_operator(&self, operator: Operator) -> bool {
        self.0.contains(operator.marker())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DorkString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DorkString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for DorkString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DorkString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

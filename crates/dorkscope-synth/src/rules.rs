//! The ordered category rule table.
//!
//! Rules are evaluated top to bottom against the lower-cased intent. Every
//! rule whose trigger matches appends its tokens; nothing short-circuits
//! except the rules gated on an empty accumulator. Within a rule, branches
//! are first-match-wins, and each branch's extras are tested independently.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Rule categories in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Database,
    Config,
    AdminPanel,
    GitRepository,
    DirectoryListing,
    Credentials,
    ApiKeys,
    LogFiles,
    ConfidentialDocuments,
    SecurityCameras,
    ServerInfo,
    SiteScope,
    Backup,
    Spreadsheets,
    /// No rule fired; the dork was built from quoted keywords or the title.
    Keywords,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Config => "config",
            Self::AdminPanel => "admin_panel",
            Self::GitRepository => "git_repository",
            Self::DirectoryListing => "directory_listing",
            Self::Credentials => "credentials",
            Self::ApiKeys => "api_keys",
            Self::LogFiles => "log_files",
            Self::ConfidentialDocuments => "confidential_documents",
            Self::SecurityCameras => "security_cameras",
            Self::ServerInfo => "server_info",
            Self::SiteScope => "site_scope",
            Self::Backup => "backup",
            Self::Spreadsheets => "spreadsheets",
            Self::Keywords => "keywords",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tokens appended when `pattern` also matches.
pub struct Extra {
    pub pattern: &'static str,
    pub tokens: &'static [&'static str],
}

/// One alternative inside a rule. `when: None` is the unconditional branch.
pub struct Branch {
    pub when: Option<&'static str>,
    pub tokens: &'static [&'static str],
    pub extras: &'static [Extra],
}

/// A category rule: fires when every trigger pattern matches.
pub struct Rule {
    pub category: Category,
    pub triggers: &'static [&'static str],
    /// Only fires while no earlier rule has produced a token.
    pub only_when_empty: bool,
    pub branches: &'static [Branch],
}

const fn branch(tokens: &'static [&'static str]) -> Branch {
    Branch {
        when: None,
        tokens,
        extras: &[],
    }
}

pub static RULES: &[Rule] = &[
    Rule {
        category: Category::Database,
        triggers: &["database|mysql|postgresql|sql|db"],
        only_when_empty: false,
        branches: &[
            Branch {
                when: Some("backup"),
                tokens: &["filetype:sql", "intext:\"INSERT INTO\""],
                extras: &[Extra {
                    pattern: "password|credential",
                    tokens: &["intext:\"password\""],
                }],
            },
            Branch {
                when: Some("dump|export"),
                tokens: &["filetype:sql", "\"-- MySQL dump\""],
                extras: &[],
            },
            branch(&["filetype:sql", "intext:\"CREATE TABLE\""]),
        ],
    },
    Rule {
        category: Category::Config,
        triggers: &["config|configuration|env|environment"],
        only_when_empty: false,
        branches: &[
            Branch {
                when: Some(r"\.env|environment"),
                tokens: &["filetype:env"],
                extras: &[Extra {
                    pattern: "password|secret|key|api",
                    tokens: &["intext:\"DB_PASSWORD\"", "intext:\"API_KEY\""],
                }],
            },
            branch(&["ext:conf", "intext:\"password\""]),
        ],
    },
    Rule {
        category: Category::AdminPanel,
        triggers: &["admin|administrator|control panel|dashboard"],
        only_when_empty: false,
        branches: &[
            Branch {
                when: Some("login|sign in|authentication"),
                tokens: &["inurl:admin", "intitle:login"],
                extras: &[Extra {
                    pattern: "php",
                    tokens: &["filetype:php"],
                }],
            },
            branch(&["inurl:admin", "intitle:\"admin panel\""]),
        ],
    },
    Rule {
        category: Category::GitRepository,
        triggers: &["git|repository|repo|version control"],
        only_when_empty: false,
        branches: &[branch(&["inurl:\"/.git\"", "intitle:\"Index of\""])],
    },
    Rule {
        category: Category::DirectoryListing,
        triggers: &["directory|folder|index of|listing"],
        only_when_empty: false,
        branches: &[Branch {
            when: None,
            tokens: &["intitle:\"Index of\"", "\"Parent Directory\""],
            extras: &[Extra {
                pattern: "backup",
                tokens: &["inurl:backup"],
            }],
        }],
    },
    Rule {
        category: Category::Credentials,
        triggers: &["password|credential|login|auth"],
        only_when_empty: true,
        branches: &[branch(&[
            "filetype:log",
            "intext:\"password\"",
            "intext:\"username\"",
        ])],
    },
    Rule {
        category: Category::ApiKeys,
        triggers: &["api.*key|token|secret.*key"],
        only_when_empty: false,
        branches: &[branch(&["filetype:env", "\"API_KEY\"", "\"SECRET_KEY\""])],
    },
    Rule {
        category: Category::LogFiles,
        triggers: &["log.*file|error.*log|access.*log"],
        only_when_empty: false,
        branches: &[Branch {
            when: None,
            tokens: &["filetype:log"],
            extras: &[
                Extra {
                    pattern: "error",
                    tokens: &["intext:\"error\""],
                },
                Extra {
                    pattern: "password|credential",
                    tokens: &["intext:\"password\""],
                },
            ],
        }],
    },
    Rule {
        category: Category::ConfidentialDocuments,
        triggers: &["pdf|document|file", "confidential|private|sensitive"],
        only_when_empty: false,
        branches: &[branch(&["filetype:pdf", "intext:\"confidential\""])],
    },
    Rule {
        category: Category::SecurityCameras,
        triggers: &["camera|webcam|cctv|surveillance"],
        only_when_empty: false,
        branches: &[branch(&["inurl:\"view/index.shtml\"", "intitle:\"Live View\""])],
    },
    Rule {
        category: Category::ServerInfo,
        triggers: &["server.*info|phpinfo|apache.*status"],
        only_when_empty: false,
        branches: &[branch(&["intitle:\"phpinfo()\"", "\"PHP Version\""])],
    },
    Rule {
        category: Category::SiteScope,
        triggers: &[r"government|\.gov|education|university|\.edu"],
        only_when_empty: false,
        branches: &[
            Branch {
                when: Some(r"government|\.gov"),
                tokens: &["site:.gov"],
                extras: &[],
            },
            Branch {
                when: Some(r"education|university|\.edu"),
                tokens: &["site:.edu"],
                extras: &[],
            },
        ],
    },
    Rule {
        category: Category::Backup,
        triggers: &["backup"],
        only_when_empty: true,
        branches: &[branch(&["ext:bak", "inurl:backup"])],
    },
    Rule {
        category: Category::Spreadsheets,
        triggers: &["excel|spreadsheet|xls|email.*list"],
        only_when_empty: false,
        branches: &[Branch {
            when: None,
            tokens: &["filetype:xls"],
            extras: &[Extra {
                pattern: "email",
                tokens: &["inurl:\"email\""],
            }],
        }],
    },
];

/// Every pattern source in the table, compiled once. A source that fails to
/// compile maps to `None` and never matches.
static COMPILED: LazyLock<HashMap<&'static str, Option<Regex>>> = LazyLock::new(|| {
    let mut compiled = HashMap::new();
    for source in all_sources() {
        compiled.entry(source).or_insert_with(|| match Regex::new(source) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(
                    pattern = source,
                    error = %e,
                    "rule pattern failed to compile, skipping"
                );
                None
            }
        });
    }
    compiled
});

fn all_sources() -> impl Iterator<Item = &'static str> {
    RULES.iter().flat_map(|rule| {
        rule.triggers.iter().copied().chain(rule.branches.iter().flat_map(|b| {
            b.when
                .into_iter()
                .chain(b.extras.iter().map(|extra| extra.pattern))
        }))
    })
}

/// Containment test of a table pattern against lower-cased text.
pub(crate) fn matches(source: &'static str, text: &str) -> bool {
    COMPILED
        .get(source)
        .and_then(Option::as_ref)
        .is_some_and(|re| re.is_match(text))
}

impl Rule {
    /// Whether every trigger matches.
    pub(crate) fn triggered(&self, text: &str) -> bool {
        self.triggers.iter().all(|&t| matches(t, text))
    }

    /// Tokens this rule contributes for `text`, assuming it is triggered.
    pub(crate) fn tokens_for(&self, text: &str) -> Vec<&'static str> {
        let Some(chosen) = self
            .branches
            .iter()
            .find(|b| b.when.map_or(true, |w| matches(w, text)))
        else {
            return Vec::new();
        };
        let mut tokens = chosen.tokens.to_vec();
        for extra in chosen.extras {
            if matches(extra.pattern, text) {
                tokens.extend_from_slice(extra.tokens);
            }
        }
        tokens
    }
}

/// Compilation status of the rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternHealth {
    pub total: usize,
    pub failed: Vec<&'static str>,
}

impl PatternHealth {
    /// Inspect the compiled table.
    pub fn check() -> Self {
        let mut failed: Vec<&'static str> = COMPILED
            .iter()
            .filter(|(_, re)| re.is_none())
            .map(|(source, _)| *source)
            .collect();
        failed.sort_unstable();
        Self {
            total: COMPILED.len(),
            failed,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.failed.is_empty()
    }
}

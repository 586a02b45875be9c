//! Ordered tier cascades for the four content-dependent factors.
//!
//! Each factor walks its tiers from the top; the first tier with a matching
//! condition sets the score. No match scores 1.

use dorkscope_core::FactorKind;

use crate::conditions::Condition::{self, Any, Both};

/// A score and the conditions that earn it.
pub struct Tier {
    pub score: u8,
    pub conditions: &'static [Condition],
}

/// The cascade for one factor.
pub struct FactorTable {
    pub kind: FactorKind,
    pub tiers: &'static [Tier],
}

impl FactorTable {
    /// Score lower-cased text against this cascade.
    pub fn score(&self, lowered: &str) -> u8 {
        self.tiers
            .iter()
            .find(|tier| tier.conditions.iter().any(|c| c.matches(lowered)))
            .map_or(1, |tier| tier.score)
    }
}

pub static SENSITIVITY: FactorTable = FactorTable {
    kind: FactorKind::Sensitivity,
    tiers: &[
        Tier {
            score: 4,
            conditions: &[Any(&[
                "password",
                "passwd",
                "pwd",
                "api_key",
                "apikey",
                "secret",
                "private key",
                ".pem",
                "db_password",
                "database_password",
            ])],
        },
        Tier {
            score: 3,
            conditions: &[Any(&[
                "config",
                ".env",
                "database",
                ".sql",
                "backup",
                "confidential",
                "private",
                "admin",
                "user",
                ".git",
            ])],
        },
        Tier {
            score: 2,
            conditions: &[Any(&[
                "index of",
                "directory",
                "version",
                "phpinfo",
                "server-status",
            ])],
        },
    ],
};

pub static EXPLOITABILITY: FactorTable = FactorTable {
    kind: FactorKind::Exploitability,
    tiers: &[
        Tier {
            score: 4,
            conditions: &[
                Both(&["filetype:sql", "ext:sql"], &["password", "insert into"]),
                Both(&[".env"], &["db_password"]),
                Both(&[".git"], &["index of"]),
            ],
        },
        Tier {
            score: 3,
            conditions: &[
                Both(&["admin"], &["login"]),
                Any(&["phpinfo"]),
                Any(&["backup", ".bak"]),
            ],
        },
        Tier {
            score: 2,
            conditions: &[Any(&["index of", "config", "version"])],
        },
    ],
};

pub static PREVALENCE: FactorTable = FactorTable {
    kind: FactorKind::Prevalence,
    tiers: &[
        Tier {
            score: 4,
            conditions: &[Both(&["index of"], &["parent directory"])],
        },
        Tier {
            score: 3,
            conditions: &[Any(&["admin", "login", "phpinfo", "filetype:pdf"])],
        },
        Tier {
            score: 2,
            conditions: &[Any(&["filetype:sql", ".env", "filetype:log"])],
        },
    ],
};

pub static SCOPE: FactorTable = FactorTable {
    kind: FactorKind::Scope,
    tiers: &[
        Tier {
            score: 4,
            conditions: &[
                Both(&["database", ".sql"], &["password", "users"]),
                Both(&[".git"], &["index of"]),
            ],
        },
        Tier {
            score: 3,
            conditions: &[Any(&["admin", "config", "backup"])],
        },
        Tier {
            score: 2,
            conditions: &[Any(&["filetype:", "inurl:"])],
        },
    ],
};

//! Ranked mitigation advice.

use dorkscope_core::constants::MAX_RECOMMENDATIONS;
use dorkscope_core::{Recommendation, RiskAssessment};

use crate::conditions::Condition::{self, Any, Both};

struct Advice {
    title: &'static str,
    description: &'static str,
}

struct Topic {
    name: &'static str,
    condition: Condition,
    advice: &'static [Advice],
}

/// Topic checks run in order; each matching topic contributes all its advice.
static TOPICS: &[Topic] = &[
    Topic {
        name: "credentials",
        condition: Any(&["password", "api_key", "secret"]),
        advice: &[
            Advice {
                title: "Immediate Credential Rotation",
                description: "All exposed credentials must be immediately rotated. Implement a secrets management system (HashiCorp Vault, AWS Secrets Manager) to prevent future exposure.",
            },
            Advice {
                title: "Remove from Search Index",
                description: "Use Google Search Console to request urgent removal of indexed pages containing credentials. Implement authentication to prevent crawler access.",
            },
        ],
    },
    Topic {
        name: "database",
        condition: Any(&["database", ".sql", "backup"]),
        advice: &[
            Advice {
                title: "Secure Database Backups",
                description: "Move all database backups outside web-accessible directories. Implement authentication and encryption for backup storage. Use robots.txt to disallow /backup/ paths.",
            },
            Advice {
                title: "Access Control Implementation",
                description: "Implement IP whitelisting for administrative and backup directories. Require authentication for all sensitive file access.",
            },
        ],
    },
    Topic {
        name: "directory_listing",
        condition: Any(&["index of", "directory"]),
        advice: &[Advice {
            title: "Disable Directory Listing",
            description: "Configure web server to prevent directory browsing. Apache: Add \"Options -Indexes\" to .htaccess. Nginx: Set \"autoindex off\" in configuration.",
        }],
    },
    Topic {
        name: "configuration",
        condition: Any(&["config", ".env", "phpinfo"]),
        advice: &[Advice {
            title: "Protect Configuration Files",
            description: "Move configuration files outside document root. Implement strict file permissions (600/640). Use .htaccess to deny access to .env, .git, and config files.",
        }],
    },
    Topic {
        name: "admin",
        condition: Both(&["admin"], &["login"]),
        advice: &[
            Advice {
                title: "Secure Administrative Access",
                description: "Implement IP whitelisting for admin panels. Use multi-factor authentication. Consider renaming admin URLs to non-standard paths.",
            },
            Advice {
                title: "Rate Limiting and Monitoring",
                description: "Implement rate limiting on authentication endpoints. Monitor for brute force attempts. Use CAPTCHA after failed login attempts.",
            },
        ],
    },
    Topic {
        name: "git",
        condition: Any(&[".git"]),
        advice: &[Advice {
            title: "Remove Git Directories",
            description: "Delete .git directories from production web servers. Never deploy version control metadata to production environments. Use .gitignore for sensitive files.",
        }],
    },
];

/// Appended after every topic, then the list is truncated.
static GENERAL: &[Advice] = &[
    Advice {
        title: "Regular Security Audits",
        description: "Perform monthly Google Dorking assessments against your own infrastructure. Use Google Search Console to monitor indexed content.",
    },
    Advice {
        title: "Robots.txt and Meta Tags",
        description: "Implement comprehensive robots.txt to disallow sensitive paths. Use <meta name=\"robots\" content=\"noindex\"> for pages that should not be indexed.",
    },
];

/// Mitigation advice for a dork, at most six entries.
///
/// Topic order is fixed, so when six or more topic entries match, the two
/// general entries are crowded out.
pub fn recommend(assessment: &RiskAssessment, dork: &str) -> Vec<Recommendation> {
    let lowered = dork.to_lowercase();

    let matched: Vec<&Topic> = TOPICS
        .iter()
        .filter(|t| t.condition.matches(&lowered))
        .collect();

    let mut out: Vec<Recommendation> = matched
        .iter()
        .flat_map(|t| t.advice.iter())
        .chain(GENERAL.iter())
        .map(|a| Recommendation::new(a.title, a.description))
        .collect();
    out.truncate(MAX_RECOMMENDATIONS);

    tracing::debug!(
        tier = %assessment.tier(),
        topics = ?matched.iter().map(|t| t.name).collect::<Vec<_>>(),
        count = out.len(),
        "built recommendations"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::assess;

    fn titles(dork: &str) -> Vec<String> {
        recommend(&assess(dork), dork)
            .into_iter()
            .map(|r| r.title)
            .collect()
    }

    #[test]
    fn unmatched_dork_gets_general_advice() {
        assert_eq!(
            titles("\"recipes\""),
            vec!["Regular Security Audits", "Robots.txt and Meta Tags"]
        );
    }

    #[test]
    fn admin_login_advice() {
        assert_eq!(
            titles("inurl:admin intitle:login"),
            vec![
                "Secure Administrative Access",
                "Rate Limiting and Monitoring",
                "Regular Security Audits",
                "Robots.txt and Meta Tags",
            ]
        );
    }

    #[test]
    fn many_topics_crowd_out_general_entries() {
        let t = titles("password backup index of config admin login .git");
        assert_eq!(t.len(), 6);
        assert_eq!(t[0], "Immediate Credential Rotation");
        assert!(!t.iter().any(|x| x == "Regular Security Audits"));
    }
}

//! What a command hands to a reporter.

use serde::Serialize;

use dorkscope_core::HistoryEntry;
use dorkscope_risk::Analysis;
use dorkscope_session::Session;

/// One command's output, borrowed from the orchestrator.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report<'a> {
    /// A synthesis plus the analysis of its current dork.
    Session { session: &'a Session },
    /// A standalone analysis of a user-supplied dork.
    Analysis { dork: &'a str, analysis: &'a Analysis },
    History { entries: &'a [HistoryEntry] },
    HistoryCleared,
}

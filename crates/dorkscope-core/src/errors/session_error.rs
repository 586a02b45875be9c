//! Orchestrator errors.

use super::HistoryError;

/// Errors surfaced by the session orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Blank intent text is rejected before the synthesizer is invoked.
    #[error("please describe what you want to find")]
    EmptyIntent,

    #[error("no synthesis in the current session")]
    NoCurrentSynthesis,

    #[error("refinement {index} out of range ({available} available)")]
    RefinementOutOfRange { index: usize, available: usize },

    #[error("history entry {index} out of range ({available} stored)")]
    HistoryIndexOutOfRange { index: usize, available: usize },

    #[error(transparent)]
    History(#[from] HistoryError),
}

pub type SessionResult<T> = Result<T, SessionError>;

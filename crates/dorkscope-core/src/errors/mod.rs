//! Error handling for dorkscope.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The synthesis and risk engines have no error type: every input produces
//! well-formed output. Errors only arise around them.

pub mod config_error;
pub mod history_error;
pub mod session_error;

pub use config_error::ConfigError;
pub use history_error::HistoryError;
pub use session_error::{SessionError, SessionResult};

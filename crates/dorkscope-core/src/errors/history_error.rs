//! History persistence errors.

/// Errors raised by a `HistoryStore` implementation.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("history at {path} is corrupt: {message}")]
    Corrupt { path: String, message: String },

    #[error("history serialization failed: {message}")]
    Serialize { message: String },
}

//! Blessing error types.

use thiserror::Error;

/// Blessing-related errors.
#[derive(Debug, Error)]
pub enum BlessingError {
    /// Timestamp text did not match the Store log format.
    ///
    /// A malformed timestamp indicates a log-extraction defect upstream, so
    /// it is surfaced rather than swallowed.
    #[error("invalid timestamp {text:?}: {source}")]
    Timestamp {
        /// The offending timestamp text.
        text: String,
        /// The underlying parse error.
        source: chrono::format::ParseError,
    },

    /// Unknown change kind string.
    #[error("unknown change kind: {0}")]
    UnknownChangeKind(String),

    /// Unknown pundle type string.
    #[error("unknown pundle type: {0}")]
    UnknownPundleType(String),
}

/// Result type for blessing operations.
pub type BlessingResult<T> = Result<T, BlessingError>;

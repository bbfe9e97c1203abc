//! Error types for tickbar.

use chrono::{NaiveTime, TimeDelta};
use thiserror::Error;

/// Result type alias for tickbar operations.
pub type Result<T> = std::result::Result<T, TickbarError>;

/// Errors that can occur while building bars.
///
/// Malformed tick records are never reported here; the sanitizer drops them.
#[derive(Error, Debug)]
pub enum TickbarError {
    /// Bar interval is zero or negative.
    #[error("Interval must be positive, got {0}")]
    NonPositiveInterval(TimeDelta),

    /// Timestamp string did not match the expected format.
    #[error("Invalid timestamp '{value}', expected format {format}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// The strftime-style format that was expected.
        format: &'static str,
    },

    /// Trading session opens after it closes.
    #[error("Invalid trading session: open {open} > close {close}")]
    InvalidSession {
        /// Session open time.
        open: NaiveTime,
        /// Session close time.
        close: NaiveTime,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

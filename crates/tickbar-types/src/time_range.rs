//! Half-open aggregation windows.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Result, TickbarError};

/// Format of range bounds and bar timestamps (whole seconds).
pub const BAR_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A half-open time range `[start, end)`.
///
/// A range whose start is not before its end is valid and simply empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// First instant inside the range.
    pub start: NaiveDateTime,
    /// First instant after the range.
    pub end: NaiveDateTime,
}

impl TimeRange {
    /// Creates a new range.
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parses a range from two `YYYY-MM-DD HH:MM:SS` strings.
    ///
    /// # Errors
    ///
    /// Returns [`TickbarError::InvalidTimestamp`] if either bound is malformed.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_bar_timestamp(start)?, parse_bar_timestamp(end)?))
    }

    /// Returns true if `timestamp` lies in `[start, end)`.
    #[must_use]
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    /// Returns true if no instant lies in the range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.format(BAR_TIMESTAMP_FORMAT),
            self.end.format(BAR_TIMESTAMP_FORMAT)
        )
    }
}

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// # Errors
///
/// Returns [`TickbarError::InvalidTimestamp`] if the string does not match.
pub fn parse_bar_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, BAR_TIMESTAMP_FORMAT).map_err(|_| {
        TickbarError::InvalidTimestamp {
            value: s.to_string(),
            format: BAR_TIMESTAMP_FORMAT,
        }
    })
}

//! Trading session (time-of-day) filtering.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{Result, TickbarError};

/// A closed time-of-day window `[open, close]`.
///
/// Only the time component of a timestamp is considered; the date is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingSession {
    open: NaiveTime,
    close: NaiveTime,
}

impl TradingSession {
    /// Regular trading hours, 09:30:00 through 16:00:00 inclusive.
    pub const REGULAR: Self = Self {
        open: NaiveTime::from_hms_opt(9, 30, 0).expect("valid open time"),
        close: NaiveTime::from_hms_opt(16, 0, 0).expect("valid close time"),
    };

    /// Creates a session, validating that it opens no later than it closes.
    ///
    /// # Errors
    ///
    /// Returns [`TickbarError::InvalidSession`] if `open > close`.
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self> {
        if open > close {
            return Err(TickbarError::InvalidSession { open, close });
        }
        Ok(Self { open, close })
    }

    /// Returns the session open time.
    #[must_use]
    pub const fn open(&self) -> NaiveTime {
        self.open
    }

    /// Returns the session close time.
    #[must_use]
    pub const fn close(&self) -> NaiveTime {
        self.close
    }

    /// Returns true if the time of day of `timestamp` lies inside the session.
    #[must_use]
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        let time = timestamp.time();
        self.open <= time && time <= self.close
    }
}

impl Default for TradingSession {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl std::fmt::Display for TradingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.open, self.close)
    }
}

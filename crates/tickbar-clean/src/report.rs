//! Drop accounting for sanitization runs.

use serde::{Deserialize, Serialize};

/// Why a raw record did not become a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// `Timestamp`, `Price` or `Size` is missing or empty.
    MissingField,
    /// Timestamp did not parse.
    InvalidTimestamp,
    /// Price did not parse as a finite number.
    InvalidPrice,
    /// Size did not parse as an integer.
    InvalidSize,
    /// Price or size is zero or negative.
    NonPositive,
    /// Same `(timestamp, price, size)` was already accepted.
    Duplicate,
    /// Time of day falls outside the trading session.
    OutsideSession,
}

impl DropReason {
    /// Returns the reason as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::InvalidPrice => "invalid_price",
            Self::InvalidSize => "invalid_size",
            Self::NonPositive => "non_positive",
            Self::Duplicate => "duplicate",
            Self::OutsideSession => "outside_session",
        }
    }

    /// Returns all reasons, in filter order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::MissingField,
            Self::InvalidTimestamp,
            Self::InvalidPrice,
            Self::InvalidSize,
            Self::NonPositive,
            Self::Duplicate,
            Self::OutsideSession,
        ]
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counts of accepted and dropped records from one sanitization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Records examined.
    pub seen: usize,
    /// Records that became ticks.
    pub accepted: usize,
    dropped: [usize; 7],
}

impl CleanReport {
    /// Records a drop.
    pub fn record_drop(&mut self, reason: DropReason) {
        self.seen += 1;
        self.dropped[reason.index()] += 1;
    }

    /// Records an accepted tick.
    pub fn record_accept(&mut self) {
        self.seen += 1;
        self.accepted += 1;
    }

    /// Returns the number of records dropped for `reason`.
    #[must_use]
    pub const fn dropped(&self, reason: DropReason) -> usize {
        self.dropped[reason.index()]
    }

    /// Returns the number of records dropped for any reason.
    #[must_use]
    pub fn total_dropped(&self) -> usize {
        self.dropped.iter().sum()
    }

    /// Returns `(reason, count)` pairs for every reason with a non-zero count.
    pub fn drops(&self) -> impl Iterator<Item = (DropReason, usize)> + '_ {
        DropReason::all()
            .iter()
            .map(|&reason| (reason, self.dropped(reason)))
            .filter(|&(_, count)| count > 0)
    }
}

impl std::fmt::Display for CleanReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} records accepted", self.accepted, self.seen)?;
        for (reason, count) in self.drops() {
            write!(f, ", {count} {reason}")?;
        }
        Ok(())
    }
}

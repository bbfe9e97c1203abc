//! Compound bar interval parsing.

use chrono::TimeDelta;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use std::sync::LazyLock;

/// Matches one `<digits><unit>` token.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)([dhms])").expect("valid interval token regex"));

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Bar interval, stored as a whole number of seconds.
///
/// Parsed from compound specifications such as `1d2h30m` or `90s`. Each
/// `<integer><unit>` token contributes `integer * unit` seconds, where unit is
/// one of `d`, `h`, `m` or `s`. Repeated units accumulate (`30m30m` is one
/// hour) and anything that is not a token is ignored, so parsing never fails:
/// an input without tokens yields a zero interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Interval {
    seconds: u64,
}

impl Interval {
    /// Creates an interval from a number of seconds.
    #[must_use]
    pub const fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Parses a compound interval specification.
    ///
    /// Token values that overflow saturate at `u64::MAX` seconds.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let seconds = TOKEN.captures_iter(spec).fold(0u64, |total, caps| {
            // The digit run only fails to parse on overflow.
            let value = caps[1].parse::<u64>().unwrap_or(u64::MAX);
            let multiplier = match &caps[2] {
                "d" => SECONDS_PER_DAY,
                "h" => SECONDS_PER_HOUR,
                "m" => SECONDS_PER_MINUTE,
                _ => 1,
            };
            total.saturating_add(value.saturating_mul(multiplier))
        });
        Self { seconds }
    }

    /// Returns the total number of seconds.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Returns true if no tokens contributed any time.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0
    }

    /// Converts to a [`TimeDelta`], saturating at [`TimeDelta::MAX`].
    #[must_use]
    pub fn as_delta(&self) -> TimeDelta {
        i64::try_from(self.seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.seconds == 0 {
            return write!(f, "0s");
        }

        let days = self.seconds / SECONDS_PER_DAY;
        let hours = self.seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR;
        let minutes = self.seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
        let seconds = self.seconds % SECONDS_PER_MINUTE;

        for (value, unit) in [(days, 'd'), (hours, 'h'), (minutes, 'm'), (seconds, 's')] {
            if value > 0 {
                write!(f, "{value}{unit}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Interval {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Interval {
    fn from(spec: String) -> Self {
        Self::parse(&spec)
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}

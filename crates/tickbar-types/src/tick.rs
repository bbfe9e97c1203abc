//! Tick data representation.

use chrono::{NaiveDateTime, TimeDelta};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::RawRecord;

/// Format used to render tick timestamps (microsecond precision).
///
/// Parsing is slightly more lenient, see [`parse_tick_timestamp`].
pub const TICK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

const WHOLE_SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MAX_FRACTION_DIGITS: usize = 6;

/// Shape of the whole-seconds part; chrono alone would skip padding spaces.
static WHOLE_SECONDS_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2} [0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}$")
        .expect("valid timestamp shape regex")
});

/// A single cleaned trade.
///
/// Ticks are only produced by the sanitizer, which guarantees a positive
/// finite price and a positive size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Trade time (naive local time, no timezone).
    pub timestamp: NaiveDateTime,
    /// Trade price.
    pub price: f64,
    /// Trade size.
    pub size: u64,
}

impl Tick {
    /// Field holding the trade time in a raw record.
    pub const TIMESTAMP_FIELD: &'static str = "Timestamp";
    /// Field holding the trade price in a raw record.
    pub const PRICE_FIELD: &'static str = "Price";
    /// Field holding the trade size in a raw record.
    pub const SIZE_FIELD: &'static str = "Size";

    /// Creates a new tick.
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, price: f64, size: u64) -> Self {
        Self {
            timestamp,
            price,
            size,
        }
    }

    /// Returns the exact `(timestamp, price, size)` identity of this tick.
    #[must_use]
    pub fn key(&self) -> TickKey {
        TickKey {
            timestamp: self.timestamp,
            price_bits: self.price.to_bits(),
            size: self.size,
        }
    }

    /// Renders the tick back into a raw record that cleans to the same tick.
    #[must_use]
    pub fn to_record(&self) -> RawRecord {
        RawRecord::new()
            .with(
                Self::TIMESTAMP_FIELD,
                self.timestamp.format(TICK_TIMESTAMP_FORMAT).to_string(),
            )
            .with(Self::PRICE_FIELD, self.price.to_string())
            .with(Self::SIZE_FIELD, self.size.to_string())
    }
}

/// Hashable identity of a tick, used for duplicate detection.
///
/// Prices compare by bit pattern, which coincides with numeric equality for
/// the positive finite prices a [`Tick`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickKey {
    timestamp: NaiveDateTime,
    price_bits: u64,
    size: u64,
}

/// Parses a tick timestamp of the form `YYYY-MM-DD HH:MM:SS.ffffff`.
///
/// The fractional part is required and may have one to six digits; shorter
/// fractions are right-padded (`.5` is 500 000 microseconds).
#[must_use]
pub fn parse_tick_timestamp(s: &str) -> Option<NaiveDateTime> {
    let (whole, fraction) = s.rsplit_once('.')?;
    if fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    if !WHOLE_SECONDS_SHAPE.is_match(whole) {
        return None;
    }

    let base = NaiveDateTime::parse_from_str(whole, WHOLE_SECONDS_FORMAT).ok()?;
    let micros: i64 = format!("{fraction:0<MAX_FRACTION_DIGITS$}").parse().ok()?;
    base.checked_add_signed(TimeDelta::microseconds(micros))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn ts(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 16)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micro)
            .unwrap()
    }

    #[test]
    fn test_parse_full_precision() {
        let parsed = parse_tick_timestamp("2024-09-16 09:30:00.123456").unwrap();
        assert_eq!(parsed, ts(9, 30, 0, 123_456));
    }

    #[test]
    fn test_parse_short_fraction() {
        let parsed = parse_tick_timestamp("2024-09-16 09:30:00.5").unwrap();
        assert_eq!(parsed.nanosecond(), 500_000_000);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_tick_timestamp("not-a-date").is_none());
        assert!(parse_tick_timestamp("2024-09-16 09:30:00").is_none());
        assert!(parse_tick_timestamp("2024-09-16 09:30:00.").is_none());
        assert!(parse_tick_timestamp("2024-09-16 09:30:00.1234567").is_none());
        assert!(parse_tick_timestamp("2024-09-16 09:30:00.12a").is_none());
        assert!(parse_tick_timestamp("2024-13-16 09:30:00.000000").is_none());
    }

    #[test]
    fn test_parse_rejects_embedded_whitespace() {
        assert!(parse_tick_timestamp(" 2024-09-16 10:00:00.000000").is_none());
        assert!(parse_tick_timestamp("2024-09-16 10:00:00 .000000").is_none());
        assert!(parse_tick_timestamp("2024-09-16 10: 0:00.000000").is_none());
        assert!(parse_tick_timestamp("2024-09-16  10:00:00.000000").is_none());
        assert!(parse_tick_timestamp("2024-9-6 9:5:0.000000").is_some());
    }

    #[test]
    fn test_record_round_trip() {
        let tick = Tick::new(ts(10, 15, 30, 250), 101.37, 42);
        let record = tick.to_record();

        assert_eq!(
            record.get(Tick::TIMESTAMP_FIELD),
            Some("2024-09-16 10:15:30.000250")
        );
        assert_eq!(record.get(Tick::PRICE_FIELD), Some("101.37"));
        assert_eq!(record.get(Tick::SIZE_FIELD), Some("42"));
        assert_eq!(
            parse_tick_timestamp(record.get(Tick::TIMESTAMP_FIELD).unwrap()),
            Some(tick.timestamp)
        );
    }

    #[test]
    fn test_key_distinguishes_price_and_size() {
        let a = Tick::new(ts(10, 0, 0, 0), 100.0, 10);
        let b = Tick::new(ts(10, 0, 0, 0), 100.5, 10);
        let c = Tick::new(ts(10, 0, 0, 0), 100.0, 11);

        assert_eq!(a.key(), Tick::new(ts(10, 0, 0, 0), 100.0, 10).key());
        assert_ne!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }
}

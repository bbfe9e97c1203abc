//! Raw record to clean tick conversion.

use std::collections::HashSet;

use tickbar_types::{RawRecord, Tick, TradingSession, parse_tick_timestamp};

use crate::{CleanReport, DropReason};

/// Converts raw records into a clean, deduplicated, time-ordered tick sequence.
///
/// Each record passes through these filters in order, and is silently dropped
/// by the first one it fails:
///
/// 1. `Timestamp`, `Price` and `Size` must all be present and non-empty.
/// 2. They must parse (timestamp as `YYYY-MM-DD HH:MM:SS.ffffff`, price as a
///    finite float, size as an integer).
/// 3. Price and size must be positive.
/// 4. The `(timestamp, price, size)` triple must not have been accepted
///    already; the first occurrence wins.
/// 5. The time of day must lie inside the trading session.
///
/// Survivors are stably sorted by timestamp, so ticks sharing a timestamp
/// keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer {
    session: TradingSession,
}

impl Sanitizer {
    /// Creates a sanitizer that keeps ticks inside `session`.
    #[must_use]
    pub const fn new(session: TradingSession) -> Self {
        Self { session }
    }

    /// Returns the trading session ticks must fall into.
    #[must_use]
    pub const fn session(&self) -> TradingSession {
        self.session
    }

    /// Cleans `records` into an ordered tick sequence.
    #[must_use]
    pub fn clean<'a, I>(&self, records: I) -> Vec<Tick>
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        self.clean_with_report(records).0
    }

    /// Cleans `records`, also returning how many records each filter dropped.
    #[must_use]
    pub fn clean_with_report<'a, I>(&self, records: I) -> (Vec<Tick>, CleanReport)
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let mut report = CleanReport::default();
        let mut seen = HashSet::new();
        let mut ticks = Vec::new();

        for record in records {
            let verdict = parse_record(record).and_then(|tick| {
                if !seen.insert(tick.key()) {
                    return Err(DropReason::Duplicate);
                }
                if !self.session.contains(tick.timestamp) {
                    return Err(DropReason::OutsideSession);
                }
                Ok(tick)
            });

            match verdict {
                Ok(tick) => {
                    report.record_accept();
                    ticks.push(tick);
                }
                Err(reason) => report.record_drop(reason),
            }
        }

        ticks.sort_by_key(|tick| tick.timestamp);

        tracing::debug!(session = %self.session, %report, "sanitized tick records");
        (ticks, report)
    }
}

/// Applies the field, parse and positivity filters to one record.
fn parse_record(record: &RawRecord) -> Result<Tick, DropReason> {
    let (Some(timestamp), Some(price), Some(size)) = (
        record.non_empty(Tick::TIMESTAMP_FIELD),
        record.non_empty(Tick::PRICE_FIELD),
        record.non_empty(Tick::SIZE_FIELD),
    ) else {
        return Err(DropReason::MissingField);
    };

    let timestamp = parse_tick_timestamp(timestamp).ok_or(DropReason::InvalidTimestamp)?;
    let price = price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or(DropReason::InvalidPrice)?;
    let size = size
        .trim()
        .parse::<i64>()
        .map_err(|_| DropReason::InvalidSize)?;

    if price <= 0.0 || size <= 0 {
        return Err(DropReason::NonPositive);
    }
    let size = u64::try_from(size).map_err(|_| DropReason::NonPositive)?;

    Ok(Tick::new(timestamp, price, size))
}

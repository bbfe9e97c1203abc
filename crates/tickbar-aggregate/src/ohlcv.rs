//! OHLCV (candlestick) data structure.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tickbar_types::Tick;

/// OHLCV bar (candlestick) data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Left edge of the bin this bar summarizes.
    pub bin_start: NaiveDateTime,
    /// Opening price (first tick's price).
    pub open: f64,
    /// Highest price during the bin.
    pub high: f64,
    /// Lowest price during the bin.
    pub low: f64,
    /// Closing price (last tick's price).
    pub close: f64,
    /// Total traded size.
    pub volume: u64,
    /// Number of ticks in the bar.
    pub tick_count: u32,
}

impl Bar {
    /// Creates a new OHLCV bar.
    #[must_use]
    pub const fn new(
        bin_start: NaiveDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
        tick_count: u32,
    ) -> Self {
        Self {
            bin_start,
            open,
            high,
            low,
            close,
            volume,
            tick_count,
        }
    }

    /// Summarizes the ticks of one bin, in time order.
    ///
    /// The label is taken as given, not derived from the ticks. Returns
    /// `None` for an empty bin.
    #[must_use]
    pub fn from_ticks(bin_start: NaiveDateTime, ticks: &[Tick]) -> Option<Self> {
        let first = ticks.first()?;
        let last = ticks.last()?;

        let mut high = first.price;
        let mut low = first.price;
        let mut volume = 0u64;
        for tick in ticks {
            high = high.max(tick.price);
            low = low.min(tick.price);
            volume = volume.saturating_add(tick.size);
        }

        Some(Self::new(
            bin_start,
            first.price,
            high,
            low,
            last.price,
            volume,
            u32::try_from(ticks.len()).unwrap_or(u32::MAX),
        ))
    }
}

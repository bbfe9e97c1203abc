//! Fixed-interval tick-to-OHLCV aggregation.

use chrono::{NaiveDateTime, TimeDelta};
use tickbar_types::{Interval, Result, Tick, TickbarError, TimeRange};

use crate::Bar;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Fixed-interval bar aggregator.
///
/// Bins are contiguous, `interval` wide and anchored at the start of the
/// requested range: `[start, start + interval)`, `[start + interval,
/// start + 2 * interval)`, and so on. Bins without ticks produce no bar, so
/// the output is sparse with respect to the grid.
#[derive(Debug, Clone, Copy)]
pub struct BarAggregator {
    interval: TimeDelta,
}

impl BarAggregator {
    /// Creates a new aggregator for the given bin width.
    ///
    /// # Errors
    ///
    /// Returns [`TickbarError::NonPositiveInterval`] if `interval` is zero or
    /// negative.
    pub fn new(interval: TimeDelta) -> Result<Self> {
        if interval <= TimeDelta::zero() {
            return Err(TickbarError::NonPositiveInterval(interval));
        }
        Ok(Self { interval })
    }

    /// Creates a new aggregator from a parsed interval specification.
    ///
    /// # Errors
    ///
    /// Returns [`TickbarError::NonPositiveInterval`] if the specification
    /// contained no time.
    pub fn from_interval(interval: &Interval) -> Result<Self> {
        Self::new(interval.as_delta())
    }

    /// Returns the bin width.
    #[must_use]
    pub const fn interval(&self) -> TimeDelta {
        self.interval
    }

    /// Aggregates time-ordered ticks into bars over `range`.
    ///
    /// Ticks outside `[range.start, range.end)` are skipped. Each tick at or
    /// past the current bin's right edge closes that bin and moves the bin
    /// start forward by whole intervals until the tick fits; a tick exactly on
    /// an edge opens the next bin. The last non-empty bin is emitted once the
    /// ticks run out, labeled with its own start even if it extends past
    /// `range.end`.
    #[must_use]
    pub fn aggregate(&self, ticks: &[Tick], range: TimeRange) -> Vec<Bar> {
        let mut bars = Vec::new();
        let mut bin_start = range.start;
        let mut current: Option<BarBuilder> = None;

        for tick in ticks.iter().filter(|tick| range.contains(tick.timestamp)) {
            if let Some(next_start) = self.advance(bin_start, tick.timestamp) {
                if let Some(builder) = current.take() {
                    bars.push(builder.finish());
                }
                bin_start = next_start;
            }

            match current.as_mut() {
                Some(builder) => builder.update(tick),
                None => current = Some(BarBuilder::new(bin_start, tick)),
            }
        }

        if let Some(builder) = current {
            bars.push(builder.finish());
        }

        tracing::debug!(
            interval = ?self.interval,
            %range,
            bars = bars.len(),
            "aggregated ticks"
        );
        bars
    }

    /// Returns the start of the bin holding `timestamp`, if that is not the
    /// bin starting at `bin_start`.
    ///
    /// Jumps over any number of empty bins at once, landing on the same grid
    /// point as stepping one interval at a time.
    fn advance(&self, bin_start: NaiveDateTime, timestamp: NaiveDateTime) -> Option<NaiveDateTime> {
        let elapsed = total_nanos(timestamp - bin_start);
        let width = total_nanos(self.interval);

        let steps = elapsed / width;
        if steps < 1 {
            return None;
        }

        let offset = steps * width;
        let secs = i64::try_from(offset / NANOS_PER_SECOND).ok()?;
        let nanos = u32::try_from(offset % NANOS_PER_SECOND).ok()?;
        bin_start.checked_add_signed(TimeDelta::new(secs, nanos)?)
    }
}

/// Aggregates time-ordered ticks into `interval`-wide bars over `range`.
///
/// # Errors
///
/// Returns [`TickbarError::NonPositiveInterval`] if `interval` is zero or
/// negative.
pub fn aggregate(ticks: &[Tick], interval: TimeDelta, range: TimeRange) -> Result<Vec<Bar>> {
    Ok(BarAggregator::new(interval)?.aggregate(ticks, range))
}

fn total_nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * NANOS_PER_SECOND + i128::from(delta.subsec_nanos())
}

/// Running OHLCV state for the open bin.
#[derive(Debug)]
struct BarBuilder {
    bin_start: NaiveDateTime,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
    tick_count: u32,
}

impl BarBuilder {
    /// Creates a new builder from the first tick.
    const fn new(bin_start: NaiveDateTime, tick: &Tick) -> Self {
        Self {
            bin_start,
            open: tick.price,
            high: tick.price,
            low: tick.price,
            close: tick.price,
            volume: tick.size,
            tick_count: 1,
        }
    }

    /// Updates the builder with a later tick.
    fn update(&mut self, tick: &Tick) {
        self.high = self.high.max(tick.price);
        self.low = self.low.min(tick.price);
        self.close = tick.price;
        self.volume = self.volume.saturating_add(tick.size);
        self.tick_count = self.tick_count.saturating_add(1);
    }

    /// Finishes building and returns the OHLCV bar.
    const fn finish(self) -> Bar {
        Bar::new(
            self.bin_start,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.tick_count,
        )
    }
}

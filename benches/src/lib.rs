//! Benchmark utilities for tickbar.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use tickbar_lib::{RawRecord, TICK_TIMESTAMP_FORMAT};

/// Configuration for a synthetic tick data set.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of trading days to generate.
    pub days: u32,
    /// Records generated per day, before noise is removed.
    pub records_per_day: u32,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            days: 1,
            records_per_day: 100_000,
            seed: 0x5eed,
        }
    }
}

impl BenchmarkConfig {
    /// Total number of records generated.
    pub fn total_records(&self) -> u64 {
        u64::from(self.days) * u64::from(self.records_per_day)
    }

    /// First session open covered by the data set.
    pub fn first_open(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 16)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid session open")
    }

    /// Instant just past the last generated day.
    pub fn end(&self) -> NaiveDateTime {
        self.first_open() + TimeDelta::days(i64::from(self.days))
    }
}

/// Generates shuffled raw records resembling a noisy merged exchange feed.
///
/// Roughly 2% of records are exact duplicates, 1% have a malformed price and
/// 5% fall outside regular trading hours.
pub fn synthetic_records(config: &BenchmarkConfig) -> Vec<RawRecord> {
    let mut state = config.seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    let session_micros = 23_400_000_000u64;
    let mut records = Vec::with_capacity(config.total_records() as usize);
    let mut price = 100.0f64;

    for day in 0..config.days {
        let open = config.first_open() + TimeDelta::days(i64::from(day));
        for _ in 0..config.records_per_day {
            let roll = next() % 100;
            let offset = if roll < 5 {
                // Pre-market.
                -TimeDelta::minutes((next() % 120 + 1) as i64)
            } else {
                TimeDelta::microseconds((next() % session_micros) as i64)
            };
            price = (price + ((next() % 21) as f64 - 10.0) / 100.0).max(1.0);

            let record = RawRecord::new()
                .with("Timestamp", (open + offset).format(TICK_TIMESTAMP_FORMAT).to_string())
                .with("Price", if roll == 99 { "n/a".to_string() } else { format!("{price:.2}") })
                .with("Size", (next() % 1_000 + 1).to_string());

            if (5..7).contains(&roll) {
                records.push(record.clone());
            }
            records.push(record);
        }
    }

    // Fisher-Yates, so duplicates and days are interleaved like a merged feed.
    for i in (1..records.len()).rev() {
        let j = (next() % (i as u64 + 1)) as usize;
        records.swap(i, j);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> BenchmarkConfig {
        BenchmarkConfig {
            days: 2,
            records_per_day: 500,
            seed: 7,
        }
    }

    #[test]
    fn test_records_are_deterministic() {
        assert_eq!(synthetic_records(&small()), synthetic_records(&small()));
    }

    #[test]
    fn test_records_are_interleaved() {
        let records = synthetic_records(&small());
        let stamps: Vec<&str> = records
            .iter()
            .filter_map(|r| r.get("Timestamp"))
            .collect();

        assert!(records.len() >= 1_000);
        assert!(stamps.windows(2).any(|w| w[0] > w[1]));
        // Second-day records show up in the first half once shuffled.
        assert!(stamps[..stamps.len() / 2].iter().any(|s| s.starts_with("2024-09-17")));
    }
}

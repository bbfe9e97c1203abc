//! Cleaning-to-aggregation coordination.

use std::io::Read;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tickbar_aggregate::{Bar, BarAggregator};
use tickbar_clean::{CleanReport, Sanitizer};
use tickbar_types::{Interval, RawRecord, Result, Tick, TimeRange};

/// Cleaned ticks, ready to be aggregated at any interval over any range.
///
/// Records are cleaned once on construction; every aggregation afterwards
/// reads the same immutable tick sequence, so independent requests can run
/// in parallel over a shared `Pipeline`.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    ticks: Vec<Tick>,
    report: CleanReport,
}

impl Pipeline {
    /// Cleans `records` with `sanitizer`.
    #[must_use]
    pub fn new<'a, I>(records: I, sanitizer: &Sanitizer) -> Self
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let (ticks, report) = sanitizer.clean_with_report(records);
        tracing::info!(%report, "cleaned tick records");
        Self { ticks, report }
    }

    /// Returns the clean tick sequence, ordered by timestamp.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Returns the drop counts from cleaning.
    #[must_use]
    pub const fn report(&self) -> &CleanReport {
        &self.report
    }

    /// Aggregates the clean ticks into `interval` bars over `range`.
    ///
    /// # Errors
    ///
    /// Returns [`TickbarError::NonPositiveInterval`](tickbar_types::TickbarError::NonPositiveInterval)
    /// if the interval is zero.
    pub fn bars(&self, interval: &Interval, range: TimeRange) -> Result<Vec<Bar>> {
        let aggregator = BarAggregator::from_interval(interval)?;
        Ok(aggregator.aggregate(&self.ticks, range))
    }

    /// Runs one bar request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request's range bounds do not parse or its
    /// interval is zero.
    pub fn run(&self, request: &BarRequest) -> Result<Vec<Bar>> {
        let range = request.range()?;
        let bars = self.bars(&request.interval(), range)?;
        tracing::info!(
            interval = %request.interval,
            %range,
            bars = bars.len(),
            "built bars"
        );
        Ok(bars)
    }
}

/// One aggregation request, as given on the command line or in a jobs file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarRequest {
    /// Interval specification, e.g. `1m` or `1h30m`.
    pub interval: String,
    /// Range start, `YYYY-MM-DD HH:MM:SS`.
    pub start: String,
    /// Range end (exclusive), `YYYY-MM-DD HH:MM:SS`.
    pub end: String,
    /// Output path; defaults to `ohlcv_<interval>.<ext>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl BarRequest {
    /// Creates a request with the default output path.
    #[must_use]
    pub fn new(
        interval: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            interval: interval.into(),
            start: start.into(),
            end: end.into(),
            output: None,
        }
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Returns the parsed interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        Interval::parse(&self.interval)
    }

    /// Returns the parsed range.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is malformed.
    pub fn range(&self) -> Result<TimeRange> {
        TimeRange::parse(&self.start, &self.end)
    }

    /// Returns the output path, falling back to `ohlcv_<interval>.<extension>`.
    #[must_use]
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("ohlcv_{}.{extension}", self.interval)))
    }
}

/// Reads a JSON array of bar requests.
///
/// # Errors
///
/// Returns an error if the input is not a valid request list.
pub fn load_requests<R: Read>(reader: R) -> Result<Vec<BarRequest>> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use tickbar_types::TickbarError;

    fn record(timestamp: &str, price: &str, size: &str) -> RawRecord {
        RawRecord::new()
            .with("Timestamp", timestamp)
            .with("Price", price)
            .with("Size", size)
    }

    fn sample_records() -> Vec<RawRecord> {
        vec![
            record("2024-09-16 10:05:00.000000", "99", "20"),
            record("2024-09-16 09:30:00.000000", "100", "10"),
            record("2024-09-16 09:30:00.000000", "100", "10"),
            record("2024-09-16 08:00:00.000000", "500", "10"),
            record("2024-09-16 09:45:00.000000", "-5", "10"),
            record("not-a-date", "100", "10"),
            record("2024-09-16 09:45:00.000000", "101", "5"),
            record("2024-09-16 10:40:00.000000", "98", "1"),
        ]
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let pipeline = Pipeline::new(&sample_records(), &Sanitizer::default());
        assert_eq!(pipeline.ticks().len(), 4);
        assert_eq!(pipeline.report().total_dropped(), 4);

        let request = BarRequest::new("1h", "2024-09-16 09:30:00", "2024-09-16 11:00:00");
        let bars = pipeline.run(&request).unwrap();

        assert_eq!(bars.len(), 2);
        let first = bars[0];
        assert_eq!(
            first.bin_start,
            NaiveDate::from_ymd_opt(2024, 9, 16).unwrap().and_hms_opt(9, 30, 0).unwrap()
        );
        assert_relative_eq!(first.open, 100.0);
        assert_relative_eq!(first.high, 101.0);
        assert_relative_eq!(first.low, 99.0);
        assert_relative_eq!(first.close, 99.0);
        assert_eq!(first.volume, 35);
        assert_eq!(bars[1].volume, 1);
    }

    #[test]
    fn test_requests_share_ticks() {
        let pipeline = Pipeline::new(&sample_records(), &Sanitizer::default());
        let range = TimeRange::parse("2024-09-16 09:30:00", "2024-09-16 16:00:00").unwrap();

        let minute = pipeline.bars(&Interval::parse("1m"), range).unwrap();
        let day = pipeline.bars(&Interval::parse("1d"), range).unwrap();

        assert_eq!(minute.len(), 4);
        assert_eq!(day.len(), 1);
        assert_eq!(
            minute.iter().map(|b| b.volume).sum::<u64>(),
            day[0].volume
        );
    }

    #[test]
    fn test_zero_interval_fails_fast() {
        let pipeline = Pipeline::new(&sample_records(), &Sanitizer::default());
        let request = BarRequest::new("soon", "2024-09-16 09:30:00", "2024-09-16 16:00:00");

        assert!(matches!(
            pipeline.run(&request),
            Err(TickbarError::NonPositiveInterval(_))
        ));
    }

    #[test]
    fn test_bad_range_reported() {
        let pipeline = Pipeline::new(&sample_records(), &Sanitizer::default());
        let request = BarRequest::new("1m", "2024-09-16", "2024-09-16 16:00:00");

        assert!(matches!(
            pipeline.run(&request),
            Err(TickbarError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = Pipeline::new(&[], &Sanitizer::default());
        let request = BarRequest::new("1m", "2024-09-16 09:30:00", "2024-09-16 16:00:00");
        assert!(pipeline.run(&request).unwrap().is_empty());
    }

    #[test]
    fn test_output_path() {
        let request = BarRequest::new("3m", "2024-09-16 09:30:00", "2024-09-16 16:00:00");
        assert_eq!(request.output_path("csv"), PathBuf::from("ohlcv_3m.csv"));

        let request = request.with_output("bars/three.json");
        assert_eq!(request.output_path("csv"), PathBuf::from("bars/three.json"));
    }

    #[test]
    fn test_load_requests() {
        let json = r#"[
            {"interval": "1m", "start": "2024-09-16 09:30:00", "end": "2024-09-16 16:00:00"},
            {"interval": "2m", "start": "2024-09-16 09:30:00", "end": "2024-09-16 10:00:00", "output": "two.csv"}
        ]"#;
        let requests = load_requests(json.as_bytes()).unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].output, None);
        assert_eq!(requests[1].output, Some(PathBuf::from("two.csv")));
        assert!(load_requests("{".as_bytes()).is_err());
    }

    #[test]
    fn test_pipeline_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pipeline>();
    }
}

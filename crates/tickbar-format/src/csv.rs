//! CSV output format.

use std::io::Write;
use tickbar_aggregate::Bar;
use tickbar_types::{BAR_TIMESTAMP_FORMAT, TICK_TIMESTAMP_FORMAT, Tick};

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Bars are written under the header `Timestamp,Open,High,Low,Close,Volume`
/// with whole-second timestamps. Prices always carry a decimal point
/// (`100.0`, not `100`).
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_ticks<W: Write + Send>(
        &self,
        ticks: &[Tick],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "Timestamp{d}Price{d}Size")?;
        }

        for tick in ticks {
            writeln!(
                writer,
                "{}{d}{:?}{d}{}",
                tick.timestamp.format(TICK_TIMESTAMP_FORMAT),
                tick.price,
                tick.size
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_bars<W: Write + Send>(&self, bars: &[Bar], mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "Timestamp{d}Open{d}High{d}Low{d}Close{d}Volume")?;
        }

        // Debug formatting keeps the trailing ".0" on integral prices.
        for bar in bars {
            writeln!(
                writer,
                "{}{d}{:?}{d}{:?}{d}{:?}{d}{:?}{d}{}",
                bar.bin_start.format(BAR_TIMESTAMP_FORMAT),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

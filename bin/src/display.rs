//! Display utilities and output formatting for the tickbar CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tickbar_lib::prelude::*;

/// Output format for bars and cleaned ticks.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write bars to a file in the specified format.
pub(crate) fn write_bars(bars: &[Bar], output: &Path, format: Format) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_bars(bars, writer)?,
        Format::Json => JsonFormatter::new().write_bars(bars, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_bars(bars, writer)?,
    }

    Ok(())
}

/// Write cleaned ticks to a file in the specified format.
pub(crate) fn write_ticks(ticks: &[Tick], output: &Path, format: Format) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_ticks(ticks, writer)?,
        Format::Json => JsonFormatter::new().write_ticks(ticks, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_ticks(ticks, writer)?,
    }

    Ok(())
}

/// Progress bar over a number of bar requests, hidden in quiet mode.
pub(crate) fn request_progress(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} requests {msg}")
            .expect("Invalid progress template")
            .progress_chars("=>-"),
    );
    pb
}

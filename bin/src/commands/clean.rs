//! Clean command implementation.

use crate::display::{Format, write_ticks};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tickbar_lib::prelude::*;

/// Clean the tick files, print the drop report and optionally export ticks.
pub(crate) fn clean(
    data: &Path,
    session: TradingSession,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let pipeline = super::load_pipeline(data, session)?;
    let report = pipeline.report();

    if !quiet {
        println!("{:<20} {:>10}", "RECORDS", "COUNT");
        println!("{}", "-".repeat(31));
        println!("{:<20} {:>10}", "seen", report.seen);
        println!("{:<20} {:>10}", "accepted", report.accepted);
        for (reason, count) in report.drops() {
            println!("{:<20} {:>10}", reason.as_str(), count);
        }
        println!("\nSession: {session}");
    }

    if let Some(output) = output {
        write_ticks(pipeline.ticks(), &output, format)?;
        if !quiet {
            println!("Cleaned ticks written to: {}", output.display());
        }
    }

    Ok(())
}

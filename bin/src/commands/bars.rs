//! Bars command implementation.
//!
//! Builds bars for a single interval and time range and writes them out.

use crate::display::{Format, write_bars};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tickbar_lib::prelude::*;

/// Build bars for one request.
#[allow(clippy::too_many_arguments)]
pub(crate) fn bars(
    data: &Path,
    session: TradingSession,
    interval: &str,
    start: &str,
    end: &str,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let mut request = BarRequest::new(interval, start, end);
    if let Some(output) = output {
        request = request.with_output(output);
    }

    let pipeline = super::load_pipeline(data, session)?;
    let output = build_and_write(&pipeline, &request, format)?;

    if !quiet {
        println!("Output written to: {}", output.display());
    }
    Ok(())
}

/// Run one request against cleaned ticks and write the result.
///
/// Returns the path written to.
pub(crate) fn build_and_write(
    pipeline: &Pipeline,
    request: &BarRequest,
    format: Format,
) -> Result<PathBuf> {
    let bars = pipeline.run(request).with_context(|| {
        format!(
            "Invalid bar request: interval={} start={} end={}",
            request.interval, request.start, request.end
        )
    })?;

    let output = request.output_path(format.extension());
    write_bars(&bars, &output, format)?;
    Ok(output)
}

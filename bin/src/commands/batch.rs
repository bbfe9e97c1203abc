//! Batch command implementation.
//!
//! Runs many bar requests over one cleaned tick set. Requests share the ticks
//! read-only, so they are built concurrently on the blocking thread pool.

use crate::commands::bars::build_and_write;
use crate::display::{Format, request_progress};
use anyhow::{Context, Result};
use futures::{StreamExt, stream};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tickbar_lib::load_requests;
use tickbar_lib::prelude::*;

/// Concurrency used by the reference run.
const REFERENCE_PARALLELISM: usize = 4;

/// Build bars for every request in a jobs file.
pub(crate) async fn batch(
    data: &Path,
    session: TradingSession,
    jobs: &Path,
    format: Format,
    parallel: usize,
    quiet: bool,
) -> Result<()> {
    let file = File::open(jobs)
        .with_context(|| format!("Failed to open jobs file: {}", jobs.display()))?;
    let requests = load_requests(BufReader::new(file))
        .with_context(|| format!("Invalid jobs file: {}", jobs.display()))?;

    let pipeline = super::load_pipeline(data, session)?;
    let written = run_requests(pipeline, requests, format, parallel, quiet).await?;
    report_written(&written, quiet);
    Ok(())
}

/// Build the standard 1m/2m/1h/3m bars for the 2024-09-16 session.
pub(crate) async fn reference_run(data: &Path, session: TradingSession, quiet: bool) -> Result<()> {
    let pipeline = super::load_pipeline(data, session)?;
    let written = run_requests(
        pipeline,
        reference_requests(),
        Format::Csv,
        REFERENCE_PARALLELISM,
        quiet,
    )
    .await?;
    report_written(&written, quiet);
    Ok(())
}

fn reference_requests() -> Vec<BarRequest> {
    [
        ("1m", "2024-09-16 09:30:00", "2024-09-16 16:00:00"),
        ("2m", "2024-09-16 09:30:00", "2024-09-16 10:00:00"),
        ("1h", "2024-09-16 09:30:00", "2024-09-16 16:00:00"),
        ("3m", "2024-09-16 09:30:00", "2024-09-16 16:00:00"),
    ]
    .into_iter()
    .map(|(interval, start, end)| BarRequest::new(interval, start, end))
    .collect()
}

/// Build and write every request, at most `parallel` at a time.
///
/// Stops at the first failing request. Returns the paths written, in
/// completion order.
pub(crate) async fn run_requests(
    pipeline: Pipeline,
    requests: Vec<BarRequest>,
    format: Format,
    parallel: usize,
    quiet: bool,
) -> Result<Vec<PathBuf>> {
    tracing::info!(requests = requests.len(), parallel, "running bar requests");
    let pipeline = Arc::new(pipeline);
    let progress = request_progress(requests.len(), quiet);

    let mut tasks = stream::iter(requests.into_iter().map(|request| {
        let pipeline = Arc::clone(&pipeline);
        tokio::task::spawn_blocking(move || build_and_write(&pipeline, &request, format))
    }))
    .buffer_unordered(parallel.max(1));

    let mut written = Vec::new();
    while let Some(joined) = tasks.next().await {
        let output = joined.context("Bar request task panicked")??;
        progress.set_message(output.display().to_string());
        progress.inc(1);
        written.push(output);
    }

    progress.finish_with_message(format!("{} files written", written.len()));
    Ok(written)
}

fn report_written(written: &[PathBuf], quiet: bool) {
    if quiet {
        return;
    }
    for output in written {
        println!("Output written to: {}", output.display());
    }
}

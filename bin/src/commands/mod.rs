//! CLI command implementations.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use std::path::Path;
use tickbar_lib::prelude::*;

pub(crate) mod bars;
pub(crate) mod batch;
pub(crate) mod clean;

/// Parse the `--open`/`--close` flags into a trading session.
pub(crate) fn parse_session(open: &str, close: &str) -> Result<TradingSession> {
    let parse = |s: &str| {
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .with_context(|| format!("Invalid session time: {s} (expected HH:MM:SS)"))
    };
    Ok(TradingSession::new(parse(open)?, parse(close)?)?)
}

/// Load and clean every tick file in `data`.
pub(crate) fn load_pipeline(data: &Path, session: TradingSession) -> Result<Pipeline> {
    let records = DirectoryLoader::with_defaults(data)
        .load()
        .with_context(|| format!("Failed to load tick files from {}", data.display()))?;
    Ok(Pipeline::new(&records, &Sanitizer::new(session)))
}

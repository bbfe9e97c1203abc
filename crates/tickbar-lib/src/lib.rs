//! Reproducible OHLCV bar construction from raw tick files.
//!
//! This is a facade crate that re-exports functionality from the tickbar
//! workspace crates and adds the [`Pipeline`] that wires cleaning into
//! aggregation.
//!
//! # Quick Start
//!
//! ```no_run
//! use tickbar_lib::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let records = DirectoryLoader::with_defaults("data").load()?;
//!     let pipeline = Pipeline::new(&records, &Sanitizer::default());
//!
//!     let range = TimeRange::parse("2024-09-16 09:30:00", "2024-09-16 16:00:00")?;
//!     let bars = pipeline.bars(&Interval::parse("5m"), range)?;
//!     println!("{} bars from {} ticks", bars.len(), pipeline.ticks().len());
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod pipeline;

pub use pipeline::{BarRequest, Pipeline, load_requests};

// Re-export core types
pub use tickbar_types::*;

// Re-export cleaning and aggregation
pub use tickbar_aggregate::{Bar, BarAggregator, aggregate};
pub use tickbar_clean::{CleanReport, DropReason, Sanitizer};

// Re-export loading
#[cfg(feature = "load")]
pub use tickbar_load::{DirectoryLoader, LoadError, LoaderConfig, load_file};

// Re-export formatters
#[cfg(feature = "format")]
pub use tickbar_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use tickbar_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickbar_types::{
        Interval, RawRecord, Result, Tick, TickbarError, TimeRange, TradingSession,
    };

    pub use tickbar_aggregate::{Bar, BarAggregator};
    pub use tickbar_clean::{CleanReport, Sanitizer};

    pub use crate::{BarRequest, Pipeline};

    #[cfg(feature = "load")]
    pub use tickbar_load::{DirectoryLoader, LoaderConfig};

    #[cfg(feature = "format")]
    pub use tickbar_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}

//! Tick record sanitization for the tickbar OHLCV bar builder.
//!
//! This crate turns raw, possibly malformed records into a clean tick
//! sequence ready for aggregation:
//!
//! - [`Sanitizer`] - Drops malformed, non-positive, duplicate and
//!   out-of-session records, then orders the survivors by time
//! - [`CleanReport`] - Per-reason counts of dropped records

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod report;
mod sanitizer;

pub use report::{CleanReport, DropReason};
pub use sanitizer::Sanitizer;

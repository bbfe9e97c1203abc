//! OHLCV bar aggregation for the tickbar OHLCV bar builder.
//!
//! This crate provides tick-to-OHLCV (candlestick) aggregation over a fixed
//! interval grid anchored at a caller-chosen start time:
//!
//! - [`Bar`] - OHLCV bar data structure
//! - [`BarAggregator`] - Single-pass bin sweep over sorted ticks
//! - [`aggregate`] - Convenience wrapper for one-off aggregation

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod ohlcv;

pub use aggregator::{BarAggregator, aggregate};
pub use ohlcv::Bar;

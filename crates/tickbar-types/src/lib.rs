//! Core types for the tickbar OHLCV bar builder.
//!
//! This crate provides the fundamental data structures used throughout tickbar:
//!
//! - [`RawRecord`] - Untyped field map as read from a tick file
//! - [`Tick`] - A cleaned trade with timestamp, price and size
//! - [`Interval`] - Compound bar interval such as `1d2h30m`
//! - [`TimeRange`] - Half-open `[start, end)` aggregation window
//! - [`TradingSession`] - Time-of-day window ticks must fall into

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod interval;
mod record;
mod session;
mod tick;
mod time_range;

pub use error::{Result, TickbarError};
pub use interval::Interval;
pub use record::RawRecord;
pub use session::TradingSession;
pub use tick::{TICK_TIMESTAMP_FORMAT, Tick, TickKey, parse_tick_timestamp};
pub use time_range::{BAR_TIMESTAMP_FORMAT, TimeRange, parse_bar_timestamp};

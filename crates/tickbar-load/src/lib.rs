//! Delimited tick file loading for the tickbar OHLCV bar builder.
//!
//! This crate reads per-day tick files into untyped records:
//!
//! - [`DirectoryLoader`] - Reads every matching file in a directory, in
//!   filename order
//! - [`LoaderConfig`] - File extension and delimiter settings
//! - [`load_file`] - Reads a single file

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod loader;

pub use loader::{DirectoryLoader, LoadError, LoaderConfig, load_file};

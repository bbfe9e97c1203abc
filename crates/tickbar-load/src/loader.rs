//! Directory and file loading.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tickbar_types::RawRecord;

/// Errors that can occur while loading tick files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Directory or file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File could not be opened or its header row could not be parsed.
    #[error("Invalid tick file {path}: {source}")]
    Csv {
        /// Path being read.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// File name suffix selecting tick files (default: `.csv`).
    pub extension: String,
    /// Field delimiter (default: comma).
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extension: ".csv".to_string(),
            delimiter: b',',
        }
    }
}

/// Loads raw tick records from a directory of delimited files.
///
/// Files are visited in lexicographic filename order and each must start
/// with a header row naming its columns.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    dir: PathBuf,
    config: LoaderConfig,
}

impl DirectoryLoader {
    /// Creates a loader for `dir` with the given configuration.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    /// Creates a loader for `dir` with default configuration.
    #[must_use]
    pub fn with_defaults(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, LoaderConfig::default())
    }

    /// Returns the directory being loaded.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lists the tick files in the directory, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn files(&self) -> Result<Vec<PathBuf>, LoadError> {
        let io_err = |source| LoadError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(&self.config.extension));
            if matches && entry.file_type().map_err(io_err)?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Loads every record from every tick file, in file then row order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a file cannot be read.
    pub fn load(&self) -> Result<Vec<RawRecord>, LoadError> {
        let files = self.files()?;
        let mut records = Vec::new();

        for path in &files {
            let before = records.len();
            records.extend(read_file(path, self.config.delimiter)?);
            tracing::debug!(path = %path.display(), records = records.len() - before, "loaded tick file");
        }

        tracing::info!(
            dir = %self.dir.display(),
            files = files.len(),
            records = records.len(),
            "loaded tick records"
        );
        Ok(records)
    }
}

/// Loads every record from a single comma-delimited file with a header row.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header is invalid.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, LoadError> {
    read_file(path.as_ref(), LoaderConfig::default().delimiter)
}

/// Reads one file; rows that fail to parse are skipped with a warning.
///
/// Short rows yield records without their trailing fields and surplus cells
/// are ignored.
fn read_file(path: &Path, delimiter: u8) -> Result<Vec<RawRecord>, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        match result {
            Ok(values) => records.push(to_record(&headers, &values)),
            Err(err) => {
                tracing::warn!(path = %path.display(), row, error = %err, "skipping unreadable row");
            }
        }
    }
    Ok(records)
}

fn to_record(headers: &StringRecord, values: &StringRecord) -> RawRecord {
    headers.iter().zip(values.iter()).collect()
}

//! Error types for reading and writing league CSV files.

use std::path::PathBuf;

use fof_common::AtomicWriteError;
use fof_map::MapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed as CSV (bad quoting, invalid UTF-8).
    #[error("malformed row at line {line} of {path}: {message}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Refused to write a file without columns.
    #[error("no headers given for {path}")]
    EmptyHeaders { path: PathBuf },

    #[error("failed to serialize CSV for {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    #[error(transparent)]
    Write(#[from] AtomicWriteError),

    /// A row was read but does not fit the record schema.
    #[error("invalid data in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: MapError,
    },

    #[error("failed to convert records for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: MapError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

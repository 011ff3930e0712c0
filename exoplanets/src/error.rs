//! Error type shared by every module of the crate.

use thiserror::Error;

/// Failures surfaced while querying the archive or touching cache files.
///
/// Nothing in the crate catches or retries these; they reach the caller as-is.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The archive answered but reported a failure (bad table, column or filter)
    #[error("Archive error (status {status}): {message}")]
    Archive { status: u16, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid archive URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid defaults file: {0}")]
    Json(#[from] serde_json::Error),

    /// A table row whose width does not match its header
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

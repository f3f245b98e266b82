//! Error types for table I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Table I/O error type
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem failure (not writable, missing directory, disk full)
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Table could not be encoded as JSON
    #[error("Serialisation error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Input is not a JSON array of `{"date", "rate"}` objects
    #[error("Malformed table JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// A `date` field is not an ISO 8601 date or date-time
    #[error("Invalid date '{value}' in row {row}")]
    InvalidDate {
        /// Zero-based row index
        row: usize,
        /// Offending value
        value: String,
    },

    /// Unknown date format name
    #[error("Unknown date format '{0}'. Valid values: iso-datetime, iso-date")]
    UnknownDateFormat(String),
}

impl IoError {
    /// Create an I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

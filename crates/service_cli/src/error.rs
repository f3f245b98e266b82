//! Error types for the rate-series CLI.

use series_calendar::CalendarError;
use series_core::SeriesError;
use series_io::IoError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Series construction error
    #[error("Series error: {0}")]
    Series(#[from] SeriesError),

    /// File read or write error
    #[error(transparent)]
    Io(#[from] IoError),

    /// Calendar rendering error
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Configuration could not be printed
    #[error("Failed to format configuration: {0}")]
    Format(#[from] toml::ser::Error),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

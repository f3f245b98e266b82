//! Error types for calendar rendering.

use series_io::IoError;
use thiserror::Error;

/// Calendar error type
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Year cannot be represented as a calendar
    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    /// Output could not be written
    #[error(transparent)]
    Io(#[from] IoError),
}

//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `SeriesError`: Errors from rate bounds and table assembly

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use series_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Errors raised while building a rate series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// The lower rate bound must be strictly below the (exclusive) upper bound.
    #[error("Invalid rate bounds: min {min} must be less than max {max}")]
    InvalidBounds {
        /// Inclusive lower bound
        min: i64,
        /// Exclusive upper bound
        max: i64,
    },

    /// Dates and rates could not be paired positionally.
    #[error("Length mismatch: {dates} dates but {rates} rates")]
    LengthMismatch {
        /// Number of dates supplied
        dates: usize,
        /// Number of rates supplied
        rates: usize,
    },

    /// Underlying date error.
    #[error(transparent)]
    Date(#[from] DateError),
}

//! Calendar date type and structured errors.
//!
//! # Re-exports
//!
//! - [`Date`] from `time`
//! - [`DateError`], [`SeriesError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, SeriesError};
pub use time::Date;

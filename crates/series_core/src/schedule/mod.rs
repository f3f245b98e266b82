//! Daily date sequence generation.
//!
//! This module provides:
//! - [`DailyRange`]: An inclusive `[start, end]` range sampled once per day
//! - [`DailyIter`]: Lazy iterator over the dates of a range
//!
//! A range whose start lies after its end is empty rather than an error.
//!
//! # Examples
//!
//! ```
//! use series_core::schedule::DailyRange;
//! use series_core::types::Date;
//!
//! let range = DailyRange::new(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 12, 31).unwrap(),
//! );
//! assert_eq!(range.len(), 366);
//! ```

mod range;

pub use range::{DailyIter, DailyRange};

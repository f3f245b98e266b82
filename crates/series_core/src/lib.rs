//! # series_core: Synthetic Daily Rate Series
//!
//! Foundation crate for generating a synthetic daily series of integer
//! "rates", one per calendar day.
//!
//! ## Modules
//!
//! - [`types`]: `Date` wrapper around `chrono::NaiveDate` and error types
//! - [`schedule`]: Inclusive daily date ranges (`DailyRange`)
//! - [`rng`]: Explicitly passed, optionally seeded random rate generator
//! - [`table`]: `Row` and `Table`, the assembled series
//!
//! ## Usage Examples
//!
//! ```rust
//! use series_core::prelude::*;
//!
//! let range = DailyRange::year(2024).unwrap();
//! let mut rng = RateRng::from_seed(42);
//! let table = Table::generate(&range, &RateBounds::default(), &mut rng);
//!
//! assert_eq!(table.len(), 366);
//! assert!(table.iter().all(|row| (-10..10).contains(&row.rate)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod rng;
pub mod schedule;
pub mod table;
pub mod types;

pub use types::{Date, DateError, SeriesError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::rng::{RateBounds, RateRng};
    pub use crate::schedule::{DailyIter, DailyRange};
    pub use crate::table::{Row, Table};
    pub use crate::types::{Date, DateError, SeriesError};
}

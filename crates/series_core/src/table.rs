//! Row and Table, the assembled rate series.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rng::{RateBounds, RateRng};
use crate::schedule::DailyRange;
use crate::types::{Date, SeriesError};

/// One `(date, rate)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Calendar date
    pub date: Date,
    /// Rate observed on that date
    pub rate: i64,
}

impl Row {
    /// Creates a new row.
    pub fn new(date: Date, rate: i64) -> Self {
        Self { date, rate }
    }
}

/// Ordered sequence of rows.
///
/// Tables built by [`Table::generate`] are in ascending chronological
/// order with exactly one row per day of the range.
///
/// # Examples
///
/// ```
/// use series_core::prelude::*;
///
/// let day = Date::from_ymd(2024, 6, 15).unwrap();
/// let mut rng = RateRng::from_seed(1);
/// let table = Table::generate(&DailyRange::new(day, day), &RateBounds::default(), &mut rng);
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.first_date(), Some(day));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Pairs dates and rates positionally.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::LengthMismatch` if the two sequences differ in length.
    pub fn assemble(dates: Vec<Date>, rates: Vec<i64>) -> Result<Self, SeriesError> {
        if dates.len() != rates.len() {
            return Err(SeriesError::LengthMismatch {
                dates: dates.len(),
                rates: rates.len(),
            });
        }

        let rows = dates
            .into_iter()
            .zip(rates)
            .map(|(date, rate)| Row::new(date, rate))
            .collect();

        Ok(Self { rows })
    }

    /// Generates one rate per day of `range`, drawn from `bounds`.
    ///
    /// An empty range produces an empty table.
    pub fn generate(range: &DailyRange, bounds: &RateBounds, rng: &mut RateRng) -> Self {
        let rows: Vec<Row> = range
            .iter()
            .map(|date| Row::new(date, rng.gen_rate(bounds)))
            .collect();

        debug!(
            start = %range.start(),
            end = %range.end(),
            rows = rows.len(),
            seed = ?rng.seed(),
            "Generated rate table"
        );

        Self { rows }
    }

    /// Wraps existing rows without reordering them.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Returns the date of the first row.
    pub fn first_date(&self) -> Option<Date> {
        self.rows.first().map(|row| row.date)
    }

    /// Returns the date of the last row.
    pub fn last_date(&self) -> Option<Date> {
        self.rows.last().map(|row| row.date)
    }

    /// Returns the dates in row order.
    pub fn dates(&self) -> Vec<Date> {
        self.rows.iter().map(|row| row.date).collect()
    }

    /// Returns whether row `i` is dated exactly `i` days after row 0.
    ///
    /// Empty tables are trivially contiguous.
    pub fn is_contiguous(&self) -> bool {
        let Some(first) = self.first_date() else {
            return true;
        };
        self.rows
            .iter()
            .enumerate()
            .all(|(i, row)| row.date - first == i as i64)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

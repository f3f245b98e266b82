//! DailyRange and DailyIter implementation.

use crate::types::{Date, DateError};
use std::iter::FusedIterator;

/// An inclusive range of calendar dates at daily frequency.
///
/// # Examples
///
/// ```
/// use series_core::schedule::DailyRange;
/// use series_core::types::Date;
///
/// let day = Date::from_ymd(2024, 6, 15).unwrap();
/// let range = DailyRange::new(day, day);
/// assert_eq!(range.dates(), vec![day]);
///
/// // Start after end yields an empty range
/// let reversed = DailyRange::new(
///     Date::from_ymd(2024, 12, 31).unwrap(),
///     Date::from_ymd(2024, 1, 1).unwrap(),
/// );
/// assert!(reversed.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRange {
    start: Date,
    end: Date,
}

impl DailyRange {
    /// Creates a range covering every day from `start` to `end`, both inclusive.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Creates a range covering January 1st to December 31st of `year`.
    pub fn year(year: i32) -> Result<Self, DateError> {
        Ok(Self::new(
            Date::from_ymd(year, 1, 1)?,
            Date::from_ymd(year, 12, 31)?,
        ))
    }

    /// Returns the first date of the range.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last date of the range.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of days in the range.
    #[inline]
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    /// Returns whether the range contains no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Returns whether `date` falls within the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns a lazy iterator over the dates in ascending order.
    pub fn iter(&self) -> DailyIter {
        DailyIter {
            next: Some(self.start),
            remaining: self.len(),
        }
    }

    /// Collects the dates into a vector.
    pub fn dates(&self) -> Vec<Date> {
        self.iter().collect()
    }
}

impl IntoIterator for &DailyRange {
    type Item = Date;
    type IntoIter = DailyIter;

    fn into_iter(self) -> DailyIter {
        self.iter()
    }
}

/// Iterator over the dates of a [`DailyRange`].
#[derive(Debug, Clone)]
pub struct DailyIter {
    next: Option<Date>,
    remaining: usize,
}

impl Iterator for DailyIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = current.succ();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DailyIter {}

impl FusedIterator for DailyIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_year_has_366_days() {
        let range = DailyRange::year(2024).unwrap();
        assert_eq!(range.len(), 366);

        let dates = range.dates();
        assert_eq!(dates.len(), 366);
        assert_eq!(dates[0], date(2024, 1, 1));
        assert_eq!(dates[365], date(2024, 12, 31));
        assert!(dates.contains(&date(2024, 2, 29)));
    }

    #[test]
    fn test_common_year_has_365_days() {
        assert_eq!(DailyRange::year(2023).unwrap().len(), 365);
    }

    #[test]
    fn test_steps_by_one_day() {
        let range = DailyRange::year(2024).unwrap();
        let dates = range.dates();
        for (i, d) in dates.iter().enumerate() {
            assert_eq!(*d - dates[0], i as i64);
        }
    }

    #[test]
    fn test_single_day_range() {
        let day = date(2024, 6, 15);
        let range = DailyRange::new(day, day);
        assert_eq!(range.len(), 1);
        assert_eq!(range.dates(), vec![day]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let range = DailyRange::new(date(2024, 12, 31), date(2024, 1, 1));
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.iter().next(), None);
    }

    #[test]
    fn test_contains() {
        let range = DailyRange::year(2024).unwrap();
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 12, 31)));
        assert!(!range.contains(date(2025, 1, 1)));
    }

    #[test]
    fn test_exact_size_hint() {
        let mut iter = DailyRange::year(2024).unwrap().iter();
        assert_eq!(iter.len(), 366);
        iter.next();
        assert_eq!(iter.len(), 365);
    }

    #[test]
    fn test_range_ending_at_max_date() {
        let max = Date::from(chrono::NaiveDate::MAX);
        let start = Date::from(chrono::NaiveDate::MAX.pred_opt().unwrap());
        let range = DailyRange::new(start, max);
        assert_eq!(range.dates(), vec![start, max]);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (1900i32..2200i32, 1u32..13u32, 1u32..29u32)
                .prop_map(|(year, month, day)| date(year, month, day))
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_len_matches_day_difference(start in date_strategy(), end in date_strategy()) {
                let range = DailyRange::new(start, end);
                let expected = if start > end { 0 } else { (end - start) as usize + 1 };
                prop_assert_eq!(range.len(), expected);
                prop_assert_eq!(range.iter().count(), expected);
            }

            #[test]
            fn test_dates_are_contiguous(start in date_strategy(), span in 0u64..800) {
                let end = start.add_days(span).unwrap();
                let dates = DailyRange::new(start, end).dates();
                prop_assert_eq!(dates.first().copied(), Some(start));
                prop_assert_eq!(dates.last().copied(), Some(end));
                for pair in dates.windows(2) {
                    prop_assert_eq!(pair[1] - pair[0], 1);
                }
            }
        }
    }
}

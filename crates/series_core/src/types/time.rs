//! Calendar date type.
//!
//! This module provides `Date`, a type-safe wrapper around
//! `chrono::NaiveDate`. Dates carry no time-of-day and no timezone.
//!
//! # Examples
//!
//! ```
//! use series_core::types::time::Date;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 12, 31).unwrap();
//!
//! // 2024 is a leap year
//! assert_eq!(end - start, 365);
//! ```

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises transparently as an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use series_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use series_core::types::time::Date;
    ///
    /// // Leap year February 29th
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    ///
    /// // Invalid date returns error
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use series_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.day(), 15);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the zero-based day of the year (0 for January 1st).
    pub fn ordinal0(&self) -> u32 {
        self.0.ordinal0()
    }

    /// Returns the day of the week counted from Sunday (Sunday = 0, Saturday = 6).
    ///
    /// # Examples
    ///
    /// ```
    /// use series_core::types::time::Date;
    ///
    /// // 2024-01-01 was a Monday
    /// assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday_from_sunday(), 1);
    /// ```
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns the following calendar day, or `None` past chrono's maximum date.
    #[inline]
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Date)
    }

    /// Returns the date `days` days later, or `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use series_core::types::time::Date;
    ///
    /// let start = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(start.add_days(1), Some(Date::from_ymd(2024, 2, 29).unwrap()));
    /// ```
    pub fn add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Date)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_rejects_invalid_dates() {
        assert_eq!(
            Date::from_ymd(2024, 13, 1),
            Err(DateError::InvalidDate {
                year: 2024,
                month: 13,
                day: 1
            })
        );
        assert!(Date::from_ymd(2024, 4, 31).is_err());
    }

    #[test]
    fn test_display_is_iso_8601() {
        let date = Date::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
    }

    #[test]
    fn test_parse_rejects_datetime() {
        assert!(Date::parse("2024-01-01T00:00:00.000Z").is_err());
    }

    #[test]
    fn test_sub_days() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 1, 11).unwrap();
        assert_eq!(end - start, 10);
        assert_eq!(start - end, -10);
    }

    #[test]
    fn test_succ_crosses_month_and_leap_day() {
        let feb28 = Date::from_ymd(2024, 2, 28).unwrap();
        let feb29 = feb28.succ().unwrap();
        assert_eq!(feb29, Date::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(feb29.succ().unwrap(), Date::from_ymd(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_succ_at_max_date() {
        let max = Date::from(NaiveDate::MAX);
        assert_eq!(max.succ(), None);
        assert_eq!(max.add_days(1), None);
    }

    #[test]
    fn test_weekday_and_ordinal() {
        // 2024-06-15 was a Saturday, day 167 of the year
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(date.weekday_from_sunday(), 6);
        assert_eq!(date.ordinal0(), 166);
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2024, 1, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-01-01\"");

        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}

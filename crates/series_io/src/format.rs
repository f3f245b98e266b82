//! Date representations for the `date` field.
//!
//! Two ISO 8601 variants are written:
//!
//! | Variant        | Example                      |
//! |----------------|------------------------------|
//! | `iso-datetime` | `2024-01-01T00:00:00.000Z`   |
//! | `iso-date`     | `2024-01-01`                 |
//!
//! `iso-datetime` is the default; dates are midnight UTC. Parsing accepts
//! either variant, with or without fractional seconds or the `Z` suffix,
//! and keeps only the calendar day.
//!
//! Consumers that parse with a strict `%Y-%m-%dT%H:%M:%S.%L` pattern (such
//! as d3's `timeParse`) reject both variants: `iso-datetime` carries a
//! trailing `Z` and `iso-date` has no time part.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use series_core::Date;
use std::fmt;
use std::str::FromStr;

use crate::error::IoError;

/// Output format for the `date` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// Midnight UTC with milliseconds: `YYYY-MM-DDT00:00:00.000Z`
    #[default]
    IsoDatetime,
    /// Calendar date only: `YYYY-MM-DD`
    IsoDate,
}

impl DateFormat {
    /// Returns the configuration name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            DateFormat::IsoDatetime => "iso-datetime",
            DateFormat::IsoDate => "iso-date",
        }
    }

    /// Formats `date` in this representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use series_core::Date;
    /// use series_io::DateFormat;
    ///
    /// let date = Date::from_ymd(2024, 1, 1).unwrap();
    /// assert_eq!(DateFormat::IsoDatetime.format(date), "2024-01-01T00:00:00.000Z");
    /// assert_eq!(DateFormat::IsoDate.format(date), "2024-01-01");
    /// ```
    pub fn format(&self, date: Date) -> String {
        match self {
            DateFormat::IsoDatetime => format!("{}T00:00:00.000Z", date),
            DateFormat::IsoDate => date.to_string(),
        }
    }
}

impl FromStr for DateFormat {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iso-datetime" | "datetime" => Ok(DateFormat::IsoDatetime),
            "iso-date" | "date" => Ok(DateFormat::IsoDate),
            _ => Err(IoError::UnknownDateFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses any supported ISO 8601 date or date-time into a calendar date.
///
/// Returns `None` if `value` matches none of the accepted shapes.
pub fn parse_date(value: &str) -> Option<Date> {
    let value = value.trim();

    if let Ok(date) = Date::parse(value) {
        return Some(date);
    }

    let naive = value.strip_suffix('Z').unwrap_or(value);
    if let Ok(datetime) = naive.parse::<NaiveDateTime>() {
        return Some(Date::from(datetime.date()));
    }

    // Explicit offsets such as +09:00 keep their local calendar day
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| Date::from(datetime.date_naive()))
}

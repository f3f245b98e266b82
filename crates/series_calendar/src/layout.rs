//! Calendar grid layout.
//!
//! Days are placed in columns by week (weeks start on Sunday) and in
//! rows by weekday (Sunday on top). Every day of the year gets a cell,
//! whether or not the table has a rate for it.

use series_core::schedule::DailyRange;
use series_core::table::Table;
use series_core::Date;
use std::collections::HashMap;

use crate::error::CalendarError;

/// Side length of a day cell.
pub const CELL_SIZE: u32 = 15;
/// Gap between adjacent cells.
pub const CELL_PADDING: u32 = 2;
/// Distance between the origins of adjacent cells.
pub const CELL_PITCH: u32 = CELL_SIZE + CELL_PADDING;
/// Left margin reserved for weekday labels.
pub const GRID_OFFSET_X: u32 = 30;
/// Top margin above the grid.
pub const GRID_OFFSET_Y: u32 = 20;
/// Week columns the canvas is sized for.
pub const WEEK_COLUMNS: u32 = 53;

/// One day of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Calendar date
    pub date: Date,
    /// Week column: Sunday-start week boundaries crossed since January 1st
    pub week: u32,
    /// Weekday row, Sunday = 0
    pub weekday: u32,
    /// Rate for this date, if the table has one
    pub rate: Option<i64>,
}

impl DayCell {
    /// Left edge of the cell.
    pub fn x(&self) -> u32 {
        self.week * CELL_PITCH + GRID_OFFSET_X
    }

    /// Top edge of the cell.
    pub fn y(&self) -> u32 {
        self.weekday * CELL_PITCH + GRID_OFFSET_Y
    }
}

/// Cells for every day of one year.
///
/// # Examples
///
/// ```
/// use series_calendar::CalendarLayout;
/// use series_core::prelude::*;
///
/// let table = Table::generate(&DailyRange::year(2024).unwrap(), &RateBounds::default(), &mut RateRng::from_seed(1));
/// let layout = CalendarLayout::for_year(2024, &table).unwrap();
///
/// assert_eq!(layout.cells().len(), 366);
/// assert_eq!(layout.filled(), 366);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLayout {
    year: i32,
    cells: Vec<DayCell>,
}

impl CalendarLayout {
    /// Lays out `year`, taking rates from `table`.
    ///
    /// Rows dated outside `year` are ignored. If a date appears more than
    /// once the last row wins.
    pub fn for_year(year: i32, table: &Table) -> Result<Self, CalendarError> {
        let range = DailyRange::year(year).map_err(|_| CalendarError::InvalidYear(year))?;

        let rates: HashMap<Date, i64> = table
            .iter()
            .filter(|row| range.contains(row.date))
            .map(|row| (row.date, row.rate))
            .collect();

        let first_weekday = range.start().weekday_from_sunday();
        let cells = range
            .iter()
            .map(|date| DayCell {
                date,
                week: (date.ordinal0() + first_weekday) / 7,
                weekday: date.weekday_from_sunday(),
                rate: rates.get(&date).copied(),
            })
            .collect();

        Ok(Self { year, cells })
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Cells in date order.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Number of cells with a rate.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.rate.is_some()).count()
    }

    /// Highest week column used.
    pub fn last_week(&self) -> u32 {
        self.cells.iter().map(|cell| cell.week).max().unwrap_or(0)
    }

    /// Canvas width.
    pub fn width(&self) -> u32 {
        WEEK_COLUMNS * CELL_PITCH + 50
    }

    /// Canvas height.
    pub fn height(&self) -> u32 {
        7 * CELL_PITCH + 70
    }
}

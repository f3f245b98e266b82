//! Render command implementation
//!
//! Draws a table file as an SVG heat map calendar.

use series_calendar::{write_svg, CalendarLayout};
use series_io::{read_table, WriteSummary};
use std::path::Path;
use tracing::{info, warn};

use crate::{CliError, Result};

/// Run the render command
///
/// When `year` is not given, the year of the first row is used.
pub fn run(input: &Path, output: &Path, year: Option<i32>) -> Result<WriteSummary> {
    info!(input = %input.display(), "Rendering calendar");

    let table = read_table(input)?;
    let year = match year {
        Some(year) => year,
        None => table.first_date().map(|date| date.year()).ok_or_else(|| {
            CliError::invalid_argument(format!(
                "{} has no rows; pass --year to render an empty calendar",
                input.display()
            ))
        })?,
    };

    let layout = CalendarLayout::for_year(year, &table)?;
    if layout.filled() < table.len() {
        warn!(
            year,
            rows = table.len(),
            drawn = layout.filled(),
            "Some rows fall outside the calendar year or repeat a date"
        );
    }

    Ok(write_svg(&layout, output)?)
}

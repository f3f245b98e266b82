//! SVG rendering of a calendar layout.

use series_io::{FileGenerator, IoError, WriteSummary};
use std::path::Path;
use tracing::info;

use crate::color::ColorScale;
use crate::error::CalendarError;
use crate::layout::{CalendarLayout, DayCell, CELL_PITCH, CELL_SIZE};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const LEGEND_WIDTH: u32 = 300;
const LEGEND_HEIGHT: u32 = 10;
const LEGEND_TICKS: usize = 5;
const CELL_RADIUS: u32 = 20;

/// Renders `layout` as a standalone SVG document.
///
/// # Examples
///
/// ```
/// use series_calendar::{render_svg, CalendarLayout};
/// use series_core::table::Table;
///
/// let layout = CalendarLayout::for_year(2024, &Table::default()).unwrap();
/// let svg = render_svg(&layout);
/// assert!(svg.starts_with("<svg"));
/// assert_eq!(svg.matches("class=\"day-rect\"").count(), 366);
/// ```
pub fn render_svg(layout: &CalendarLayout) -> String {
    let scale = ColorScale::default();
    let width = layout.width();
    let height = layout.height();

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        width, height
    );

    svg.push_str(&gradient_defs(&scale));

    for cell in layout.cells() {
        svg.push_str(&day_rect(cell, &scale));
    }

    for (i, name) in DAY_NAMES.iter().enumerate() {
        svg.push_str(&format!(
            "<text x=\"0\" y=\"{}\" text-anchor=\"start\" alignment-baseline=\"middle\" font-size=\"10\">{}</text>\n",
            i as u32 * CELL_PITCH + 32,
            name
        ));
    }

    svg.push_str(&legend(&scale, height));
    svg.push_str("</svg>\n");
    svg
}

fn day_rect(cell: &DayCell, scale: &ColorScale) -> String {
    let rate = cell
        .rate
        .map(|rate| rate.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "<rect class=\"day-rect\" width=\"{size}\" height=\"{size}\" rx=\"{r}\" ry=\"{r}\" x=\"{x}\" y=\"{y}\" fill=\"{fill}\"><title>Date: {year:04}/{month:02}/{day:02}\nRate: {rate}</title></rect>\n",
        size = CELL_SIZE,
        r = CELL_RADIUS,
        x = cell.x(),
        y = cell.y(),
        fill = scale.fill(cell.rate),
        year = cell.date.year(),
        month = cell.date.month(),
        day = cell.date.day(),
        rate = rate,
    )
}

fn gradient_defs(scale: &ColorScale) -> String {
    let mid = (scale.lo() + scale.hi()) / 2.0;
    format!(
        "<defs><linearGradient id=\"legend-gradient\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">\
<stop offset=\"0%\" stop-color=\"{}\"/>\
<stop offset=\"50%\" stop-color=\"{}\"/>\
<stop offset=\"100%\" stop-color=\"{}\"/>\
</linearGradient></defs>\n",
        scale.color(scale.lo()),
        scale.color(mid),
        scale.color(scale.hi())
    )
}

fn legend(scale: &ColorScale, height: u32) -> String {
    let span = scale.hi() - scale.lo();
    let mut out = format!(
        "<g transform=\"translate(30, {})\">\n<rect width=\"{}\" height=\"{}\" style=\"fill: url(#legend-gradient)\"/>\n",
        height - 40,
        LEGEND_WIDTH,
        LEGEND_HEIGHT
    );

    out.push_str(&format!(
        "<g transform=\"translate(0, {})\" font-size=\"10\" text-anchor=\"middle\">\n<path d=\"M0,6V0H{}V6\" fill=\"none\" stroke=\"currentColor\"/>\n",
        LEGEND_HEIGHT, LEGEND_WIDTH
    ));

    for tick in scale.ticks(LEGEND_TICKS) {
        let x = if span == 0.0 {
            0.0
        } else {
            (tick - scale.lo()) / span * LEGEND_WIDTH as f64
        };
        out.push_str(&format!(
            "<line x1=\"{x}\" x2=\"{x}\" y1=\"0\" y2=\"6\" stroke=\"currentColor\"/><text x=\"{x}\" y=\"9\" dy=\"0.71em\" alignment-baseline=\"middle\">{label}</text>\n",
            x = x,
            label = tick.round() as i64
        ));
    }

    out.push_str("</g>\n</g>\n");
    out
}

/// A calendar layout ready to be written as SVG.
pub struct SvgCalendar<'a> {
    layout: &'a CalendarLayout,
}

impl<'a> SvgCalendar<'a> {
    /// Wrap a layout
    pub fn new(layout: &'a CalendarLayout) -> Self {
        Self { layout }
    }
}

impl FileGenerator for SvgCalendar<'_> {
    fn generate(&self) -> Result<Vec<u8>, IoError> {
        Ok(render_svg(self.layout).into_bytes())
    }
}

/// Renders `layout` and writes it to `path` atomically.
pub fn write_svg(layout: &CalendarLayout, path: impl AsRef<Path>) -> Result<WriteSummary, CalendarError> {
    let path = path.as_ref();
    let summary = SvgCalendar::new(layout).write_to_file(path)?;

    info!(
        path = %path.display(),
        year = layout.year(),
        filled = layout.filled(),
        weeks = layout.last_week() + 1,
        bytes = summary.bytes,
        "Calendar written to file"
    );

    Ok(summary)
}

//! # series_calendar: Calendar Heat Map
//!
//! Lays out one year of a rate table as a GitHub-style calendar (one
//! column per week, one row per weekday) and renders it as a standalone
//! SVG document.
//!
//! ## Modules
//!
//! - [`layout`]: `CalendarLayout`, `DayCell` and grid geometry
//! - [`color`]: Diverging red-yellow-green `ColorScale`
//! - [`svg`]: `render_svg`, `SvgCalendar`, `write_svg`

pub mod color;
pub mod error;
pub mod layout;
pub mod svg;

pub use color::{ColorScale, Rgb};
pub use error::CalendarError;
pub use layout::{CalendarLayout, DayCell};
pub use svg::{render_svg, write_svg, SvgCalendar};

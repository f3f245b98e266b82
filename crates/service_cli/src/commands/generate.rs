//! Generate command implementation
//!
//! Builds the daily rate table described by the configuration and writes
//! it to the configured output file.

use series_core::prelude::*;
use series_io::{write_table, WriteSummary};
use tracing::{info, warn};

use crate::config::SeriesConfig;
use crate::Result;

/// Run the generate command
pub fn run(config: &SeriesConfig) -> Result<WriteSummary> {
    let range = config.range();
    let bounds = config.bounds()?;
    let mut rng = RateRng::new(config.seed);

    if range.is_empty() {
        warn!(
            start = %config.start,
            end = %config.end,
            "Start date is after end date, writing an empty table"
        );
    }

    info!(
        start = %range.start(),
        end = %range.end(),
        days = range.len(),
        rate_min = bounds.min(),
        rate_max = bounds.max(),
        seed = ?rng.seed(),
        "Generating rate series"
    );

    let table = Table::generate(&range, &bounds, &mut rng);
    let summary = write_table(&table, &config.output, &config.write_options())?;

    info!("Generation complete");
    Ok(summary)
}

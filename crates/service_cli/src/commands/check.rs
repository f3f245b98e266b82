//! Check command implementation
//!
//! Prints the effective configuration after all sources are merged.

use crate::config::SeriesConfig;
use crate::Result;

/// Render the effective configuration as TOML
pub fn effective_config(config: &SeriesConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Run the check command
pub fn run(config: &SeriesConfig) -> Result<()> {
    print!("{}", effective_config(config)?);
    Ok(())
}

//! rate-series - daily random rate series generator
//!
//! Produces one row per calendar day between a start and an end date,
//! each carrying a random integer rate, and writes the table as a JSON
//! array of `{"date", "rate"}` objects.
//!
//! # Commands
//!
//! - `rate-series` / `rate-series generate` - Write the rate table (default `data.json`)
//! - `rate-series render` - Draw a table file as an SVG heat map calendar
//! - `rate-series check` - Print the effective configuration
//!
//! Settings come from CLI arguments, `RATE_SERIES_*` environment
//! variables, and `rate-series.toml`, in that order of priority.

use clap::{Args, Parser, Subcommand};
use series_core::Date;
use series_io::DateFormat;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;

use config::{build_config, resolve_log_level, CliOverrides, LogLevel, SeriesConfig, MAX_SEED};
pub use error::{CliError, Result};

/// Daily random rate series generator
#[derive(Parser)]
#[command(name = "rate-series")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./rate-series.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the rate table (default when no command is given)
    Generate(GenerateArgs),

    /// Render a table file as an SVG calendar
    Render(RenderArgs),

    /// Print the effective configuration
    Check,
}

#[derive(Args, Debug, Clone, Default)]
struct GenerateArgs {
    /// First date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    start: Option<Date>,

    /// Last date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    end: Option<Date>,

    /// Generate every day of this year
    #[arg(long, conflicts_with_all = ["start", "end"])]
    year: Option<i32>,

    /// RNG seed for reproducible output
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_SEED))]
    seed: Option<u64>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Date representation (iso-datetime, iso-date)
    #[arg(long)]
    date_format: Option<DateFormat>,

    /// Pretty-print the JSON output (`--pretty=false` to turn off)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pretty: Option<bool>,
}

impl GenerateArgs {
    fn overrides(&self, verbose: bool) -> CliOverrides {
        CliOverrides {
            start: self.start,
            end: self.end,
            year: self.year,
            seed: self.seed,
            output: self.output.clone(),
            date_format: self.date_format,
            pretty: self.pretty,
            verbose,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    /// Table file to read
    #[arg(short, long, default_value = "data.json")]
    input: PathBuf,

    /// SVG file to write
    #[arg(short, long, default_value = "calendar.svg")]
    output: PathBuf,

    /// Calendar year (defaults to the year of the first row)
    #[arg(long)]
    year: Option<i32>,
}

fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Build the full configuration, then start logging at its level
fn load_config(config_file: Option<&Path>, overrides: &CliOverrides) -> Result<SeriesConfig> {
    let config = build_config(config_file, overrides)?;
    init_tracing(config.log_level);
    debug!(?config, "Configuration loaded");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_file = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Generate(cli.generate)) {
        Commands::Generate(args) => {
            let config = load_config(config_file, &args.overrides(cli.verbose))?;
            commands::generate::run(&config)?;
        }
        Commands::Render(args) => {
            init_tracing(resolve_log_level(config_file, cli.verbose));
            commands::render::run(&args.input, &args.output, args.year)?;
        }
        Commands::Check => {
            let overrides = CliOverrides {
                verbose: cli.verbose,
                ..Default::default()
            };
            let config = load_config(config_file, &overrides)?;
            commands::check::run(&config)?;
        }
    }

    Ok(())
}

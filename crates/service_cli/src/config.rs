//! Configuration management
//!
//! Handles loading configuration from TOML files, environment variables,
//! and CLI arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`RATE_SERIES_*`)
//! 3. Config file (`--config`, or `rate-series.toml` when present)
//! 4. Default values

use serde::{Deserialize, Serialize};
use series_core::rng::{RateBounds, DEFAULT_RATE_MAX, DEFAULT_RATE_MIN};
use series_core::schedule::DailyRange;
use series_core::{Date, SeriesError};
use series_io::{DateFormat, WriteOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file loaded from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rate-series.toml";

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "data.json";

/// Prefix shared by all environment overrides.
pub const ENV_PREFIX: &str = "RATE_SERIES_";

/// Largest accepted seed. TOML integers are signed 64-bit, so larger
/// seeds could not be written back to a config file.
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable {name}: {message}")]
    EnvError { name: String, message: String },

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Rate series configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    /// First date of the series (inclusive)
    pub start: Date,
    /// Last date of the series (inclusive)
    pub end: Date,
    /// Inclusive lower rate bound
    pub rate_min: i64,
    /// Exclusive upper rate bound
    pub rate_max: i64,
    /// RNG seed; unseeded runs are not reproducible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Output file path
    pub output: PathBuf,
    /// Representation of the `date` field
    pub date_format: DateFormat,
    /// Pretty-print the JSON output
    pub pretty: bool,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

/// Year covered when no dates are configured.
pub const DEFAULT_YEAR: i32 = 2024;

impl Default for SeriesConfig {
    fn default() -> Self {
        let range = DailyRange::year(DEFAULT_YEAR).expect("DEFAULT_YEAR is a valid calendar year");
        Self {
            start: range.start(),
            end: range.end(),
            rate_min: DEFAULT_RATE_MIN,
            rate_max: DEFAULT_RATE_MAX,
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            date_format: DateFormat::default(),
            pretty: false,
            log_level: LogLevel::Info,
        }
    }
}

impl SeriesConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ConfigError::FileError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.apply_env(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`, keyed by full variable name
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            let name = format!("{}{}", ENV_PREFIX, key);
            lookup(&name).map(|value| (name, value))
        };

        if let Some((name, value)) = var("START") {
            self.start = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("END") {
            self.end = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("RATE_MIN") {
            self.rate_min = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("RATE_MAX") {
            self.rate_max = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("SEED") {
            self.seed = Some(parse_env(&name, &value)?);
        }
        if let Some((_, value)) = var("OUTPUT") {
            self.output = PathBuf::from(value);
        }
        if let Some((name, value)) = var("DATE_FORMAT") {
            self.date_format = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("PRETTY") {
            self.pretty = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::EnvError {
                        name,
                        message: format!("expected true or false, got '{}'", value),
                    })
                }
            };
        }
        if let Some((name, value)) = var("LOG_LEVEL") {
            self.log_level = parse_env(&name, &value)?;
        }

        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(year) = cli.year {
            let range = DailyRange::year(year)
                .map_err(|e| ConfigError::Validation(vec![format!("--year {}: {}", year, e)]))?;
            self.start = range.start();
            self.end = range.end();
        }
        if let Some(start) = cli.start {
            self.start = start;
        }
        if let Some(end) = cli.end {
            self.end = end;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if let Some(date_format) = cli.date_format {
            self.date_format = date_format;
        }
        if let Some(pretty) = cli.pretty {
            self.pretty = pretty;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.rate_min >= self.rate_max {
            errors.push(format!(
                "rate_min ({}) must be less than rate_max ({})",
                self.rate_min, self.rate_max
            ));
        }

        if let Some(seed) = self.seed.filter(|&seed| seed > MAX_SEED) {
            errors.push(format!("seed ({}) must not exceed {}", seed, MAX_SEED));
        }

        if self.output.as_os_str().is_empty() {
            errors.push("output cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Date range to generate; empty when `start` is after `end`
    pub fn range(&self) -> DailyRange {
        DailyRange::new(self.start, self.end)
    }

    /// Rate bounds
    pub fn bounds(&self) -> Result<RateBounds, SeriesError> {
        RateBounds::new(self.rate_min, self.rate_max)
    }

    /// JSON output options
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions::default()
            .with_date_format(self.date_format)
            .with_pretty(self.pretty)
    }
}

fn parse_env<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::EnvError {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub start: Option<Date>,
    pub end: Option<Date>,
    pub year: Option<i32>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub date_format: Option<DateFormat>,
    pub pretty: Option<bool>,
    pub verbose: bool,
}

/// Build configuration from all sources
pub fn build_config(
    config_file: Option<&Path>,
    cli: &CliOverrides,
) -> Result<SeriesConfig, ConfigError> {
    let mut config = load_file(config_file)?.with_env_override()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

/// Log level for commands that use no series settings.
///
/// Sources that fail to load or parse are skipped, so a bad series value
/// never blocks such a command.
pub fn resolve_log_level(config_file: Option<&Path>, verbose: bool) -> LogLevel {
    log_level_from(config_file, verbose, |name| std::env::var(name).ok())
}

fn log_level_from<F>(config_file: Option<&Path>, verbose: bool, lookup: F) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    if verbose {
        return LogLevel::Debug;
    }

    lookup(&format!("{}LOG_LEVEL", ENV_PREFIX))
        .and_then(|value| value.trim().parse().ok())
        .or_else(|| load_file(config_file).ok().map(|config| config.log_level))
        .unwrap_or_default()
}

/// Explicit config file, else `rate-series.toml` when present, else defaults
fn load_file(config_file: Option<&Path>) -> Result<SeriesConfig, ConfigError> {
    match config_file {
        Some(path) => SeriesConfig::from_file(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                SeriesConfig::from_file(default_path)
            } else {
                Ok(SeriesConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SeriesConfig::default();
        assert_eq!(config.start, date(2024, 1, 1));
        assert_eq!(config.end, date(2024, 12, 31));
        assert_eq!(config.rate_min, -10);
        assert_eq!(config.rate_max, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.output, PathBuf::from("data.json"));
        assert_eq!(config.date_format, DateFormat::IsoDatetime);
        assert!(!config.pretty);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.range().len(), 366);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_toml_partial_config() {
        let config: SeriesConfig = toml::from_str(
            r#"
            start = "2024-06-01"
            seed = 42
            date_format = "iso-date"
            log_level = "WARN"
            "#,
        )
        .unwrap();

        assert_eq!(config.start, date(2024, 6, 1));
        assert_eq!(config.end, date(2024, 12, 31));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.date_format, DateFormat::IsoDate);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        let result: Result<SeriesConfig, _> = toml::from_str("frequency = \"weekly\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SeriesConfig::default();
        config.seed = Some(7);
        let text = toml::to_string_pretty(&config).unwrap();
        let back: SeriesConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rate-series.toml");
        std::fs::write(&path, "rate_min = 0\nrate_max = 5\n").unwrap();

        let config = SeriesConfig::from_file(&path).unwrap();
        assert_eq!((config.rate_min, config.rate_max), (0, 5));

        let missing = SeriesConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_env_override() {
        let config = SeriesConfig::default()
            .apply_env(env(&[
                ("RATE_SERIES_START", "2024-03-01"),
                ("RATE_SERIES_END", "2024-03-31"),
                ("RATE_SERIES_SEED", "99"),
                ("RATE_SERIES_OUTPUT", "out/march.json"),
                ("RATE_SERIES_DATE_FORMAT", "iso-date"),
                ("RATE_SERIES_PRETTY", "true"),
                ("RATE_SERIES_LOG_LEVEL", "error"),
            ]))
            .unwrap();

        assert_eq!(config.range().len(), 31);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.output, PathBuf::from("out/march.json"));
        assert_eq!(config.date_format, DateFormat::IsoDate);
        assert!(config.pretty);
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_env_override_invalid_value() {
        let result = SeriesConfig::default().apply_env(env(&[("RATE_SERIES_SEED", "-1")]));
        match result {
            Err(ConfigError::EnvError { name, .. }) => assert_eq!(name, "RATE_SERIES_SEED"),
            other => panic!("Expected env error, got {:?}", other),
        }

        let result = SeriesConfig::default().apply_env(env(&[("RATE_SERIES_PRETTY", "maybe")]));
        assert!(matches!(result, Err(ConfigError::EnvError { .. })));
    }

    #[test]
    fn test_cli_precedence() {
        let mut config = SeriesConfig::default()
            .apply_env(env(&[("RATE_SERIES_SEED", "1")]))
            .unwrap();

        config
            .merge_with_cli(&CliOverrides {
                seed: Some(2),
                year: Some(2023),
                verbose: true,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(config.seed, Some(2));
        assert_eq!(config.start, date(2023, 1, 1));
        assert_eq!(config.end, date(2023, 12, 31));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_start_end_override_year() {
        let mut config = SeriesConfig::default();
        config
            .merge_with_cli(&CliOverrides {
                start: Some(date(2024, 6, 15)),
                end: Some(date(2024, 6, 15)),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.range().len(), 1);
    }

    #[test]
    fn test_reversed_dates_are_valid() {
        let mut config = SeriesConfig::default();
        config.start = date(2024, 12, 31);
        config.end = date(2024, 1, 1);
        assert!(config.validate().is_ok());
        assert!(config.range().is_empty());
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = SeriesConfig::default();
        config.rate_min = 10;
        config.rate_max = -10;
        config.output = PathBuf::new();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("rate_min"));
                assert!(errors[1].contains("output"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_can_turn_pretty_off() {
        let mut config = SeriesConfig::default()
            .apply_env(env(&[("RATE_SERIES_PRETTY", "true")]))
            .unwrap();
        assert!(config.pretty);

        config.merge_with_cli(&CliOverrides::default()).unwrap();
        assert!(config.pretty);

        config
            .merge_with_cli(&CliOverrides {
                pretty: Some(false),
                ..Default::default()
            })
            .unwrap();
        assert!(!config.pretty);
    }

    #[test]
    fn test_seed_must_fit_toml_integer() {
        let seed = u64::MAX.to_string();
        let mut config = SeriesConfig::default()
            .apply_env(env(&[("RATE_SERIES_SEED", seed.as_str())]))
            .unwrap();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("seed"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }

        config.seed = Some(MAX_SEED);
        assert!(config.validate().is_ok());
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains(&format!("seed = {}", MAX_SEED)));
    }

    #[test]
    fn test_log_level_ignores_broken_sources() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "seed = \"not a number\"\n").unwrap();
        let lookup = env(&[("RATE_SERIES_SEED", "abc")]);

        assert_eq!(log_level_from(Some(&broken), false, &lookup), LogLevel::Info);
        assert_eq!(log_level_from(Some(&broken), true, &lookup), LogLevel::Debug);
        assert_eq!(
            log_level_from(Some(&dir.path().join("absent.toml")), false, &lookup),
            LogLevel::Info
        );
    }

    #[test]
    fn test_log_level_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rate-series.toml");
        std::fs::write(&path, "log_level = \"warn\"\nseed = 3\n").unwrap();

        assert_eq!(log_level_from(Some(&path), false, env(&[])), LogLevel::Warn);
        assert_eq!(
            log_level_from(
                Some(&path),
                false,
                env(&[("RATE_SERIES_LOG_LEVEL", "error")])
            ),
            LogLevel::Error
        );
        assert_eq!(
            log_level_from(
                Some(&path),
                false,
                env(&[("RATE_SERIES_LOG_LEVEL", "loud")])
            ),
            LogLevel::Warn
        );
    }

    #[test]
    fn test_bounds_and_write_options() {
        let mut config = SeriesConfig::default();
        config.date_format = DateFormat::IsoDate;
        config.pretty = true;

        assert_eq!(config.bounds().unwrap(), RateBounds::default());
        assert_eq!(
            config.write_options(),
            WriteOptions {
                date_format: DateFormat::IsoDate,
                pretty: true
            }
        );
    }
}

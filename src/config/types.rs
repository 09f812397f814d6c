//! Configuration types: CLI options and environment-backed settings.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    ENV_CC_ADDRESSES, ENV_DATABASE_URL, ENV_FROM_ADDRESS, ENV_SMTP_RELAY, ENV_TO_ADDRESS,
    TARGET_TABLE,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines with timestamps (default)
    Plain,
    /// Structured JSON lines for machine parsing
    Json,
}

/// Command-line options for the pipeline binary.
#[derive(Parser, Debug)]
#[command(
    name = "ingest_pipeline",
    about = "Periodic data-ingestion job: collect, batch-insert, report"
)]
pub struct Opt {
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Directory where daily log files are written
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Table that collected records are inserted into
    #[arg(long, default_value = TARGET_TABLE)]
    pub table: String,
}

/// Runtime settings resolved once at process start from the environment.
///
/// Constructed with [`Settings::from_env`] and passed by reference to every
/// component that needs it. There is no ambient global lookup; credentials
/// and endpoints for source-specific collection belong here as well.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Database connection URI.
    pub database_url: String,
    /// Primary recipient of the status report.
    pub to_address: String,
    /// CC recipients of the status report (may be empty).
    pub cc_addresses: Vec<String>,
    /// Sender mailbox for the status report.
    pub from_address: String,
    /// SMTP relay host used to send the report.
    pub smtp_relay: String,
}

impl Settings {
    /// Loads settings from the environment.
    ///
    /// `CC_ADDRESS` is optional; every other variable must be present and
    /// non-empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Settings {
            database_url: require(ENV_DATABASE_URL)?,
            to_address: require(ENV_TO_ADDRESS)?,
            cc_addresses: split_addresses(
                &std::env::var(ENV_CC_ADDRESSES).unwrap_or_default(),
            ),
            from_address: require(ENV_FROM_ADDRESS)?,
            smtp_relay: require(ENV_SMTP_RELAY)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Splits a comma-separated address list, trimming whitespace and dropping
/// empty entries.
pub fn split_addresses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

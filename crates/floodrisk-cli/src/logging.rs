//! Logging setup and the tracing-backed estimate observer.

use crate::error::{CliError, Result};
use floodrisk_domain::{Adjustment, EstimateObserver};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

/// Log verbosity.
///
/// Parses from a name or from the classic numeric levels
/// (0 = everything, 10 = debug, 20 = info, 30 = warn, 40 = error, 50 = critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Progress information
    Info,
    /// Intermediate values
    Debug,
    /// Everything
    Trace,
}

/// Unrecognised log level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid log level '{0}'; expected off, error, warn, info, debug, trace or 0, 10, 20, 30, 40, 50")]
pub struct ParseLogLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" | "critical" | "40" | "50" => Ok(LogLevel::Error),
            "warn" | "warning" | "30" => Ok(LogLevel::Warn),
            "info" | "20" => Ok(LogLevel::Info),
            "debug" | "10" => Ok(LogLevel::Debug),
            "trace" | "0" => Ok(LogLevel::Trace),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ParseLogLevelError;

    fn try_from(value: String) -> std::result::Result<Self, ParseLogLevelError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(name)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Install the global subscriber.
///
/// With a `log_file` the file is created if needed and appended to;
/// otherwise logs go to stderr so stdout stays clean for results.
pub fn init_logging(level: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(level))
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| CliError::Config(format!("Failed to initialise logging: {}", e)))
}

/// Reports each estimation step as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl EstimateObserver for TracingObserver {
    fn mean_computed(&self, readings: usize, adjustment: Adjustment, mean: f64) {
        debug!(readings, %adjustment, mean, "Mean depth computed");
    }

    fn damage_looked_up(&self, mean: f64, bucket: u32, cost: u64) {
        info!(mean, bucket, cost, "Damage cost looked up");
    }
}

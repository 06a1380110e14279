//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input file missing
    #[error("File doesn't exist: {}. Please check the filepath.", .0.display())]
    FileNotFound(PathBuf),

    /// Input file is not a csv
    #[error("File is not a csv: {}. Please provide a comma separated file.", .0.display())]
    NotCsv(PathBuf),

    /// Estimation failed
    #[error("Estimation error: {0}")]
    Risk(#[from] floodrisk_domain::RiskError),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

//! CLI command definitions and argument parsing.

use crate::logging::LogLevel;
use clap::{Parser, Subcommand};
use floodrisk_domain::Adjustment;
use std::path::PathBuf;

/// Floodrisk - Estimate expected flood damage for a postcode area.
#[derive(Debug, Parser)]
#[command(name = "floodrisk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace or 0/10/20/30/40/50)
    #[arg(short, long, global = true, env = "FLOODRISK_LOG")]
    pub log_level: Option<LogLevel>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (amounts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate the expected damage cost from a csv of depths
    Estimate(EstimateArgs),

    /// Print the damage table
    Table,
}

/// Arguments for the estimate command.
#[derive(Debug, Parser)]
pub struct EstimateArgs {
    /// CSV file of depths in metres, with a header row
    #[arg(short, long)]
    pub file: PathBuf,

    /// Number of non-inundated properties not included in the file
    #[arg(short, long, conflicts_with = "percent_inundated")]
    pub non_inundated_count: Option<u64>,

    /// Percent of the area inundated, greater than 0 and at most 100
    #[arg(short, long)]
    pub percent_inundated: Option<f64>,
}

impl EstimateArgs {
    /// The adjustment selected on the command line.
    pub fn adjustment(&self) -> Adjustment {
        match (self.percent_inundated, self.non_inundated_count) {
            (Some(value), _) => Adjustment::percentage(value),
            (None, Some(count)) => Adjustment::padding(count),
            (None, None) => Adjustment::NONE,
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

//! Floodrisk CLI library.
//!
//! Glue around `floodrisk-domain`: argument parsing, configuration, logging
//! setup, CSV input guards and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

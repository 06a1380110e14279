//! Floodrisk CLI - expected flood damage for a postcode area.

use clap::Parser;
use floodrisk_cli::commands;
use floodrisk_cli::logging;
use floodrisk_cli::{Cli, Command, Config, Formatter};
use std::io::IsTerminal;

fn main() {
    let cli = Cli::parse();
    let no_color = cli.no_color;

    if let Err(e) = run(cli) {
        let formatter = Formatter::for_errors(no_color, std::io::stderr().is_terminal());
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> floodrisk_cli::Result<()> {
    // Load config, explicit path first
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Flags override config
    let level = cli.log_level.unwrap_or(config.settings.log_level);
    let log_file = cli.log_file.as_deref().or(config.settings.log_file.as_deref());
    logging::init_logging(level, log_file)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter =
        Formatter::new(format, color_enabled).with_currency(&config.settings.currency_symbol);

    match cli.command {
        Command::Estimate(args) => commands::execute_estimate(args, &formatter)?,
        Command::Table => commands::execute_table(&formatter)?,
    }

    Ok(())
}

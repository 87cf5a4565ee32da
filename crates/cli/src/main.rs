//! keymint CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod args;
mod commands;
mod config;

use args::{Cli, Commands};
use crate::config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Flag wins over the config file; a broken config is reported by the command itself
    let log_level = cli.log_level.clone().unwrap_or_else(|| {
        AppConfig::load(cli.config.as_deref())
            .map(|c| c.general.log_level)
            .unwrap_or_else(|_| "info".to_string())
    });
    init_logging(&log_level)?;

    match cli.command {
        Commands::Key(args) => commands::key::execute(args, cli.config),
        Commands::Meta(args) => commands::meta::execute(args, cli.config),
        Commands::Mint(args) => commands::mint::execute(args, cli.config),
        Commands::Config(args) => commands::config::execute(args, cli.config),
        Commands::Doctor(args) => commands::doctor::execute(args, cli.config),
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

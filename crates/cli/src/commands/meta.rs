//! Meta command - build metadata records

use anyhow::{Context, Result};
use keymint_domain::usecases::MetadataFactory;
use std::path::PathBuf;

use super::{build_clock, resolve_theme};
use crate::args::{MetaArgs, MetaCommands};
use crate::config::AppConfig;

pub fn execute(args: MetaArgs, config_path: Option<PathBuf>) -> Result<()> {
    match args.command {
        MetaCommands::Create { hashed_key, theme } => create(hashed_key, theme, config_path),
    }
}

fn create(hashed_key: String, theme: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let clock = build_clock(&config)?;
    let theme = resolve_theme(theme, &config);

    let record = MetadataFactory::new(clock)
        .create_metadata(&hashed_key, &theme)
        .context("Failed to create metadata record")?;

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}

//! Mint command - end-to-end identifier flow

use anyhow::{Context, Result};
use keymint_domain::usecases::MintUseCase;
use std::path::PathBuf;

use super::{build_clock, build_entropy_source, resolve_theme};
use crate::args::MintArgs;
use crate::config::AppConfig;

pub fn execute(args: MintArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let entropy = build_entropy_source(&config)?;
    let clock = build_clock(&config)?;
    let theme = resolve_theme(args.theme, &config);

    let usecase = MintUseCase::new(entropy, clock);
    let minted = usecase.mint(&theme).context("Failed to mint identifier")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&minted)?);
    } else {
        println!("Minted Identifier");
        println!("=================");
        println!();
        println!("Key:        {}", minted.key);
        println!("Hashed key: {}", minted.digest);
        println!("Theme:      {}", minted.record.theme());
        println!("Created at: {}", minted.record.created_at());
        println!();
        println!("Hand the key to the client; store the record under the hashed key.");
    }

    Ok(())
}

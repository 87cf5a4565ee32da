//! Key command - generate and hash opaque keys

use anyhow::{Context, Result};
use keymint_domain::{hash_key, usecases::KeyGenerator};
use std::io::{self, Read};
use std::path::PathBuf;

use super::build_entropy_source;
use crate::args::{KeyArgs, KeyCommands};
use crate::config::AppConfig;

pub fn execute(args: KeyArgs, config_path: Option<PathBuf>) -> Result<()> {
    match args.command {
        KeyCommands::Generate { json } => generate(json, config_path),
        KeyCommands::Hash { input, file, json } => hash(input, file, json),
    }
}

fn generate(json: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let entropy = build_entropy_source(&config)?;

    let key = KeyGenerator::new(entropy)
        .generate_key()
        .context("Failed to generate key")?;

    if json {
        let output = serde_json::json!({ "key": key });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", key);
    }

    Ok(())
}

fn hash(input: Option<String>, file: Option<PathBuf>, json: bool) -> Result<()> {
    let text = read_input(input, file)?;
    let digest = hash_key(&text);

    tracing::debug!(input_bytes = text.len(), "Hashed input");

    if json {
        let output = serde_json::json!({
            "input_bytes": text.len(),
            "digest": digest,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", digest);
    }

    Ok(())
}

/// Input is hashed exactly as given: no trimming, no newline stripping
fn read_input(input: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = input {
        return Ok(text);
    }

    if let Some(path) = file {
        if path.as_os_str() != "-" {
            return std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read file: {}", path.display()));
        }
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read from stdin")?;
    Ok(text)
}

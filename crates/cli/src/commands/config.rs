//! Config command - configuration management

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::{ConfigArgs, ConfigCommands};
use crate::config::AppConfig;

pub fn execute(args: ConfigArgs, config_path: Option<PathBuf>) -> Result<()> {
    match args.command {
        ConfigCommands::Init { path, force } => init_config(&path, force),
        ConfigCommands::Show => show_config(config_path),
    }
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, AppConfig::example_toml())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    println!("Created config file: {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Keep entropy.provider = \"os\" for real keys");
    println!("  2. Run 'keymint doctor' to validate your setup");
    println!("  3. Run 'keymint mint --theme <name>' to mint an identifier");

    Ok(())
}

/// Print the effective configuration after file and environment merging
fn show_config(config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_args(path: PathBuf, force: bool) -> ConfigArgs {
        ConfigArgs {
            command: ConfigCommands::Init { path, force },
        }
    }

    #[test]
    fn test_init_runs_without_a_runtime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keymint.toml");

        execute(init_args(path.clone(), false), None).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[entropy]"));

        let err = execute(init_args(path.clone(), false), None).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        execute(init_args(path, true), None).unwrap();
    }
}

//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub entropy: EntropyConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntropyConfig {
    #[serde(default = "default_entropy_provider")]
    pub provider: String,

    #[serde(default = "default_stub_seed")]
    pub stub_seed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_clock_provider")]
    pub provider: String,

    /// RFC 3339 instant, required for the fixed provider
    #[serde(default)]
    pub fixed_time: Option<String>,

    /// Advance the fixed clock by this much after every reading (0 = pinned)
    #[serde(default)]
    pub step_millis: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_entropy_provider() -> String {
    "os".to_string()
}

fn default_stub_seed() -> String {
    "keymint-stub".to_string()
}

fn default_clock_provider() -> String {
    "system".to_string()
}

fn default_theme() -> String {
    "default".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            provider: default_entropy_provider(),
            stub_seed: default_stub_seed(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            provider: default_clock_provider(),
            fixed_time: None,
            step_millis: 0,
        }
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("KEYMINT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# keymint configuration

[general]
log_level = "info"

[entropy]
provider = "os"  # os, stub
# Only used by the stub provider; never use stub outside tests
stub_seed = "keymint-stub"

[clock]
provider = "system"  # system, fixed
# fixed_time = "2024-01-01T12:00:00Z"
# step_millis = 0

[metadata]
default_theme = "default"
"#
        .to_string()
    }
}

//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// keymint: mint opaque result keys, storage digests, and metadata records
#[derive(Parser, Debug)]
#[command(name = "keymint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate or hash opaque keys
    Key(KeyArgs),

    /// Build metadata records
    Meta(MetaArgs),

    /// Generate a key, hash it, and stamp the digest in one step
    Mint(MintArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and capabilities
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub command: KeyCommands,
}

#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// Generate a fresh 256-bit opaque key
    Generate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the SHA-256 digest of a string
    Hash {
        /// String to hash
        #[arg(long, conflicts_with = "file")]
        input: Option<String>,

        /// File whose content is hashed (use - for stdin)
        #[arg(long, conflicts_with = "input")]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct MetaArgs {
    #[command(subcommand)]
    pub command: MetaCommands,
}

#[derive(Subcommand, Debug)]
pub enum MetaCommands {
    /// Stamp a hashed key and theme with the current time
    Create {
        /// Hashed key to record (copied verbatim)
        #[arg(long)]
        hashed_key: String,

        /// Presentation theme (defaults to metadata.default_theme)
        #[arg(long)]
        theme: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct MintArgs {
    /// Presentation theme (defaults to metadata.default_theme)
    #[arg(long)]
    pub theme: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration (file plus environment overrides)
    Show,
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

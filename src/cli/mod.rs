//! Command-line interface for cssbundle.
//!
//! The CLI is a thin layer over the library: every command loads
//! [`BundleSettings`], calls into [`crate::bundle`] or [`crate::resolver`],
//! and prints the result. Library errors are wrapped with `anyhow` context
//! here and turned into coloured messages by `main`.
//!
//! # Commands
//!
//! - `bundle <DOCUMENT>` renders the stylesheets of an HTML fragment
//! - `deps <LESS_FILE>` lists the transitive imports of a LESS file
//! - `fingerprint <DOCUMENT>` prints the mtime tokens and cache key
//!
//! # Global Options
//!
//! - `--verbose` / `-v` enables debug logging
//! - `--quiet` / `-q` only logs errors
//! - `--config` / `-c` points at a specific `cssbundle.toml`
//!
//! `RUST_LOG` overrides the level derived from the flags.

mod bundle;
mod deps;
mod fingerprint;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::BundleSettings;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can build one without parsing
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Explicit configuration file, bypassing discovery
    pub config_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            config_path: None,
        }
    }
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Load bundle settings, searching upwards from `start` unless a
    /// configuration file was given explicitly.
    ///
    /// # Errors
    ///
    /// Fails if the configuration file cannot be read or parsed.
    pub fn load_settings(&self, start: &Path) -> Result<BundleSettings> {
        let settings = BundleSettings::load(self.config_path.as_deref(), start)
            .context("Failed to load bundle settings")?;
        debug!("Loaded settings: {settings:?}");
        Ok(settings)
    }
}

/// Bundle the stylesheets of HTML fragments.
#[derive(Parser, Debug)]
#[command(
    name = "cssbundle",
    about = "Bundle stylesheet references and compute cache fingerprints",
    version,
    long_about = "cssbundle groups the stylesheets of an HTML fragment by media scope, \
                  follows LESS imports and fingerprints every file by modification time."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to cssbundle.toml
    ///
    /// By default the file is searched for in the current directory and its
    /// parents.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the stylesheets of an HTML fragment as bundled style blocks
    Bundle(bundle::BundleCommand),

    /// List every file a LESS file transitively imports
    Deps(deps::DepsCommand),

    /// Print the modification-time fingerprint of an HTML fragment
    Fingerprint(fingerprint::FingerprintCommand),
}

impl Cli {
    /// Build a [`CliConfig`] from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            config_path: self.config.clone(),
        }
    }

    /// Run the selected command.
    ///
    /// # Errors
    ///
    /// Returns any command failure with context attached.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(&config)
    }

    /// Run the selected command with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns any command failure with context attached.
    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;

        match self.command {
            Commands::Bundle(cmd) => cmd.execute(&config.load_settings(&cwd)?),
            Commands::Deps(cmd) => cmd.execute(),
            Commands::Fingerprint(cmd) => cmd.execute(&config.load_settings(&cwd)?),
        }
    }
}

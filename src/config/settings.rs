//! Bundle settings loaded from `cssbundle.toml`.
//!
//! # File Format
//!
//! ```toml
//! [bundle]
//! enabled = true          # merge adjacent same-media stylesheets
//! precompilers = ["less"] # keep per-file output even when merging is off
//! url = "/static/"        # URL prefix stripped from hrefs
//! root = "static"         # directory the stripped hrefs resolve under
//! output_prefix = "css"
//! filters = ["cssmin"]
//! ```
//!
//! Every key is optional. A relative `root` is resolved against the directory
//! containing the configuration file. `CSSBUNDLE_ENABLED=true|false`
//! overrides `enabled`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::parse_config;
use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_OUTPUT_PREFIX, DEFAULT_STATIC_URL, ENABLED_ENV_VAR,
};
use crate::core::BundleError;
use crate::resolver::RootLocator;
use crate::utils::find_upwards;

/// Settings consulted by the splitter, the grouper and the output stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleSettings {
    /// Merging is active: adjacent nodes with the same media are combined.
    pub enabled: bool,

    /// Preprocessors configured for the project.
    ///
    /// When non-empty and `enabled` is false, the compressor still produces
    /// output, one group per node (precompile-only mode).
    pub precompilers: Vec<String>,

    /// URL prefix every bundled `href` must start with.
    pub url: String,

    /// Directory that basenames are resolved under.
    pub root: PathBuf,

    /// Output prefix, part of every cache key.
    pub output_prefix: String,

    /// Filter names, part of every cache key.
    pub filters: Vec<String>,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            precompilers: Vec::new(),
            url: DEFAULT_STATIC_URL.to_string(),
            root: PathBuf::from("."),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            filters: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    bundle: BundleSettings,
}

impl BundleSettings {
    /// Load settings from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, BundleError> {
        let file: ConfigFile = parse_config(path)?;
        let mut settings = file.bundle;

        if settings.root.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            settings.root = base.join(&settings.root);
        }

        debug!("Loaded bundle settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings for a project.
    ///
    /// Uses `explicit` when given, otherwise the nearest `cssbundle.toml` at or
    /// above `start`, otherwise defaults rooted at `start`. The
    /// `CSSBUNDLE_ENABLED` environment variable is applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is unreadable or invalid, or if
    /// the environment override is not a boolean.
    pub fn load(explicit: Option<&Path>, start: &Path) -> Result<Self, BundleError> {
        let mut settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match find_upwards(start, CONFIG_FILE_NAME) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No {CONFIG_FILE_NAME} found, using defaults");
                    Self {
                        root: start.to_path_buf(),
                        ..Self::default()
                    }
                }
            },
        };

        settings.apply_enabled_override(std::env::var(ENABLED_ENV_VAR).ok().as_deref())?;
        Ok(settings)
    }

    /// Apply an `enabled` override given as text.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::ConfigError`] when the value is not a boolean.
    pub fn apply_enabled_override(&mut self, value: Option<&str>) -> Result<(), BundleError> {
        let Some(value) = value else {
            return Ok(());
        };

        self.enabled = match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                return Err(BundleError::ConfigError {
                    message: format!("{ENABLED_ENV_VAR} must be a boolean, got '{other}'"),
                });
            }
        };
        debug!("{ENABLED_ENV_VAR} override: enabled = {}", self.enabled);
        Ok(())
    }

    /// Whether adjacent same-scope nodes are merged into one group.
    #[must_use]
    pub const fn merging(&self) -> bool {
        self.enabled
    }

    /// Whether the compressor should produce bundled output at all.
    #[must_use]
    pub fn is_active(&self, forced: bool) -> bool {
        self.enabled || !self.precompilers.is_empty() || forced
    }

    /// The locator resolving `href`s with these settings.
    #[must_use]
    pub fn locator(&self) -> RootLocator {
        RootLocator::new(self.url.clone(), self.root.clone())
    }
}

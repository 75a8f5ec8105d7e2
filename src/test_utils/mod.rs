//! Test utilities for cssbundle
//!
//! Helpers shared by the unit tests inside the crate and the `tests/` suites
//! (through the `test-utils` feature):
//!
//! - [`init_test_logging`] installs a tracing subscriber once per process
//! - [`LessTree`] builds a throwaway static root with stylesheets and
//!   controlled modification times
//!
//! # Example
//!
//! ```rust,no_run
//! use cssbundle_cli::test_utils::LessTree;
//!
//! let tree = LessTree::new().unwrap();
//! tree.write_with_mtime("site.less", "@import \"base.less\";\n", 100).unwrap();
//! tree.write_with_mtime("base.less", "", 200).unwrap();
//!
//! let deps = cssbundle_cli::resolver::get_less_dependencies(&tree.join("site.less")).unwrap();
//! assert_eq!(deps.len(), 1);
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::{Duration, UNIX_EPOCH};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::BundleSettings;
use crate::utils::normalize_path;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=cssbundle_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A temporary static root populated with stylesheets.
///
/// Paths handed to the helpers are relative to the root. The directory is
/// removed when the value is dropped.
#[derive(Debug)]
pub struct LessTree {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl LessTree {
    /// Create an empty tree.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let root = normalize_path(temp_dir.path());
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    /// The root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Absolute, normalized path of `rel` inside the tree.
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        normalize_path(&self.root.join(rel))
    }

    /// Write a file, creating parent directories as needed.
    pub fn write(&self, rel: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Set the modification time of a file to `secs` seconds after the epoch.
    pub fn set_mtime(&self, rel: impl AsRef<Path>, secs: u64) -> Result<()> {
        self.set_modified(rel, Duration::from_secs(secs))
    }

    /// Set the modification time of a file with sub-second precision.
    pub fn set_modified(&self, rel: impl AsRef<Path>, since_epoch: Duration) -> Result<()> {
        let path = self.join(rel);
        fs::File::options()
            .write(true)
            .open(&path)
            .and_then(|file| file.set_modified(UNIX_EPOCH + since_epoch))
            .with_context(|| format!("Failed to set mtime of {}", path.display()))
    }

    /// Write a file and pin its modification time.
    pub fn write_with_mtime(
        &self,
        rel: impl AsRef<Path>,
        content: &str,
        secs: u64,
    ) -> Result<PathBuf> {
        let rel = rel.as_ref();
        let path = self.write(rel, content)?;
        self.set_mtime(rel, secs)?;
        Ok(path)
    }

    /// Default settings serving this tree under `/static/`.
    pub fn settings(&self, enabled: bool) -> BundleSettings {
        BundleSettings {
            enabled,
            root: self.root.clone(),
            ..BundleSettings::default()
        }
    }
}

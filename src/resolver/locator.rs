//! Mapping stylesheet URLs to files on disk.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::BundleError;
use crate::utils::{is_safe_path, normalize_path};

/// Resolves `href` values to concrete files.
///
/// Implementations must be deterministic and free of side effects: the same
/// URL always yields the same basename and file.
pub trait FileLocator: fmt::Debug {
    /// Strip the static URL prefix and query string from `url`.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::UncompressableUrl`] when `url` is not served from
    /// the static prefix.
    fn basename(&self, url: &str) -> Result<String, BundleError>;

    /// Full path of the file a basename refers to.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::FileResolution`] when no such file exists or the
    /// basename points outside the locator's root.
    fn filename(&self, basename: &str) -> Result<PathBuf, BundleError>;
}

/// Locator joining basenames onto a single root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootLocator {
    url: String,
    root: PathBuf,
}

impl RootLocator {
    /// Create a locator for URLs under `url` served from `root`.
    pub fn new(url: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            root: root.into(),
        }
    }
}

impl FileLocator for RootLocator {
    fn basename(&self, url: &str) -> Result<String, BundleError> {
        let Some(rest) = url.strip_prefix(self.url.as_str()) else {
            return Err(BundleError::UncompressableUrl {
                url: url.to_string(),
                base_url: self.url.clone(),
            });
        };

        // Query strings are cache busters for unbundled output
        let basename = rest.split_once('?').map_or(rest, |(path, _)| path);
        Ok(basename.to_string())
    }

    fn filename(&self, basename: &str) -> Result<PathBuf, BundleError> {
        let path = normalize_path(&self.root.join(basename));
        if !is_safe_path(&self.root, Path::new(basename)) {
            return Err(BundleError::FileResolution {
                reason: format!("'{basename}' escapes the static root '{}'", self.root.display()),
                path,
            });
        }

        if path.is_file() {
            Ok(path)
        } else {
            Err(BundleError::FileResolution {
                reason: format!("'{basename}' could not be found in '{}'", self.root.display()),
                path,
            })
        }
    }
}

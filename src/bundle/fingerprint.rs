//! Modification-time fingerprints used as cache-invalidation keys.
//!
//! A fingerprint is the ordered list of mtime tokens for every file that can
//! affect a bundle: each referenced file, followed for LESS sources by every
//! transitively imported file in path-string order. Sorting makes two
//! traversals of the same import graph produce the same fingerprint.
//!
//! Tokens keep the full precision the filesystem records: whole seconds print
//! as an integer (`1700000000`), anything finer gets a trimmed fraction
//! (`1700000000.25`). Touching a file twice within one second still changes
//! its token.
//!
//! Inline hunks have no backing file and contribute no token; their text is
//! folded into the cache key alongside the other bundle identity data.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use super::node::ContentNode;
use crate::constants::{CACHE_KEY_DIGEST_LEN, CACHE_KEY_PREFIX};
use crate::core::BundleError;
use crate::resolver::{get_less_dependencies, is_less_file, sorted_imports};
use crate::utils::get_mtime;

/// Ordered modification-time tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(Vec<String>);

impl Fingerprint {
    /// The tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no file contributed a token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append the token for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::FileResolution`] if the mtime cannot be read.
    pub fn push_file(&mut self, path: &Path) -> Result<(), BundleError> {
        self.0.push(mtime_token(path)?);
        Ok(())
    }

    /// Cache key combining the tokens with other bundle identity data.
    ///
    /// `parts` carries whatever else identifies the bundle (output prefix,
    /// filters, scope, inline text). The key has the form
    /// `cssbundle.<12 hex digits>`.
    #[must_use]
    pub fn cache_key(&self, parts: &[&str]) -> String {
        let mut hasher = Sha256::new();
        for token in &self.0 {
            hasher.update(token.as_bytes());
            hasher.update(b"\n");
        }
        // Separates tokens from parts so ["1"] + [] differs from [] + ["1"]
        hasher.update(b"\0");
        for part in parts {
            hasher.update(part.as_bytes());
            hasher.update(b"\n");
        }

        let digest = hex::encode(hasher.finalize());
        format!("{CACHE_KEY_PREFIX}.{}", &digest[..CACHE_KEY_DIGEST_LEN])
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

/// Modification-time token for one file.
///
/// # Errors
///
/// Returns [`BundleError::FileResolution`] if the mtime cannot be read.
pub fn mtime_token(path: &Path) -> Result<String, BundleError> {
    Ok(format_mtime(get_mtime(path)?))
}

fn format_mtime(since_epoch: Duration) -> String {
    let secs = since_epoch.as_secs();
    let nanos = since_epoch.subsec_nanos();
    if nanos == 0 {
        return secs.to_string();
    }

    let fraction = format!("{nanos:09}");
    format!("{secs}.{}", fraction.trim_end_matches('0'))
}

/// Compute the fingerprint of a node sequence.
///
/// # Errors
///
/// Propagates file resolution and absolute-import errors: skipping a file
/// would leave a stale cache key.
pub fn compute_fingerprint(nodes: &[ContentNode]) -> Result<Fingerprint, BundleError> {
    let mut fingerprint = Fingerprint::default();

    for node in nodes {
        let Some(locator) = node.locator() else {
            continue;
        };

        fingerprint.push_file(locator)?;

        if is_less_file(locator) {
            for import in sorted_imports(get_less_dependencies(locator)?) {
                fingerprint.push_file(&import)?;
            }
        }
    }

    debug!("Fingerprint of {} node(s) has {} token(s)", nodes.len(), fingerprint.len());
    Ok(fingerprint)
}

//! File system helpers shared by the resolver, the fingerprint code and the CLI.
//!
//! All operations are blocking and local. Errors carry the offending path so
//! callers can report which file broke a bundle.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::BundleError;

/// Normalizes a path by resolving `.` and `..` components lexically.
///
/// Does not touch the filesystem and does not resolve symlinks, so two
/// spellings of the same import (`./a/../b.less`, `b.less`) compare equal.
///
/// # Examples
///
/// ```rust
/// use cssbundle_cli::utils::fs::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// let path = Path::new("/foo/./bar/../baz.less");
/// assert_eq!(normalize_path(path), PathBuf::from("/foo/baz.less"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {} // Skip .
            Component::ParentDir => {
                // Keep leading `..` on relative paths, drop the previous component otherwise
                match components.last() {
                    Some(Component::Normal(_)) => {
                        components.pop();
                    }
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    _ => components.push(component),
                }
            }
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Checks that `path` stays inside `base` once both are normalized.
///
/// Relative paths are taken relative to `base`. A relative path that climbs
/// above a relative base (`..` left over after normalization) is rejected too.
///
/// ```rust
/// use cssbundle_cli::utils::fs::is_safe_path;
/// use std::path::Path;
///
/// let base = Path::new("/srv/static");
/// assert!(is_safe_path(base, Path::new("css/site.less")));
/// assert!(!is_safe_path(base, Path::new("../secret.txt")));
/// assert!(!is_safe_path(base, Path::new("/etc/passwd")));
/// ```
#[must_use]
pub fn is_safe_path(base: &Path, path: &Path) -> bool {
    let normalized_base = normalize_path(base);
    let normalized_path = if path.has_root() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    };

    match normalized_path.strip_prefix(&normalized_base) {
        Ok(rest) => {
            !rest.has_root() && !matches!(rest.components().next(), Some(Component::ParentDir))
        }
        Err(_) => false,
    }
}

/// Reads a text file line by line.
///
/// Lines are split on `\n` with a trailing `\r` removed. Bytes that are not
/// valid UTF-8 are replaced rather than rejected, so a stray Latin-1 byte in a
/// comment does not hide the lines around it.
///
/// # Errors
///
/// Returns [`BundleError::FileResolution`] naming `path` if the file cannot be
/// opened or read.
pub fn read_lines(path: &Path) -> Result<Vec<String>, BundleError> {
    let bytes = fs::read(path).map_err(|e| BundleError::file_resolution(path, &e))?;
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let content = bytes.strip_suffix(b"\n").unwrap_or(&bytes);
    Ok(content
        .split(|&b| b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect())
}

/// Reads a whole text file.
///
/// # Errors
///
/// Returns [`BundleError::FileResolution`] naming `path` on failure.
pub fn read_text_file(path: &Path) -> Result<String, BundleError> {
    fs::read_to_string(path).map_err(|e| BundleError::file_resolution(path, &e))
}

/// Gets the modification time of a file.
///
/// # Errors
///
/// Returns [`BundleError::FileResolution`] if the metadata cannot be read.
pub fn get_modified_time(path: &Path) -> Result<SystemTime, BundleError> {
    let metadata = fs::metadata(path).map_err(|e| BundleError::file_resolution(path, &e))?;
    metadata.modified().map_err(|e| BundleError::file_resolution(path, &e))
}

/// Modification time of `path` since the UNIX epoch, at the full precision
/// the filesystem records.
///
/// Times before the epoch clamp to zero.
///
/// # Errors
///
/// Returns [`BundleError::FileResolution`] if the metadata cannot be read.
pub fn get_mtime(path: &Path) -> Result<Duration, BundleError> {
    let modified = get_modified_time(path)?;
    Ok(modified.duration_since(UNIX_EPOCH).unwrap_or_default())
}

/// Searches `start` and its ancestors for a file named `file_name`.
///
/// Returns the full path of the first match, or `None` when the filesystem
/// root is reached without one.
#[must_use]
pub fn find_upwards(start: &Path, file_name: &str) -> Option<PathBuf> {
    let mut current = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    loop {
        let candidate = current.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

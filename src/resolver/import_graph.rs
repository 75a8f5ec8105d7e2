//! Transitive `@import` discovery for LESS sources.
//!
//! A LESS file's rendered output depends on every file it imports, directly or
//! through other imports. The fingerprint of a bundle therefore has to cover
//! the whole import graph, not just the file named in the markup.
//!
//! # Detection Rules
//!
//! A line declares an import when it matches, from the start of the line:
//! optional whitespace, `@import`, whitespace, a single- or double-quoted path,
//! and `;`. Anything else is ignored. This is a line-oriented heuristic and not
//! a LESS parser: an import split over several lines, or one carrying media
//! queries or options, is not seen.
//!
//! # Cycles
//!
//! Traversal threads a visited set through every recursive call. A path is
//! scanned at most once per top-level [`resolve`] call, so `a → b → a` and
//! self-imports terminate. The root file itself is never part of the result.
//!
//! ```rust,no_run
//! use cssbundle_cli::resolver::import_graph::get_less_dependencies;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), cssbundle_cli::core::BundleError> {
//! for path in get_less_dependencies(Path::new("static/site.less"))? {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::constants::LESS_EXTENSION;
use crate::core::BundleError;
use crate::utils::{normalize_path, read_lines};

/// A set of normalized file paths.
///
/// Iteration follows `Path` ordering, which compares component by component.
/// Use [`sorted_imports`] where plain string order is needed.
pub type ImportSet = BTreeSet<PathBuf>;

static IMPORT_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn import_regex() -> Option<&'static Regex> {
    IMPORT_RE.get_or_init(|| Regex::new(r#"^\s*@import\s+["'](.*)['"];"#).ok()).as_ref()
}

/// Extract the quoted path from an `@import` line.
///
/// Returns `None` for lines that are not import declarations.
#[must_use]
pub fn parse_import_line(line: &str) -> Option<&str> {
    import_regex()?.captures(line).and_then(|cap| cap.get(1)).map(|m| m.as_str())
}

/// Whether `path` is a LESS source whose imports affect its output.
#[must_use]
pub fn is_less_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == LESS_EXTENSION)
}

/// Collect every file transitively imported by `file`.
///
/// `visited` holds paths already traversed by the caller. They are reported
/// if imported again but never re-scanned. The root file is excluded from
/// the result.
///
/// # Errors
///
/// - [`BundleError::AbsoluteImport`] if any reachable file imports an
///   absolute path
/// - [`BundleError::FileResolution`] if `file` or an imported file cannot be
///   opened
pub fn resolve(file: &Path, visited: &ImportSet) -> Result<ImportSet, BundleError> {
    let root = normalize_path(file);

    let mut seen = visited.clone();
    seen.insert(root.clone());
    let mut imports = ImportSet::new();

    collect_imports(&root, &mut seen, &mut imports)?;
    imports.remove(&root);

    debug!("Resolved {} import(s) for {}", imports.len(), root.display());
    Ok(imports)
}

/// Order an import set by the full path string.
///
/// This is byte order over the whole path, so `a-b.less` sorts before
/// `a/b.less`, unlike the component-wise order of [`ImportSet`].
#[must_use]
pub fn sorted_imports(imports: ImportSet) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = imports.into_iter().collect();
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    paths
}

/// Collect the transitive imports of `file` starting from an empty visited set.
///
/// # Errors
///
/// See [`resolve`].
pub fn get_less_dependencies(file: &Path) -> Result<ImportSet, BundleError> {
    resolve(file, &ImportSet::new())
}

fn collect_imports(
    file: &Path,
    seen: &mut ImportSet,
    imports: &mut ImportSet,
) -> Result<(), BundleError> {
    let dir = file.parent().unwrap_or_else(|| Path::new(""));

    for line in read_lines(file)? {
        let Some(import) = parse_import_line(&line) else {
            if line.trim_start().starts_with("@import") {
                trace!("Skipping unrecognised import line in {}: {}", file.display(), line.trim());
            }
            continue;
        };

        if import.starts_with('/') || Path::new(import).is_absolute() {
            return Err(BundleError::AbsoluteImport {
                import: import.to_string(),
                importer: file.to_path_buf(),
            });
        }

        let resolved = normalize_path(&dir.join(import));
        trace!("{} imports {}", file.display(), resolved.display());
        imports.insert(resolved.clone());

        if seen.insert(resolved.clone()) {
            collect_imports(&resolved, seen, imports)?;
        }
    }

    Ok(())
}

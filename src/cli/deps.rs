//! `cssbundle deps`: list the transitive imports of a LESS file.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::resolver::{get_less_dependencies, sorted_imports};
use crate::utils::normalize_path;

/// Print every file `file` imports, directly or transitively, one per line
/// in path-string order. The file itself is never listed.
#[derive(Args, Debug)]
pub struct DepsCommand {
    /// LESS file to scan
    file: PathBuf,
}

impl DepsCommand {
    pub fn execute(self) -> Result<()> {
        let file = if self.file.is_absolute() {
            normalize_path(&self.file)
        } else {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            normalize_path(&cwd.join(&self.file))
        };

        let imports = get_less_dependencies(&file)
            .with_context(|| format!("Failed to resolve imports of {}", file.display()))?;

        for import in sorted_imports(imports) {
            println!("{}", import.display());
        }
        Ok(())
    }
}

//! `cssbundle bundle`: render the stylesheets of an HTML fragment.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::bundle::{CssCompressor, OutputGroup};
use crate::config::BundleSettings;
use crate::utils::read_text_file;

/// Render bundled `<style>` blocks for every scope group.
#[derive(Args, Debug)]
pub struct BundleCommand {
    /// HTML fragment containing `<link>` and `<style>` elements
    document: PathBuf,

    /// Bundle even when merging is disabled and no precompiler is configured
    #[arg(short, long)]
    force: bool,

    /// Print the groups as JSON instead of markup
    #[arg(long)]
    json: bool,
}

/// JSON form of a bundle run. Inactive runs have no groups and carry the
/// original markup in `passthrough`.
#[derive(Serialize)]
struct BundleReport {
    active: bool,
    groups: Vec<OutputGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    passthrough: Option<String>,
}

impl BundleCommand {
    pub fn execute(self, settings: &BundleSettings) -> Result<()> {
        let html = read_text_file(&self.document)
            .with_context(|| format!("Failed to read document {}", self.document.display()))?;

        let mut compressor = CssCompressor::new(&html, settings.clone());
        info!("Found {} stylesheet element(s)", compressor.elements().len());

        if self.json {
            let report = if compressor.settings().is_active(self.force) {
                BundleReport {
                    active: true,
                    groups: compressor
                        .output_groups()
                        .with_context(|| format!("Failed to bundle {}", self.document.display()))?,
                    passthrough: None,
                }
            } else {
                BundleReport {
                    active: false,
                    groups: Vec::new(),
                    passthrough: Some(compressor.output(self.force)?),
                }
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        let output = compressor
            .output(self.force)
            .with_context(|| format!("Failed to bundle {}", self.document.display()))?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }
}

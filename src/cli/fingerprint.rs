//! `cssbundle fingerprint`: print mtime tokens and the cache key.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::bundle::CssCompressor;
use crate::config::BundleSettings;
use crate::utils::read_text_file;

#[derive(Args, Debug)]
pub struct FingerprintCommand {
    /// HTML fragment containing `<link>` and `<style>` elements
    document: PathBuf,
}

impl FingerprintCommand {
    pub fn execute(self, settings: &BundleSettings) -> Result<()> {
        let html = read_text_file(&self.document)
            .with_context(|| format!("Failed to read document {}", self.document.display()))?;

        let mut compressor = CssCompressor::new(&html, settings.clone());
        let context = || format!("Failed to fingerprint {}", self.document.display());

        let tokens = compressor.mtimes().with_context(context)?.to_string();
        let cache_key = compressor.cache_key().with_context(context)?;

        println!("{} {tokens}", "tokens:".bold());
        println!("{} {cache_key}", "cache key:".bold());
        Ok(())
    }
}

//! Per-render-pass stylesheet compressor.
//!
//! A [`CssCompressor`] owns the elements of one document fragment and
//! memoizes everything derived from them: the split into content nodes and
//! scope groups, and the fingerprint. Build a new instance for every render
//! pass; nothing is invalidated in place and nothing is shared between
//! instances.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cssbundle_cli::bundle::CssCompressor;
//! use cssbundle_cli::config::BundleSettings;
//!
//! # fn example() -> Result<(), cssbundle_cli::core::BundleError> {
//! let html = r#"<link rel="stylesheet" href="/static/site.less" media="screen">"#;
//! let mut compressor = CssCompressor::new(html, BundleSettings::default());
//!
//! println!("fingerprint: {}", compressor.mtimes()?);
//! print!("{}", compressor.output(false)?);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::debug;

use super::fingerprint::{Fingerprint, compute_fingerprint};
use super::node::{ContentNode, ScopeGroup};
use super::splitter::{SplitResult, split};
use crate::config::BundleSettings;
use crate::core::BundleError;
use crate::markup::{Element, parse_css_elements};
use crate::resolver::FileLocator;

/// One rendered scope group, ready for the output layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputGroup {
    /// The group's scope, rendered as the `media` attribute
    pub scope: Option<String>,
    /// The nodes the content was built from
    pub nodes: Vec<ContentNode>,
    /// Node payloads concatenated in document order
    pub content: String,
    /// Fingerprint of the group's files
    pub fingerprint: Fingerprint,
    /// Cache key for the group
    pub cache_key: String,
}

impl OutputGroup {
    fn build(
        group: ScopeGroup,
        output_prefix: &str,
        filters: &[String],
    ) -> Result<Self, BundleError> {
        let content = group
            .nodes
            .iter()
            .map(ContentNode::content)
            .collect::<Result<Vec<_>, _>>()?
            .join("\n");

        let fingerprint = compute_fingerprint(&group.nodes)?;

        let mut parts = vec![output_prefix];
        parts.extend(filters.iter().map(String::as_str));
        parts.push(group.scope.as_deref().unwrap_or(""));
        for node in &group.nodes {
            if let ContentNode::Hunk {
                text,
                ..
            } = node
            {
                parts.push(text);
            }
        }
        let cache_key = fingerprint.cache_key(&parts);

        Ok(Self {
            scope: group.scope,
            nodes: group.nodes,
            content,
            fingerprint,
            cache_key,
        })
    }

    /// Render the group as an inline `<style>` element.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.scope {
            Some(scope) => format!(
                "<style type=\"text/css\" media=\"{}\">\n{}\n</style>",
                scope.replace('"', "&quot;"),
                self.content
            ),
            None => format!("<style type=\"text/css\">\n{}\n</style>", self.content),
        }
    }
}

/// Stylesheet compressor for one document fragment.
#[derive(Debug)]
pub struct CssCompressor {
    elements: Vec<Box<dyn Element>>,
    settings: BundleSettings,
    locator: Box<dyn FileLocator>,
    split_content: Option<SplitResult>,
    mtimes: Option<Fingerprint>,
}

impl CssCompressor {
    /// Scan `content` for stylesheet elements and resolve them with the
    /// locator derived from `settings`.
    #[must_use]
    pub fn new(content: &str, settings: BundleSettings) -> Self {
        let elements = parse_css_elements(content)
            .into_iter()
            .map(|elem| Box::new(elem) as Box<dyn Element>)
            .collect();
        let locator = Box::new(settings.locator());
        Self::from_elements(elements, settings, locator)
    }

    /// Build a compressor over elements from any markup parser.
    #[must_use]
    pub fn from_elements(
        elements: Vec<Box<dyn Element>>,
        settings: BundleSettings,
        locator: Box<dyn FileLocator>,
    ) -> Self {
        Self {
            elements,
            settings,
            locator,
            split_content: None,
            mtimes: None,
        }
    }

    /// The elements this compressor was built from.
    #[must_use]
    pub fn elements(&self) -> &[Box<dyn Element>] {
        &self.elements
    }

    /// The settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &BundleSettings {
        &self.settings
    }

    fn split_result(&mut self) -> Result<&SplitResult, BundleError> {
        let result = match self.split_content.take() {
            Some(result) => result,
            None => split(&self.elements, &*self.locator, self.settings.merging())?,
        };
        Ok(self.split_content.insert(result))
    }

    /// Content nodes in document order. Computed once per instance.
    ///
    /// # Errors
    ///
    /// Returns the first splitting error; nothing is cached in that case.
    pub fn split_contents(&mut self) -> Result<&[ContentNode], BundleError> {
        Ok(&self.split_result()?.nodes)
    }

    /// Scope groups in document order. Computed with [`Self::split_contents`].
    ///
    /// # Errors
    ///
    /// See [`Self::split_contents`].
    pub fn groups(&mut self) -> Result<&[ScopeGroup], BundleError> {
        Ok(&self.split_result()?.groups)
    }

    /// Fingerprint of every node. Computed once per instance.
    ///
    /// # Errors
    ///
    /// Propagates splitting, file resolution and absolute-import errors.
    pub fn mtimes(&mut self) -> Result<&Fingerprint, BundleError> {
        let fingerprint = match self.mtimes.take() {
            Some(fingerprint) => fingerprint,
            None => compute_fingerprint(self.split_contents()?)?,
        };
        Ok(self.mtimes.insert(fingerprint))
    }

    /// Cache key of the whole fragment.
    ///
    /// # Errors
    ///
    /// See [`Self::mtimes`].
    pub fn cache_key(&mut self) -> Result<String, BundleError> {
        let mut parts = vec![self.settings.output_prefix.clone()];
        parts.extend(self.settings.filters.iter().cloned());
        for node in self.split_contents()? {
            if let ContentNode::Hunk {
                text,
                ..
            } = node
            {
                parts.push(text.clone());
            }
        }

        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
        Ok(self.mtimes()?.cache_key(&parts))
    }

    /// Build one [`OutputGroup`] per scope group.
    ///
    /// # Errors
    ///
    /// Propagates splitting, reading and fingerprint errors.
    pub fn output_groups(&mut self) -> Result<Vec<OutputGroup>, BundleError> {
        let groups = self.groups()?.to_vec();

        groups
            .into_iter()
            .map(|group| {
                OutputGroup::build(group, &self.settings.output_prefix, &self.settings.filters)
            })
            .collect()
    }

    /// Render the fragment.
    ///
    /// When bundling is active (merging enabled, precompilers configured, or
    /// `forced`) every scope group is rendered; otherwise the original
    /// elements are returned unchanged.
    ///
    /// # Errors
    ///
    /// See [`Self::output_groups`].
    pub fn output(&mut self, forced: bool) -> Result<String, BundleError> {
        if !self.settings.is_active(forced) {
            debug!("Bundling inactive, passing {} element(s) through", self.elements.len());
            return Ok(self.elements.iter().map(|elem| elem.render()).collect::<Vec<_>>().join("\n"));
        }

        let rendered = self.output_groups()?.iter().map(OutputGroup::render).collect::<Vec<_>>();
        Ok(rendered.join("\n"))
    }
}

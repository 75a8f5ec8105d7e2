//! Node splitting and scope grouping.
//!
//! The splitter walks the element sequence once, turns every stylesheet
//! `<link>` into a [`ContentNode::File`] and every `<style>` into a
//! [`ContentNode::Hunk`], and feeds each node to a [`ScopeGrouper`] as it is
//! produced. Document order is preserved through both outputs.

use tracing::{debug, trace};

use super::node::{ContentNode, ElementId, ScopeGroup};
use crate::core::BundleError;
use crate::markup::Element;
use crate::resolver::FileLocator;

/// Result of one splitting pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    /// Every content node in document order
    pub nodes: Vec<ContentNode>,
    /// The same nodes partitioned by scope
    pub groups: Vec<ScopeGroup>,
}

/// Partitions nodes into runs that share a scope value.
///
/// With merging enabled a node joins the previous group when their scopes are
/// equal (two absent scopes are equal). With merging disabled every node gets
/// a group of its own, so each file can be precompiled in isolation.
#[derive(Debug, Clone, Default)]
pub struct ScopeGrouper {
    merging: bool,
    groups: Vec<ScopeGroup>,
}

impl ScopeGrouper {
    /// Create an empty grouper.
    #[must_use]
    pub const fn new(merging: bool) -> Self {
        Self {
            merging,
            groups: Vec::new(),
        }
    }

    /// Add the next node in document order.
    pub fn push(&mut self, scope: Option<&str>, node: ContentNode) {
        if self.merging {
            if let Some(last) = self.groups.last_mut() {
                if last.scope.as_deref() == scope {
                    trace!("Appending {} to group with scope {:?}", node.element(), scope);
                    last.nodes.push(node);
                    return;
                }
            }
        }

        trace!("Starting group for {} with scope {:?}", node.element(), scope);
        self.groups.push(ScopeGroup::new(scope.map(str::to_string), node));
    }

    /// Groups built so far.
    #[must_use]
    pub fn groups(&self) -> &[ScopeGroup] {
        &self.groups
    }

    /// Finish grouping.
    #[must_use]
    pub fn into_groups(self) -> Vec<ScopeGroup> {
        self.groups
    }
}

/// Classify `elements` into content nodes and scope groups.
///
/// Stylesheet links (`rel` equal to `stylesheet`, ignoring case) become file
/// nodes resolved through `locator`; `style` elements become inline hunks.
/// Everything else is skipped. The `media` attribute is the scope.
///
/// # Errors
///
/// - [`BundleError::MissingAttribute`] for a stylesheet link without `href`
/// - any error from `locator`
pub fn split<E: Element>(
    elements: &[E],
    locator: &dyn FileLocator,
    merging: bool,
) -> Result<SplitResult, BundleError> {
    let mut nodes = Vec::new();
    let mut grouper = ScopeGrouper::new(merging);

    for (index, elem) in elements.iter().enumerate() {
        let element = ElementId(index);

        let node = match elem.name().to_ascii_lowercase().as_str() {
            "link" if is_stylesheet(elem) => {
                let href = elem.attribute("href").ok_or_else(|| BundleError::MissingAttribute {
                    element: "link".to_string(),
                    attribute: "href".to_string(),
                })?;
                let basename = locator.basename(href)?;
                let path = locator.filename(&basename)?;
                ContentNode::File {
                    locator: path,
                    basename,
                    element,
                }
            }
            "style" => ContentNode::Hunk {
                text: elem.inner_text().to_string(),
                element,
            },
            other => {
                trace!("Ignoring <{other}> element {element}");
                continue;
            }
        };

        grouper.push(elem.attribute("media"), node.clone());
        nodes.push(node);
    }

    let groups = grouper.into_groups();
    debug!("Split {} node(s) into {} group(s) (merging: {merging})", nodes.len(), groups.len());

    Ok(SplitResult {
        nodes,
        groups,
    })
}

fn is_stylesheet<E: Element>(elem: &E) -> bool {
    elem.attribute("rel").is_some_and(|rel| rel.eq_ignore_ascii_case("stylesheet"))
}

//! Content nodes and the groups they are bundled in.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::BundleError;
use crate::utils::read_text_file;

/// Opaque handle to the element a node was derived from.
///
/// It is the element's position in the sequence handed to the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One piece of stylesheet content, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentNode {
    /// A stylesheet file referenced by a `<link>` element.
    File {
        /// Resolved path on disk
        locator: PathBuf,
        /// The `href` with the static prefix and query string removed
        basename: String,
        /// Source element
        element: ElementId,
    },
    /// Inline CSS from a `<style>` element.
    Hunk {
        /// Literal text content
        text: String,
        /// Source element
        element: ElementId,
    },
}

impl ContentNode {
    /// Handle of the element this node came from.
    #[must_use]
    pub const fn element(&self) -> ElementId {
        match self {
            Self::File {
                element,
                ..
            }
            | Self::Hunk {
                element,
                ..
            } => *element,
        }
    }

    /// Path of the backing file, if any.
    #[must_use]
    pub fn locator(&self) -> Option<&Path> {
        match self {
            Self::File {
                locator,
                ..
            } => Some(locator),
            Self::Hunk {
                ..
            } => None,
        }
    }

    /// The CSS this node contributes to a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::FileResolution`] if a file node cannot be read.
    pub fn content(&self) -> Result<Cow<'_, str>, BundleError> {
        match self {
            Self::File {
                locator,
                ..
            } => read_text_file(locator).map(Cow::Owned),
            Self::Hunk {
                text,
                ..
            } => Ok(Cow::Borrowed(text)),
        }
    }
}

/// A maximal run of nodes sharing one scope (`media`) value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeGroup {
    /// The shared scope; `None` is a value of its own
    pub scope: Option<String>,
    /// Nodes in document order
    pub nodes: Vec<ContentNode>,
}

impl ScopeGroup {
    /// Start a group with a single node.
    #[must_use]
    pub fn new(scope: Option<String>, node: ContentNode) -> Self {
        Self {
            scope,
            nodes: vec![node],
        }
    }
}

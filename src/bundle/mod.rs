//! The bundling core: content nodes, scope groups and fingerprints.
//!
//! Data flows leaves first:
//!
//! 1. [`split`] turns elements into [`ContentNode`]s and, through a
//!    [`ScopeGrouper`], into [`ScopeGroup`]s
//! 2. [`compute_fingerprint`] turns nodes into a [`Fingerprint`], following
//!    LESS imports through [`crate::resolver::import_graph`]
//! 3. [`CssCompressor`] ties both together for one render pass and produces
//!    [`OutputGroup`]s

pub mod compressor;
pub mod fingerprint;
pub mod node;
pub mod splitter;

pub use compressor::{CssCompressor, OutputGroup};
pub use fingerprint::{Fingerprint, compute_fingerprint, mtime_token};
pub use node::{ContentNode, ElementId, ScopeGroup};
pub use splitter::{ScopeGrouper, SplitResult, split};

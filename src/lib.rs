//! cssbundle - stylesheet bundling core
//!
//! Groups the stylesheets referenced by an HTML fragment into bundles and
//! computes modification-time fingerprints used to invalidate cached output.
//! Stylesheets written in LESS are followed through their `@import`s so that
//! touching any transitively imported file changes the fingerprint.
//!
//! # Architecture Overview
//!
//! Data flows from the leaves to the output:
//!
//! - [`markup`] scans an HTML fragment into [`markup::Element`]s
//! - [`bundle::split`] classifies elements into content nodes (files and
//!   inline hunks) and groups them by their `media` scope
//! - [`resolver`] maps `href`s to files and computes the transitive LESS
//!   import set of a file
//! - [`bundle::compute_fingerprint`] turns nodes into mtime tokens
//! - [`bundle::CssCompressor`] memoizes all of the above for one render pass
//!
//! # Core Modules
//!
//! - [`bundle`] - content nodes, scope groups, fingerprints and the compressor
//! - [`cli`] - command-line interface
//! - [`config`] - `cssbundle.toml` loading
//! - [`core`] - error types and user-facing error formatting
//! - [`markup`] - the element abstraction and the HTML scanner
//! - [`resolver`] - import graph traversal and URL-to-file mapping
//! - [`utils`] - filesystem helpers
//!
//! # Configuration (cssbundle.toml)
//!
//! ```toml
//! [bundle]
//! enabled = true
//! precompilers = ["less"]
//! url = "/static/"
//! root = "static"
//! output_prefix = "css"
//! filters = ["cssmin"]
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Render bundled style blocks for a template fragment
//! cssbundle bundle templates/head.html
//!
//! # Same, as JSON
//! cssbundle bundle templates/head.html --json
//!
//! # List every file a LESS stylesheet depends on
//! cssbundle deps static/site.less
//!
//! # Print the fingerprint and cache key
//! cssbundle fingerprint templates/head.html
//! ```

pub mod bundle;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod markup;
pub mod resolver;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

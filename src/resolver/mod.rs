//! Resolution of stylesheet references to files.
//!
//! - [`import_graph`] - transitive `@import` discovery for LESS sources
//! - [`locator`] - `href` to on-disk path mapping

pub mod import_graph;
pub mod locator;

pub use import_graph::{
    ImportSet, get_less_dependencies, is_less_file, resolve, sorted_imports,
};
pub use locator::{FileLocator, RootLocator};

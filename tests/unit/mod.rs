//! Unit test suite for cssbundle
//!
//! Library-level tests exercising several modules together without going
//! through the binary.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod compressor_tests;
mod import_graph_tests;

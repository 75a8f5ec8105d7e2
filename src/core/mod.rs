//! Core types shared across cssbundle
//!
//! - [`BundleError`] - every failure mode of the pipeline
//! - [`ErrorContext`] - user-friendly wrapper with suggestions for the CLI
//! - [`user_friendly_error`] - convert any `anyhow::Error` for display

pub mod error;

pub use error::{BundleError, ErrorContext, user_friendly_error};

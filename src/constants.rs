//! Global constants used throughout the cssbundle codebase.
//!
//! File names, extensions and cache-key parameters live here so that the
//! resolver, the fingerprint code and the CLI agree on them.

/// Name of the project configuration file searched for by the CLI.
pub const CONFIG_FILE_NAME: &str = "cssbundle.toml";

/// Environment variable overriding `bundle.enabled`.
pub const ENABLED_ENV_VAR: &str = "CSSBUNDLE_ENABLED";

/// Extension of the recursive-import preprocessor format.
///
/// Files with this extension get their transitive `@import`s folded into the
/// fingerprint.
pub const LESS_EXTENSION: &str = "less";

/// Default static URL prefix stripped from `href`s.
pub const DEFAULT_STATIC_URL: &str = "/static/";

/// Default output prefix (also part of the cache key).
pub const DEFAULT_OUTPUT_PREFIX: &str = "css";

/// Prefix of every cache key produced by [`crate::bundle::Fingerprint::cache_key`].
pub const CACHE_KEY_PREFIX: &str = "cssbundle";

/// Number of hex characters kept from the cache-key digest.
pub const CACHE_KEY_DIGEST_LEN: usize = 12;

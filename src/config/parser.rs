//! Generic TOML parsing with file path context.
//!
//! ```rust,no_run
//! use cssbundle_cli::config::parse_config;
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Deserialize)]
//! struct MyConfig {
//!     name: String,
//! }
//!
//! # fn example() -> Result<(), cssbundle_cli::core::BundleError> {
//! let config: MyConfig = parse_config(Path::new("cssbundle.toml"))?;
//! println!("{}", config.name);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use crate::core::BundleError;

/// Parse a TOML configuration file into `T`.
///
/// # Errors
///
/// - [`BundleError::FileResolution`] when the file cannot be read
/// - [`BundleError::ConfigParseError`] when the TOML is invalid or does not
///   match `T`
pub fn parse_config<T>(path: &Path) -> Result<T, BundleError>
where
    T: serde::de::DeserializeOwned,
{
    let content = crate::utils::read_text_file(path)?;

    toml::from_str(&content).map_err(|e| BundleError::ConfigParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

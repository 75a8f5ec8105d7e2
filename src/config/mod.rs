//! Configuration management for cssbundle
//!
//! - `settings` - [`BundleSettings`], loaded from `cssbundle.toml`
//! - `parser` - generic TOML parsing with file context
//!
//! Settings are looked up from the current directory upwards, the same way a
//! project manifest is found. See [`BundleSettings::load`].

mod parser;
mod settings;

pub use parser::parse_config;
pub use settings::BundleSettings;

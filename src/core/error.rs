//! Error handling for cssbundle
//!
//! This module provides the error type shared by every stage of the bundling
//! pipeline and the user-facing wrapper the CLI prints. The error system is
//! designed around two principles:
//! 1. **Strongly-typed errors** so library callers can decide whether to abort
//!    a bundle or degrade (e.g. skip one reference)
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Error Categories
//!
//! - **Configuration**: [`BundleError::AbsoluteImport`], [`BundleError::ConfigError`],
//!   [`BundleError::ConfigParseError`]
//! - **File resolution**: [`BundleError::FileResolution`], [`BundleError::UncompressableUrl`]
//! - **Markup**: [`BundleError::MissingAttribute`]
//!
//! Malformed `@import` lines are not errors: import detection is a textual
//! heuristic and non-matching lines are skipped.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cssbundle_cli::core::{BundleError, user_friendly_error};
//!
//! let err = BundleError::AbsoluteImport {
//!     import: "/abs/theme.less".to_string(),
//!     importer: "static/site.less".into(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(err));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving, fingerprinting and grouping stylesheets.
#[derive(Error, Debug)]
pub enum BundleError {
    /// An `@import` declared an absolute path.
    ///
    /// Imports must be relative to the importing file. This aborts the whole
    /// bundle because its cache key would otherwise be incomplete.
    #[error("Absolute import '{import}' in {}", importer.display())]
    AbsoluteImport {
        /// The path as written in the import statement
        import: String,
        /// The file containing the import
        importer: PathBuf,
    },

    /// A referenced or imported file could not be located or opened.
    #[error("Cannot resolve file {}: {reason}", path.display())]
    FileResolution {
        /// The path that failed to resolve
        path: PathBuf,
        /// Why it failed (usually the underlying IO error)
        reason: String,
    },

    /// A stylesheet URL is outside the configured static URL prefix.
    #[error("'{url}' isn't accessible via the configured URL ('{base_url}') and can't be bundled")]
    UncompressableUrl {
        /// The `href` found in the markup
        url: String,
        /// The configured URL prefix
        base_url: String,
    },

    /// A stylesheet element lacks an attribute it cannot be bundled without.
    #[error("<{element}> element is missing its '{attribute}' attribute")]
    MissingAttribute {
        /// Element name
        element: String,
        /// Attribute name
        attribute: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file syntax in {}", file.display())]
    ConfigParseError {
        /// Path to the configuration file
        file: PathBuf,
        /// Parser message
        reason: String,
    },
}

impl BundleError {
    /// Build a [`BundleError::FileResolution`] from a path and an IO error.
    pub fn file_resolution(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::FileResolution {
            path: path.into(),
            reason: source.to_string(),
        }
    }

    /// Whether the error stems from configuration rather than the filesystem.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::AbsoluteImport { .. } | Self::ConfigError { .. } | Self::ConfigParseError { .. }
        )
    }
}

/// Error wrapper carrying a suggestion and details for terminal output.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: BundleError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: BundleError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr in colour.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion.
///
/// Walks the error chain looking for a [`BundleError`] so errors wrapped with
/// `anyhow` context still get a tailored message. Anything else is reported
/// as a configuration error carrying the full chain as details.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(bundle_error) = cause.downcast_ref::<BundleError>() {
            return create_error_context(bundle_error);
        }
    }

    let chain = error.chain().map(ToString::to_string).collect::<Vec<_>>().join(": ");
    ErrorContext::new(BundleError::ConfigError {
        message: error.to_string(),
    })
    .with_details(chain)
}

fn create_error_context(error: &BundleError) -> ErrorContext {
    match error {
        BundleError::AbsoluteImport {
            import,
            importer,
        } => ErrorContext::new(BundleError::AbsoluteImport {
            import: import.clone(),
            importer: importer.clone(),
        })
        .with_suggestion("Rewrite the @import with a path relative to the importing file")
        .with_details("Absolute imports make the cache key incomplete, so the bundle was aborted"),
        BundleError::FileResolution {
            path,
            reason,
        } => ErrorContext::new(BundleError::FileResolution {
            path: path.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Check that the file exists under the configured root and is readable"),
        BundleError::UncompressableUrl {
            url,
            base_url,
        } => ErrorContext::new(BundleError::UncompressableUrl {
            url: url.clone(),
            base_url: base_url.clone(),
        })
        .with_suggestion(format!("Serve the stylesheet from a URL starting with '{base_url}'")),
        BundleError::MissingAttribute {
            element,
            attribute,
        } => ErrorContext::new(BundleError::MissingAttribute {
            element: element.clone(),
            attribute: attribute.clone(),
        })
        .with_suggestion(format!("Add a {attribute} attribute to the <{element}> element")),
        BundleError::ConfigError {
            message,
        } => ErrorContext::new(BundleError::ConfigError {
            message: message.clone(),
        }),
        BundleError::ConfigParseError {
            file,
            reason,
        } => ErrorContext::new(BundleError::ConfigParseError {
            file: file.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Check the TOML syntax of the configuration file")
        .with_details(reason.clone()),
    }
}

//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while building the binary's configuration.
///
/// The library never produces it; embedders configure
/// [`ClientConfig`](crate::api::ClientConfig) directly.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file named by `--config` (or the default one) is unreadable.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `chargily init` could not write the template.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A value the command needs was given neither on the command line nor in the file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// `base_url` does not parse or cannot carry path segments.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid mode value.
    #[error("Invalid mode '{value}': expected live or test")]
    InvalidMode {
        /// The invalid value provided
        value: String,
    },

    /// Invalid page size.
    #[error("Invalid per_page: must be greater than 0")]
    InvalidPerPage,
}

/// Field names reported by `MissingRequired`.
pub mod field {
    /// The API key field.
    pub const API_KEY: &str = "api_key";
    /// The webhook secret field.
    pub const WEBHOOK_SECRET: &str = "webhook_secret";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}

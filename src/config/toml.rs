//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API client section
    #[serde(default)]
    pub client: ClientSection,

    /// Webhook verification section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// List command section
    #[serde(default)]
    pub list: ListSection,
}

/// API client configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// Secret API key
    pub api_key: Option<String>,

    /// "live" or "test"
    pub mode: Option<String>,

    /// Base URL override
    pub base_url: Option<String>,
}

/// Webhook verification section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Secret used to sign webhook bodies
    pub secret: Option<String>,

    /// Prefix in front of the hex digest (default: none)
    pub signature_prefix: Option<String>,
}

/// List command section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListSection {
    /// Page size for list commands
    pub per_page: Option<u32>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Chargily Pay Configuration File
# Documentation: https://dev.chargily.com/pay-v2/introduction

[client]
# Secret API key (required for API commands, can be overridden by --api-key)
# api_key = "test_sk_..."

# API environment: "live" or "test" (default: live)
# mode = "test"

# Base URL override (default depends on mode)
# live: https://pay.chargily.net/api/v2
# test: https://pay.chargily.net/test/api/v2
# base_url = "https://pay.chargily.net/test/api/v2"

[webhook]
# Secret used to verify webhook signatures (required for 'verify')
# Chargily signs webhooks with your secret API key
# secret = "test_sk_..."

# Prefix in front of the hex digest (default: none)
# signature_prefix = ""

[list]
# Page size for list commands (default: 10)
per_page = 10
"#
    .to_string()
}

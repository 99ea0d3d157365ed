//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use url::Url;

use crate::api::{ClientConfig, Mode};
use crate::webhook::SignatureVerifier;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// The API key and webhook secret are optional here because each is only
/// needed by some commands; [`client_config`](Self::client_config) and
/// [`verifier`](Self::verifier) report them missing on demand.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Secret API key
    pub api_key: Option<SecretString>,

    /// API environment
    pub mode: Mode,

    /// Base URL requests resolve against
    pub base_url: Url,

    /// Webhook signing secret
    pub webhook_secret: Option<SecretString>,

    /// Prefix in front of webhook signatures
    pub signature_prefix: String,

    /// Page size for list commands
    pub per_page: u32,

    /// Verbose logging enabled
    pub verbose: bool,

    /// Config file the values were read from, if any
    pub config_file: Option<PathBuf>,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ mode: {}, base_url: {}, api_key: {}, webhook_secret: {}, per_page: {}, file: {} }}",
            self.mode,
            self.base_url,
            presence(self.api_key.as_ref()),
            presence(self.webhook_secret.as_ref()),
            self.per_page,
            self.config_file
                .as_ref()
                .map_or_else(|| "none".to_string(), |p| p.display().to_string()),
        )
    }
}

fn presence(secret: Option<&SecretString>) -> &'static str {
    if secret.is_some() { "set" } else { "unset" }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mode is not `live` or `test`
    /// - The base URL is invalid
    /// - `per_page` is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let mode = Self::resolve_mode(cli, toml)?;

        // An explicit base URL wins over the one implied by the mode
        let base_url = Self::resolve_base_url(cli, toml, mode)?;

        let api_key = cli
            .api_key
            .clone()
            .or_else(|| toml.and_then(|t| t.client.api_key.clone()))
            .filter(|key| !key.is_empty())
            .map(SecretString::new);

        let webhook_secret = cli
            .webhook_secret
            .clone()
            .or_else(|| toml.and_then(|t| t.webhook.secret.clone()))
            .filter(|secret| !secret.is_empty())
            .map(SecretString::new);

        let signature_prefix = toml
            .and_then(|t| t.webhook.signature_prefix.clone())
            .unwrap_or_else(|| defaults::SIGNATURE_PREFIX.to_string());

        let per_page = Self::resolve_per_page(cli, toml)?;

        Ok(Self {
            api_key,
            mode,
            base_url,
            webhook_secret,
            signature_prefix,
            per_page,
            verbose: cli.verbose,
            config_file: None,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path. Otherwise
    /// the platform default ([`defaults::config_path`]) is used when it exists.
    /// The path read is kept in [`config_file`](Self::config_file) so it can
    /// be logged once tracing is up.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| defaults::config_path().filter(|p| p.is_file()));

        let toml = path.as_deref().map(TomlConfig::load).transpose()?;

        Ok(Self {
            config_file: path,
            ..Self::from_raw(cli, toml.as_ref())?
        })
    }

    /// Builds the API client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if no API key was given.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            ConfigError::missing(
                field::API_KEY,
                "Use --api-key or set client.api_key in config file",
            )
        })?;

        Ok(ClientConfig::with_secret(api_key, self.mode).with_base_url(self.base_url.clone()))
    }

    /// Builds the webhook signature verifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if no webhook secret was given.
    pub fn verifier(&self) -> Result<SignatureVerifier, ConfigError> {
        let secret = self.webhook_secret.clone().ok_or_else(|| {
            ConfigError::missing(
                field::WEBHOOK_SECRET,
                "Use --webhook-secret or set webhook.secret in config file",
            )
        })?;

        Ok(SignatureVerifier::from_secret(secret).with_prefix(self.signature_prefix.clone()))
    }

    fn resolve_mode(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Mode, ConfigError> {
        // CLI takes precedence
        if let Some(mode) = cli.mode {
            return Ok(mode.into());
        }

        // Fall back to TOML
        if let Some(ref value) = toml.and_then(|t| t.client.mode.clone()) {
            return value.parse::<Mode>().map_err(|_| ConfigError::InvalidMode {
                value: value.clone(),
            });
        }

        Ok(defaults::MODE)
    }

    fn resolve_base_url(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        mode: Mode,
    ) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > mode default
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.base_url.as_deref()))
            .unwrap_or(mode.base_url());

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "cannot be used as a base URL".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_per_page(cli: &Cli, toml: Option<&TomlConfig>) -> Result<u32, ConfigError> {
        // Priority: CLI explicit (on list/items) > TOML > default
        let per_page = cli
            .command
            .per_page()
            .or_else(|| toml.and_then(|t| t.list.per_page))
            .unwrap_or(defaults::PER_PAGE);

        if per_page == 0 {
            return Err(ConfigError::InvalidPerPage);
        }

        Ok(per_page)
    }
}

/// Writes the default configuration template to a file.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |e: std::io::Error| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(write_error)
}

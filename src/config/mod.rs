//! Configuration layer for the `chargily` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! The library itself never reads configuration; embedders build a
//! [`ClientConfig`](crate::api::ClientConfig) directly.
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - `--config`, or `<config_dir>/chargily/config.toml` if present
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! `base_url` defaults to the URL of the resolved mode, so `--mode test`
//! alone switches to the sandbox. An explicit base URL is used as is.
//!
//! # Secrets
//!
//! The API key and webhook secret are wrapped in
//! [`SecretString`](secrecy::SecretString) as soon as they are read and are
//! never printed by `Debug` or `Display`.
//!
//! # TOML-Only Options
//!
//! - `webhook.signature_prefix` (default: empty)

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, ItemsOwnerArg, ModeArg, ResourceArg};
pub use error::{ConfigError, field};
pub use toml::{ClientSection, ListSection, TomlConfig, WebhookSection, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};

//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::api::{DEFAULT_PER_PAGE, Mode};
use crate::webhook::DEFAULT_SIGNATURE_PREFIX;

/// Default API mode.
pub const MODE: Mode = Mode::Live;

/// Default page size for list commands.
pub const PER_PAGE: u32 = DEFAULT_PER_PAGE;

/// Default prefix in front of webhook signatures.
pub const SIGNATURE_PREFIX: &str = DEFAULT_SIGNATURE_PREFIX;

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "chargily";

/// File name of the default configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration file location, if the platform has a config dir.
///
/// `~/.config/chargily/config.toml` on Linux.
#[must_use]
pub fn config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

//! API mode and the base URL each mode targets.

use std::fmt;
use std::str::FromStr;

/// Base URL of the live API.
pub const LIVE_BASE_URL: &str = "https://pay.chargily.net/api/v2";

/// Base URL of the test API.
pub const TEST_BASE_URL: &str = "https://pay.chargily.net/test/api/v2";

/// Which Chargily environment a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Real payments
    #[default]
    Live,
    /// Sandbox with test cards
    Test,
}

impl Mode {
    /// Returns the fixed base URL for this mode.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Live => LIVE_BASE_URL,
            Self::Test => TEST_BASE_URL,
        }
    }

    /// Returns the lowercase name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid mode '{0}': expected live or test")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" | "prod" | "production" => Ok(Self::Live),
            "test" | "sandbox" => Ok(Self::Test),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

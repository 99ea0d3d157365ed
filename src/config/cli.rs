//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::api::Mode;

/// Chargily Pay command-line client
///
/// Queries the Chargily Pay v2 API and verifies webhook signatures.
#[derive(Debug, Parser)]
#[command(name = "chargily")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Secret API key (test_sk_... or live_sk_...)
    #[arg(long = "api-key", global = true)]
    pub api_key: Option<String>,

    /// API environment to target
    #[arg(long, value_enum, global = true)]
    pub mode: Option<ModeArg>,

    /// Override the API base URL
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Secret used to verify webhook signatures
    #[arg(long = "webhook-secret", global = true)]
    pub webhook_secret: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for chargily
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "chargily.toml")]
        output: PathBuf,
    },

    /// Show the account balance
    Balance,

    /// List the objects of a resource
    List {
        /// Resource to list
        #[arg(value_enum)]
        resource: ResourceArg,

        /// Number of objects per page
        #[arg(long = "per-page")]
        per_page: Option<u32>,
    },

    /// Fetch a single object by identifier
    Get {
        /// Resource the identifier belongs to
        #[arg(value_enum)]
        resource: ResourceArg,

        /// Object identifier
        id: String,
    },

    /// List the items of a checkout or payment link, or the prices of a product
    Items {
        /// Owner of the items
        #[arg(value_enum)]
        owner: ItemsOwnerArg,

        /// Owner identifier
        id: String,

        /// Number of items per page
        #[arg(long = "per-page")]
        per_page: Option<u32>,
    },

    /// Expire a pending checkout
    ExpireCheckout {
        /// Checkout identifier
        id: String,
    },

    /// Verify the signature of a webhook body
    Verify {
        /// File holding the raw request body
        #[arg(long)]
        payload: PathBuf,

        /// Value of the `signature` header
        #[arg(long)]
        signature: String,
    },
}

/// Mode argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Real payments
    Live,
    /// Sandbox environment
    Test,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Live => Self::Live,
            ModeArg::Test => Self::Test,
        }
    }
}

/// API resource argument for `list` and `get`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceArg {
    #[value(name = "customers", alias = "customer")]
    Customers,
    #[value(name = "products", alias = "product")]
    Products,
    #[value(name = "prices", alias = "price")]
    Prices,
    #[value(name = "checkouts", alias = "checkout")]
    Checkouts,
    #[value(name = "payment-links", alias = "payment-link")]
    PaymentLinks,
}

/// Owner argument for `items`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ItemsOwnerArg {
    /// Items of a checkout
    Checkout,
    /// Items of a payment link
    #[value(name = "payment-link")]
    PaymentLink,
    /// Prices of a product
    Product,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags, missing values or a missing subcommand.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}

impl Command {
    /// Returns the `--per-page` value of paginated commands.
    #[must_use]
    pub const fn per_page(&self) -> Option<u32> {
        match self {
            Self::List { per_page, .. } | Self::Items { per_page, .. } => *per_page,
            _ => None,
        }
    }
}

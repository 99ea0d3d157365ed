//! Process-level plumbing for the `chargily` binary: exit codes, logging
//! and hints printed after configuration errors.

use chargily_pay::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit codes returned by `chargily`.
pub mod exit_code {
    use std::process::ExitCode;

    /// The command completed.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad arguments or config file, or a required secret is missing (exit code 1).
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The API call or signature check failed (exit code 2).
    ///
    /// `ExitCode::from` is not `const`, hence a function.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints a follow-up hint on stderr for errors a user can fix locally.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::API_KEY => {
            eprintln!("\nFind your secret key in the Chargily Pay dashboard under Developers Corner.");
            eprintln!("Run 'chargily init' to generate a configuration template.");
        }
        ConfigError::MissingRequired { field: f, .. } if *f == field::WEBHOOK_SECRET => {
            eprintln!("\nChargily signs webhooks with the secret API key of the account.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'chargily init' to generate a configuration template.");
        }
        ConfigError::InvalidMode { .. } => {
            eprintln!("\nUse 'test' with test_sk_ keys and 'live' with live_sk_ keys.");
        }
        _ => {}
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default level (INFO, or DEBUG with `--verbose`).
/// Output goes to stderr; stdout is reserved for command results.
pub fn setup_tracing(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

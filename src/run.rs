//! Application execution logic.
//!
//! This module maps each subcommand onto a client or verifier call and
//! prints the result as pretty JSON.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use chargily_pay::api::{ApiError, ChargilyClient};
use chargily_pay::config::{Command, ConfigError, ItemsOwnerArg, ResourceArg, ValidatedConfig};
use chargily_pay::transport::HttpClient;
use chargily_pay::webhook::{SignatureError, SignatureVerifier};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// A value needed by this command is missing from the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The webhook signature did not verify.
    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// Failed to read the webhook body file.
    #[error("Failed to read payload file '{}': {source}", path.display())]
    PayloadRead {
        /// Path to the payload file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to render the result.
    #[error("Failed to render output: {0}")]
    Output(#[source] serde_json::Error),
}

/// Executes one subcommand and prints its result.
///
/// # Errors
///
/// Returns an error if:
/// - The API key (or webhook secret, for `verify`) is missing
/// - The API call fails
/// - The webhook payload cannot be read or its signature does not match
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: &ValidatedConfig, command: &Command) -> Result<(), RunError> {
    let output = if let Command::Verify { payload, signature } = command {
        verify_payload(&config.verifier()?, payload, signature)?
    } else {
        let client = ChargilyClient::from_config(config.client_config()?);
        tracing::debug!("Using {} API at {}", config.mode, config.base_url);
        dispatch(&client, command, config.per_page).await?
    };

    let rendered = serde_json::to_string_pretty(&output).map_err(RunError::Output)?;
    println!("{rendered}");
    Ok(())
}

/// Runs an API subcommand against `client` and returns the response as JSON.
///
/// `init` and `verify` need no client and yield `Value::Null`.
pub async fn dispatch<H: HttpClient>(
    client: &ChargilyClient<H>,
    command: &Command,
    per_page: u32,
) -> Result<Value, RunError> {
    let per_page = Some(per_page);

    match command {
        Command::Balance => to_json(&client.get_balance().await?),
        Command::List { resource, .. } => match resource {
            ResourceArg::Customers => to_json(&client.list_customers(per_page).await?),
            ResourceArg::Products => to_json(&client.list_products(per_page).await?),
            ResourceArg::Prices => to_json(&client.list_prices(per_page).await?),
            ResourceArg::Checkouts => to_json(&client.list_checkouts(per_page).await?),
            ResourceArg::PaymentLinks => to_json(&client.list_payment_links(per_page).await?),
        },
        Command::Get { resource, id } => match resource {
            ResourceArg::Customers => to_json(&client.get_customer(id).await?),
            ResourceArg::Products => to_json(&client.get_product(id).await?),
            ResourceArg::Prices => to_json(&client.get_price(id).await?),
            ResourceArg::Checkouts => to_json(&client.get_checkout(id).await?),
            ResourceArg::PaymentLinks => to_json(&client.get_payment_link(id).await?),
        },
        Command::Items { owner, id, .. } => match owner {
            ItemsOwnerArg::Checkout => to_json(&client.get_checkout_items(id, per_page).await?),
            ItemsOwnerArg::PaymentLink => {
                to_json(&client.get_payment_link_items(id, per_page).await?)
            }
            ItemsOwnerArg::Product => to_json(&client.get_product_prices(id, per_page).await?),
        },
        Command::ExpireCheckout { id } => {
            let checkout = client.expire_checkout(id).await?;
            tracing::info!("Checkout {} is now {:?}", checkout.id, checkout.status);
            to_json(&checkout)
        }
        Command::Init { .. } | Command::Verify { .. } => Ok(Value::Null),
    }
}

/// Verifies a webhook body stored in `path` and returns the parsed event.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the signature is empty or
/// wrong, or the verified body is not an event.
pub fn verify_payload(
    verifier: &SignatureVerifier,
    path: &Path,
    signature: &str,
) -> Result<Value, RunError> {
    let payload = std::fs::read(path).map_err(|e| RunError::PayloadRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let event = verifier.verify_event(&payload, signature)?;
    tracing::info!("Signature valid for event {} ({:?})", event.id, event.event_type);

    to_json(&event)
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, RunError> {
    serde_json::to_value(value).map_err(RunError::Output)
}

//! Chargily Pay: client for the Chargily Pay v2 REST API
//!
//! A library for calling the Chargily Pay API (balance, customers,
//! products, prices, checkouts and payment links) and for authenticating
//! webhook requests it sends back.
//!
//! ```no_run
//! use chargily_pay::api::{ChargilyClient, Mode};
//!
//! # async fn example() -> Result<(), chargily_pay::api::ApiError> {
//! let client = ChargilyClient::new("test_sk_...", Mode::Test);
//! let balance = client.get_balance().await?;
//! println!("{} wallets", balance.wallets.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod transport;
pub mod webhook;

pub use api::{ApiError, ChargilyClient, ClientConfig, Mode};
pub use webhook::{SignatureError, verify_signature};

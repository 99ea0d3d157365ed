//! Chargily Pay API client.
//!
//! This module provides:
//! - The client and its dispatcher ([`ChargilyClient`], [`ClientConfig`])
//! - Environment selection ([`Mode`])
//! - Request descriptors ([`ApiRequest`], [`Endpoint`])
//! - Error types ([`ApiError`], [`ValidationError`])
//!
//! Resource operations are defined as inherent methods on
//! [`ChargilyClient`], one file per resource. They differ only in path,
//! verb and body; checkout creation alone adds local validation.
//!
//! # Pagination
//!
//! List operations fetch a single page sized by `per_page` (default
//! [`DEFAULT_PER_PAGE`]). The client never follows `next_page_url`.

mod balance;
mod checkouts;
mod client;
mod customers;
mod endpoint;
mod error;
mod mode;
mod payment_links;
mod prices;
mod products;
mod request;

#[cfg(test)]
mod resources_tests;
#[cfg(test)]
mod test_fixtures;

pub use checkouts::validate_checkout;
pub use client::{ChargilyClient, ClientConfig};
pub use endpoint::{DEFAULT_PER_PAGE, Endpoint};
pub use error::{ApiError, ValidationError};
pub use mode::{LIVE_BASE_URL, Mode, ParseModeError, TEST_BASE_URL};
pub use request::ApiRequest;

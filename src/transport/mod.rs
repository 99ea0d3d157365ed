//! Transport layer for talking HTTP to the Chargily API.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The client abstraction ([`HttpClient`])
//! - The production implementation ([`ReqwestClient`])

mod client;
mod error;
mod message;


pub use client::ReqwestClient;
pub use error::TransportError;
pub use message::{HttpClient, HttpRequest, HttpResponse};

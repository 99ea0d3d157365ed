//! Webhook authentication for requests posted by Chargily.
//!
//! This module provides:
//! - Signature verification ([`verify_signature`], [`SignatureVerifier`])
//! - Signature generation for tests and local simulation ([`sign_payload`])
//! - The event body ([`WebhookEvent`], [`WebhookEventType`])
//!
//! # Missing vs. wrong signatures
//!
//! An empty signature is reported as `Ok(false)`; a signature that is
//! present but wrong is an error ([`SignatureError::Mismatch`]). Callers
//! should reject the request in both cases.

mod error;
mod event;
mod signature;


pub use error::SignatureError;
pub use event::{WebhookEvent, WebhookEventType};
pub use signature::{
    DEFAULT_SIGNATURE_PREFIX, SIGNATURE_HEADER, SignatureVerifier, sign_payload, verify_signature,
};

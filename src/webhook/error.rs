//! Error types for webhook verification.

use thiserror::Error;

/// Error type for webhook signature verification.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// A signature was supplied but does not match the payload, including
    /// when its length differs from the expected digest.
    #[error("The signature is invalid")]
    Mismatch,

    /// No signature was supplied where an event was expected.
    ///
    /// Only returned by [`SignatureVerifier::verify_event`](super::SignatureVerifier::verify_event);
    /// plain verification reports a missing signature as `Ok(false)`.
    #[error("The webhook request carries no signature")]
    Missing,

    /// The signature matched but the body is not a webhook event.
    #[error("Invalid webhook payload: {0}")]
    Payload(#[source] serde_json::Error),
}

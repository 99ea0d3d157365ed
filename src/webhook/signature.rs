//! HMAC-SHA256 webhook signature verification.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::{SignatureError, WebhookEvent};

type HmacSha256 = Hmac<Sha256>;

/// Header Chargily delivers the webhook signature in.
pub const SIGNATURE_HEADER: &str = "signature";

/// Scheme prefix expected in front of the hex digest.
///
/// Chargily currently sends the bare digest. Use
/// [`SignatureVerifier::with_prefix`] if a sender adds one (e.g. `sha256=`).
pub const DEFAULT_SIGNATURE_PREFIX: &str = "";

/// Computes the hex-encoded HMAC-SHA256 of `payload` under `secret_key`.
///
/// This is the value a sender puts in the [`SIGNATURE_HEADER`] header.
#[must_use]
pub fn sign_payload(payload: &[u8], secret_key: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret_key).expect("HMAC accepts keys of any length");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a webhook signature with the default (empty) prefix.
///
/// `payload` must be the raw request body exactly as received; a body
/// re-serialized from parsed JSON will generally not match.
///
/// Returns `Ok(false)` without computing anything when `signature` is
/// empty, and `Ok(true)` when it matches.
///
/// # Errors
///
/// Returns [`SignatureError::Mismatch`] when a signature is supplied but
/// differs from the expected digest in length or content.
///
/// # Example
///
/// ```
/// use chargily_pay::webhook::{sign_payload, verify_signature};
///
/// let body = br#"{"id":"evt_1","type":"checkout.paid"}"#;
/// let signature = sign_payload(body, b"secret");
///
/// assert!(verify_signature(body, &signature, "secret").unwrap());
/// assert!(!verify_signature(body, "", "secret").unwrap());
/// assert!(verify_signature(body, &signature, "other-secret").is_err());
/// ```
pub fn verify_signature(
    payload: &[u8],
    signature: &str,
    secret_key: &str,
) -> Result<bool, SignatureError> {
    verify_with_prefix(
        payload,
        signature,
        secret_key.as_bytes(),
        DEFAULT_SIGNATURE_PREFIX,
    )
}

fn verify_with_prefix(
    payload: &[u8],
    signature: &str,
    secret_key: &[u8],
    prefix: &str,
) -> Result<bool, SignatureError> {
    if signature.is_empty() {
        return Ok(false);
    }

    let expected = format!("{prefix}{}", sign_payload(payload, secret_key));
    let supplied = signature.as_bytes();

    if expected.len() != supplied.len() || !bool::from(expected.as_bytes().ct_eq(supplied)) {
        tracing::debug!("Webhook signature mismatch");
        return Err(SignatureError::Mismatch);
    }

    tracing::debug!("Webhook signature verified");
    Ok(true)
}

/// Verifier bound to one webhook secret.
///
/// Keeps the secret out of `Debug` output and lets the signature prefix be
/// configured once instead of per call.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    secret: SecretString,
    prefix: String,
}

impl SignatureVerifier {
    /// Creates a verifier with the default (empty) prefix.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self::from_secret(SecretString::new(secret.into()))
    }

    /// Creates a verifier from an already wrapped secret.
    #[must_use]
    pub fn from_secret(secret: SecretString) -> Self {
        Self {
            secret,
            prefix: DEFAULT_SIGNATURE_PREFIX.to_string(),
        }
    }

    /// Sets the prefix expected in front of the hex digest.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Returns the configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Produces the signature, prefix included, a sender would attach to `payload`.
    #[must_use]
    pub fn sign(&self, payload: &[u8]) -> String {
        format!(
            "{}{}",
            self.prefix,
            sign_payload(payload, self.secret.expose_secret().as_bytes())
        )
    }

    /// Verifies `signature` for `payload`; same contract as [`verify_signature`].
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::Mismatch`] for a wrong signature.
    pub fn verify(&self, payload: &[u8], signature: &str) -> Result<bool, SignatureError> {
        verify_with_prefix(
            payload,
            signature,
            self.secret.expose_secret().as_bytes(),
            &self.prefix,
        )
    }

    /// Verifies `signature` and parses `payload` as a [`WebhookEvent`].
    ///
    /// # Errors
    ///
    /// - [`SignatureError::Missing`] if `signature` is empty
    /// - [`SignatureError::Mismatch`] for a wrong signature
    /// - [`SignatureError::Payload`] if the verified body is not an event
    pub fn verify_event(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<WebhookEvent, SignatureError> {
        if !self.verify(payload, signature)? {
            return Err(SignatureError::Missing);
        }

        WebhookEvent::from_slice(payload)
    }
}

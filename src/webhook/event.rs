//! Webhook event body.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::Checkout;

use super::SignatureError;

/// Kind of event announced by a webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "checkout.paid")]
    CheckoutPaid,
    #[serde(rename = "checkout.failed")]
    CheckoutFailed,
    #[serde(rename = "checkout.canceled")]
    CheckoutCanceled,
    #[serde(rename = "checkout.expired")]
    CheckoutExpired,
    /// An event type this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl WebhookEventType {
    /// Returns true for events whose `data` is a checkout.
    #[must_use]
    pub const fn is_checkout(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Event posted by Chargily to a webhook endpoint.
///
/// Parse it only after the signature has been verified against the raw
/// body; [`SignatureVerifier::verify_event`](super::SignatureVerifier::verify_event)
/// does both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event identifier, e.g. `evt_01hj...`
    pub id: String,
    /// Object kind, `"event"` for webhooks
    #[serde(default)]
    pub entity: String,
    /// Sent as a boolean or as the string `"true"`/`"false"`
    #[serde(default, deserialize_with = "bool_or_string")]
    pub livemode: bool,
    /// What happened, from the `type` field
    #[serde(rename = "type")]
    pub event_type: WebhookEventType,
    /// The object the event is about, usually a checkout
    #[serde(default)]
    pub data: serde_json::Value,
    /// Unix timestamp in seconds, `0` when absent
    #[serde(default)]
    pub created_at: i64,
    /// Unix timestamp in seconds, `0` when absent
    #[serde(default)]
    pub updated_at: i64,
}

impl WebhookEvent {
    /// Parses an event from a raw webhook body.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::Payload`] if the body is not an event.
    pub fn from_slice(payload: &[u8]) -> Result<Self, SignatureError> {
        serde_json::from_slice(payload).map_err(SignatureError::Payload)
    }

    /// Interprets `data` as a checkout.
    ///
    /// # Errors
    ///
    /// Returns the decoding error if `data` is not a checkout object.
    pub fn checkout(&self) -> Result<Checkout, serde_json::Error> {
        Checkout::deserialize(&self.data)
    }
}

fn bool_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Bool(value) => Ok(value),
        Raw::Text(text) => match text.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(D::Error::custom(format!(
                "invalid livemode '{other}': expected true or false"
            ))),
        },
    }
}

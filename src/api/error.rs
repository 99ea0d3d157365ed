//! Error types for API calls.

use thiserror::Error;

use crate::transport::TransportError;

/// Error type for a single API call.
///
/// Each variant is a distinct failure kind; nothing is retried or
/// recovered inside the client, so callers decide retry policy from the
/// variant (see [`ApiError::status`]).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected locally before any network call.
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// The API answered with a non-2xx status. The body is not parsed.
    #[error("API request failed with status {}: {status_text}", .status.as_u16())]
    Http {
        /// Status code received
        status: http::StatusCode,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// No response was obtained.
    #[error("Failed to make API request: {0}")]
    Transport(#[from] TransportError),

    /// A 2xx response body was not the expected JSON.
    #[error("Failed to decode API response: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The endpoint could not be joined onto the base URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The API key contains bytes that are not allowed in a header.
    #[error("API key is not a valid header value")]
    InvalidApiKey,
}

impl ApiError {
    /// Returns the HTTP status for [`ApiError::Http`], `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request was rejected before being sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Local precondition violations for checkout creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `success_url` does not start with `http`.
    #[error("Invalid success_url '{url}', it must begin with http or https")]
    InvalidSuccessUrl {
        /// The rejected URL
        url: String,
    },

    /// Neither `items` nor both `amount` and `currency` were given.
    #[error("The items field is required when amount and currency are not present")]
    MissingItemsOrAmount,
}

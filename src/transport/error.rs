//! Error types for the transport layer.

use thiserror::Error;

/// Failure to complete an HTTP round trip.
///
/// Raised when no HTTP response was obtained at all. A response with a
/// non-success status is not a transport failure; that is reported by the
/// API layer instead.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

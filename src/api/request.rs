//! Request descriptor handed to the dispatcher.

use http::Method;
use serde::Serialize;

use super::{ApiError, Endpoint};

/// One API call: verb, endpoint and optional JSON body.
///
/// Built per call and consumed by [`ChargilyClient::execute`](super::ChargilyClient::execute).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Target endpoint relative to the base URL
    pub endpoint: Endpoint,
    /// Serialized JSON body, if any
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Creates a request without a body.
    #[must_use]
    pub const fn new(method: Method, endpoint: Endpoint) -> Self {
        Self {
            method,
            endpoint,
            body: None,
        }
    }

    /// Creates a GET request, the default verb.
    #[must_use]
    pub const fn get(endpoint: Endpoint) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// Creates a POST request.
    #[must_use]
    pub const fn post(endpoint: Endpoint) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// Creates a PATCH request.
    #[must_use]
    pub const fn patch(endpoint: Endpoint) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub const fn delete(endpoint: Endpoint) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Serializes `body` as JSON and attaches it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if `body` cannot be encoded.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(body).map_err(ApiError::Serialization)?);
        Ok(self)
    }
}

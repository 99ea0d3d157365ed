//! HTTP request/response types and the client trait.

use super::TransportError;

/// An HTTP request to be sent.
///
/// A plain value built by the API layer and handed to any [`HttpClient`]
/// implementation. Uses `http` crate types for method and headers.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PATCH, DELETE)
    pub method: http::Method,
    /// Target URL, including query string
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a header, replacing any previous value with the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// An HTTP response received from a server.
///
/// The body is fully buffered into memory.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the canonical reason phrase for the status, or an empty string.
    #[must_use]
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or_default()
    }
}

/// Trait for making HTTP requests.
///
/// # Design
///
/// The API client is generic over this trait so that:
/// - tests can inject recording mock clients
/// - the HTTP library can be swapped without touching resource methods
///
/// # Example
///
/// ```ignore
/// use chargily_pay::transport::{HttpClient, HttpRequest, HttpResponse, TransportError};
///
/// struct CannedClient {
///     response: HttpResponse,
/// }
///
/// impl HttpClient for CannedClient {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// A response is returned for every status code; only failures to
    /// obtain a response are errors.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when:
    /// - Network connection fails ([`TransportError::Connection`])
    /// - Request times out ([`TransportError::Timeout`])
    /// - URL is rejected by the client ([`TransportError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}

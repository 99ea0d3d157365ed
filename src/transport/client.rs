//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpRequest, HttpResponse, TransportError};

/// Production HTTP client using reqwest.
///
/// Thin wrapper around `reqwest::Client` implementing [`HttpClient`].
/// Inherits reqwest's connection pooling; no timeout is configured unless
/// a custom client is supplied through [`ReqwestClient::from_client`].
///
/// # Example
///
/// ```no_run
/// use chargily_pay::transport::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://pay.chargily.net/test/api/v2/balance")?;
/// let response = client.request(HttpRequest::new(http::Method::GET, url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, proxies, TLS).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(classify)?.to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

fn classify(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(Box::new(e))
    } else if e.is_builder() {
        TransportError::InvalidUrl(e.to_string())
    } else {
        TransportError::Connection(Box::new(e))
    }
}

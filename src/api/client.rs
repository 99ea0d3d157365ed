//! The Chargily API client and its request dispatcher.

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::transport::{HttpClient, HttpRequest, ReqwestClient};

use super::{ApiError, ApiRequest, Mode};

/// Connection settings for one client instance.
///
/// The API key is kept as a [`SecretString`] and never appears in `Debug`
/// output or logs.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: SecretString,
    mode: Mode,
    base_url: Url,
}

impl ClientConfig {
    /// Creates a configuration targeting the fixed base URL of `mode`.
    #[must_use]
    pub fn new(api_key: impl Into<String>, mode: Mode) -> Self {
        Self::with_secret(SecretString::new(api_key.into()), mode)
    }

    /// Creates a configuration from an already wrapped secret.
    #[must_use]
    pub fn with_secret(api_key: SecretString, mode: Mode) -> Self {
        let base_url = Url::parse(mode.base_url()).expect("built-in base URLs are valid");
        Self {
            api_key,
            mode,
            base_url,
        }
    }

    /// Overrides the base URL, e.g. to route through a proxy.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Returns the configured mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Client for the Chargily Pay v2 API.
///
/// Holds immutable configuration and an [`HttpClient`]; every call is a
/// single independent round trip, so one instance can be shared across
/// tasks freely.
///
/// # Example
///
/// ```no_run
/// use chargily_pay::api::{ChargilyClient, Mode};
///
/// # async fn example() -> Result<(), chargily_pay::api::ApiError> {
/// let client = ChargilyClient::new("test_sk_...", Mode::Test);
/// let balance = client.get_balance().await?;
/// println!("{} wallets", balance.wallets.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChargilyClient<H = ReqwestClient> {
    http: H,
    config: ClientConfig,
}

impl ChargilyClient<ReqwestClient> {
    /// Creates a client using the default reqwest transport.
    #[must_use]
    pub fn new(api_key: impl Into<String>, mode: Mode) -> Self {
        Self::from_config(ClientConfig::new(api_key, mode))
    }

    /// Creates a client from a prepared configuration.
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_http_client(config, ReqwestClient::new())
    }
}

impl<H> ChargilyClient<H> {
    /// Creates a client with a custom transport.
    #[must_use]
    pub const fn with_http_client(config: ClientConfig, http: H) -> Self {
        Self { http, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http(&self) -> &H {
        &self.http
    }
}

impl<H: HttpClient> ChargilyClient<H> {
    /// Sends one authenticated request and decodes the JSON response.
    ///
    /// Every request carries `Authorization: Bearer <api_key>` and
    /// `Content-Type: application/json`. A single attempt is made.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] for a non-2xx status (body not parsed)
    /// - [`ApiError::Transport`] when no response was obtained
    /// - [`ApiError::Deserialization`] when a 2xx body is not valid `T`
    /// - [`ApiError::InvalidEndpoint`] / [`ApiError::InvalidApiKey`] when
    ///   the request cannot be built
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let request = self.build_request(request)?;

        tracing::debug!(method = %request.method, url = %request.url, "Sending API request");

        let response = self.http.request(request).await?;

        if !response.is_success() {
            tracing::warn!(
                status = response.status.as_u16(),
                "API request failed with non-success status"
            );
            return Err(ApiError::Http {
                status: response.status,
                status_text: response.status_text().to_string(),
            });
        }

        tracing::debug!(
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "Received API response"
        );

        serde_json::from_slice(&response.body).map_err(ApiError::Deserialization)
    }

    fn build_request(&self, request: ApiRequest) -> Result<HttpRequest, ApiError> {
        let url = request.endpoint.resolve(&self.config.base_url)?;

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", self.config.api_key.expose_secret()))
                .map_err(|_| ApiError::InvalidApiKey)?;
        authorization.set_sensitive(true);

        let mut http_request = HttpRequest::new(request.method, url)
            .with_header(AUTHORIZATION, authorization)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(body) = request.body {
            http_request = http_request.with_body(body);
        }

        Ok(http_request)
    }
}

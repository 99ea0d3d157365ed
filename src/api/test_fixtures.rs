//! Shared fixtures for API client tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::transport::{HttpClient, HttpRequest, HttpResponse, TransportError};

use super::{ChargilyClient, ClientConfig, Mode};

pub const API_KEY: &str = "test_sk_9tcRkxKmAJLRDafkkXKPNEKXqTP4rAwMJh3ctV53";

/// Mock HTTP client that replays queued responses and records requests.
#[derive(Debug, Default)]
pub struct RecordingClient {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl RecordingClient {
    pub fn new(responses: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    /// A client answering once with `status` and `body` serialized as JSON.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::raw(status, serde_json::to_vec(body).unwrap())
    }

    /// A client answering once with `status` and the given raw body.
    pub fn raw(status: u16, body: Vec<u8>) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            http::StatusCode::from_u16(status).unwrap(),
            http::HeaderMap::new(),
            body,
        ))])
    }

    pub fn failing(error: TransportError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns the only request sent, failing the test otherwise.
    pub fn single_request(&self) -> HttpRequest {
        let requests = self.captured_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl HttpClient for RecordingClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no response queued for request")
    }
}

impl HttpClient for Arc<RecordingClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).request(req).await
    }
}

/// Builds a test-mode client sharing `http` with the caller.
pub fn client_with(http: &Arc<RecordingClient>) -> ChargilyClient<Arc<RecordingClient>> {
    ChargilyClient::with_http_client(ClientConfig::new(API_KEY, Mode::Test), Arc::clone(http))
}

/// Returns the request body decoded as JSON.
pub fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_deref().expect("request has no body")).unwrap()
}

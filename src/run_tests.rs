//! Tests for the run module.

use std::sync::Mutex;

use http::{HeaderMap, Method, StatusCode};
use serde_json::json;

use chargily_pay::api::{ClientConfig, Mode};
use chargily_pay::config::Cli;
use chargily_pay::transport::{HttpRequest, HttpResponse, TransportError};

use super::*;

/// Answers every request with the same status and body.
struct StubClient {
    status: StatusCode,
    body: Vec<u8>,
    requests: Mutex<Vec<(Method, String)>>,
}

impl StubClient {
    fn ok(body: &Value) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    fn with_status(status: StatusCode, body: &Value) -> Self {
        Self {
            status,
            body: serde_json::to_vec(body).unwrap(),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<(Method, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for StubClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((req.method.clone(), req.url.to_string()));
        Ok(HttpResponse::new(
            self.status,
            HeaderMap::new(),
            self.body.clone(),
        ))
    }
}

fn client(stub: StubClient) -> ChargilyClient<StubClient> {
    ChargilyClient::with_http_client(ClientConfig::new("test_sk_run", Mode::Test), stub)
}

fn command(args: &[&str]) -> Command {
    let mut full_args = vec!["chargily"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args).command
}

fn empty_page() -> Value {
    json!({ "livemode": false, "current_page": 1, "data": [], "per_page": 10, "total": 0 })
}

fn checkout_body(status: &str) -> Value {
    json!({
        "id": "chk_01",
        "amount": 1000,
        "currency": "dzd",
        "status": status,
        "success_url": "https://shop.example/ok"
    })
}

mod run_error {
    use super::*;

    #[test]
    fn config_error_is_transparent() {
        let error = RunError::from(ConfigError::InvalidPerPage);
        assert_eq!(error.to_string(), ConfigError::InvalidPerPage.to_string());
    }

    #[test]
    fn signature_error_is_transparent() {
        let error = RunError::from(SignatureError::Mismatch);
        assert_eq!(error.to_string(), "The signature is invalid");
    }

    #[test]
    fn payload_read_displays_path() {
        let error = RunError::PayloadRead {
            path: PathBuf::from("body.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.to_string().contains("body.json"));
    }
}

mod dispatching {
    use super::*;

    #[tokio::test]
    async fn balance_hits_balance_endpoint() {
        let client = client(StubClient::ok(&json!({
            "entity": "balance",
            "livemode": false,
            "wallets": [{ "currency": "dzd", "balance": 5000 }]
        })));

        let output = dispatch(&client, &command(&["balance"]), 10).await.unwrap();

        assert_eq!(output["wallets"][0]["balance"], 5000);
        assert_eq!(
            client.http().requests(),
            vec![(Method::GET, format!("{}/balance", chargily_pay::api::TEST_BASE_URL))]
        );
    }

    #[tokio::test]
    async fn list_uses_resolved_page_size() {
        let client = client(StubClient::ok(&empty_page()));

        dispatch(&client, &command(&["list", "payment-links"]), 25)
            .await
            .unwrap();

        let (method, url) = client.http().requests().remove(0);
        assert_eq!(method, Method::GET);
        assert!(url.ends_with("/payment-links?per_page=25"), "{url}");
    }

    #[tokio::test]
    async fn get_targets_resource_by_id() {
        let client = client(StubClient::ok(&checkout_body("pending")));

        let output = dispatch(&client, &command(&["get", "checkout", "chk_01"]), 10)
            .await
            .unwrap();

        assert_eq!(output["id"], "chk_01");
        let (_, url) = client.http().requests().remove(0);
        assert!(url.ends_with("/checkouts/chk_01"), "{url}");
    }

    #[tokio::test]
    async fn items_route_by_owner() {
        for (owner, suffix) in [
            ("checkout", "/checkouts/x1/items?per_page=10"),
            ("payment-link", "/payment-links/x1/items?per_page=10"),
            ("product", "/products/x1/prices?per_page=10"),
        ] {
            let client = client(StubClient::ok(&empty_page()));

            dispatch(&client, &command(&["items", owner, "x1"]), 10)
                .await
                .unwrap();

            let (_, url) = client.http().requests().remove(0);
            assert!(url.ends_with(suffix), "{owner}: {url}");
        }
    }

    #[tokio::test]
    async fn expire_checkout_posts_to_expire() {
        let client = client(StubClient::ok(&checkout_body("expired")));

        let output = dispatch(&client, &command(&["expire-checkout", "chk_01"]), 10)
            .await
            .unwrap();

        assert_eq!(output["status"], "expired");
        let (method, url) = client.http().requests().remove(0);
        assert_eq!(method, Method::POST);
        assert!(url.ends_with("/checkouts/chk_01/expire"), "{url}");
    }

    #[tokio::test]
    async fn api_failure_becomes_run_error() {
        let client = client(StubClient::with_status(
            StatusCode::UNAUTHORIZED,
            &json!({ "message": "Unauthenticated." }),
        ));

        let result = dispatch(&client, &command(&["balance"]), 10).await;

        assert!(matches!(result, Err(RunError::Api(ref e)) if e.status() == Some(StatusCode::UNAUTHORIZED)));
    }

    #[tokio::test]
    async fn verify_needs_no_request() {
        let client = client(StubClient::ok(&json!({})));

        let output = dispatch(
            &client,
            &command(&["verify", "--payload", "body.json", "--signature", "s"]),
            10,
        )
        .await
        .unwrap();

        assert_eq!(output, Value::Null);
        assert!(client.http().requests().is_empty());
    }
}

mod verifying {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const SECRET: &str = "whsec_run";
    const BODY: &[u8] = br#"{"id":"evt_1","livemode":"false","type":"checkout.paid","data":{}}"#;

    fn payload_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(BODY).unwrap();
        file
    }

    #[test]
    fn valid_signature_returns_event() {
        let file = payload_file();
        let verifier = SignatureVerifier::new(SECRET);
        let signature = verifier.sign(BODY);

        let output = verify_payload(&verifier, file.path(), &signature).unwrap();

        assert_eq!(output["id"], "evt_1");
        assert_eq!(output["type"], "checkout.paid");
    }

    #[test]
    fn wrong_signature_is_signature_error() {
        let file = payload_file();
        let verifier = SignatureVerifier::new(SECRET);
        let signature = SignatureVerifier::new("other").sign(BODY);

        let result = verify_payload(&verifier, file.path(), &signature);

        assert!(matches!(
            result,
            Err(RunError::Signature(SignatureError::Mismatch))
        ));
    }

    #[test]
    fn missing_file_is_payload_read_error() {
        let verifier = SignatureVerifier::new(SECRET);

        let result = verify_payload(&verifier, Path::new("nonexistent_payload_12345.json"), "s");

        assert!(matches!(result, Err(RunError::PayloadRead { .. })));
    }
}

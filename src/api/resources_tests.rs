//! Tests for the per-resource call sites.

use std::sync::Arc;

use serde_json::json;

use crate::models::{
    CheckoutItemParams, CreateCheckoutParams, Locale, PaymentMethod, CreateCustomerParams, CreatePaymentLinkParams,
    CreatePriceParams, CreateProductParams, PaymentLinkItemParams, UpdateCustomerParams,
    UpdatePaymentLinkParams, UpdatePriceParams, UpdateProductParams,
};

use super::test_fixtures::{RecordingClient, body_json, client_with};
use super::{ApiError, ValidationError, validate_checkout};

const BASE: &str = "https://pay.chargily.net/test/api/v2";

fn list_body() -> serde_json::Value {
    json!({
        "livemode": false,
        "current_page": 1,
        "data": [],
        "last_page": 1,
        "per_page": 10,
        "total": 0,
    })
}

fn checkout_body() -> serde_json::Value {
    json!({
        "id": "01hj5n7cqpaf0mt2d0xx85tgz8",
        "entity": "checkout",
        "livemode": false,
        "amount": 2500,
        "currency": "dzd",
        "status": "pending",
        "success_url": "https://shop.example.com/thanks",
        "checkout_url": "https://pay.chargily.dz/test/checkouts/01hj5n7cqpaf0mt2d0xx85tgz8/pay",
    })
}

fn assert_request(http: &RecordingClient, method: &http::Method, url: &str) {
    let request = http.single_request();
    assert_eq!(&request.method, method);
    assert_eq!(request.url.as_str(), url);
}

mod balance {
    use super::*;

    #[tokio::test]
    async fn get_balance_hits_balance() {
        let http = Arc::new(RecordingClient::json(
            200,
            &json!({
                "entity": "balance",
                "livemode": false,
                "wallets": [{ "currency": "dzd", "balance": 100, "ready_for_payout": 80, "on_hold": 20 }],
            }),
        ));

        let balance = client_with(&http).get_balance().await.unwrap();

        assert_eq!(balance.wallets[0].on_hold, 20);
        assert_request(&http, &http::Method::GET, &format!("{BASE}/balance"));
    }
}

mod customers {
    use super::*;

    fn customer_body() -> serde_json::Value {
        json!({ "id": "cus_1", "entity": "customer", "name": "Amine" })
    }

    #[tokio::test]
    async fn create_posts_params() {
        let http = Arc::new(RecordingClient::json(201, &customer_body()));
        let params = CreateCustomerParams {
            name: Some("Amine".to_string()),
            ..CreateCustomerParams::default()
        };

        let customer = client_with(&http).create_customer(&params).await.unwrap();

        assert_eq!(customer.id, "cus_1");
        assert_request(&http, &http::Method::POST, &format!("{BASE}/customers"));
        assert_eq!(body_json(&http.single_request()), json!({ "name": "Amine" }));
    }

    #[tokio::test]
    async fn update_uses_patch_on_customer_path() {
        let http = Arc::new(RecordingClient::json(200, &customer_body()));
        let params = UpdateCustomerParams {
            phone: Some("+213555000000".to_string()),
            ..UpdateCustomerParams::default()
        };

        client_with(&http)
            .update_customer("cus_1", &params)
            .await
            .unwrap();

        assert_request(&http, &http::Method::PATCH, &format!("{BASE}/customers/cus_1"));
    }

    #[tokio::test]
    async fn get_and_delete_address_customer_by_id() {
        let http = Arc::new(RecordingClient::json(200, &customer_body()));
        client_with(&http).get_customer("cus_1").await.unwrap();
        assert_request(&http, &http::Method::GET, &format!("{BASE}/customers/cus_1"));

        let http = Arc::new(RecordingClient::json(
            200,
            &json!({ "id": "cus_1", "entity": "customer", "livemode": false, "deleted": true }),
        ));
        let deleted = client_with(&http).delete_customer("cus_1").await.unwrap();
        assert!(deleted.deleted);
        assert_request(&http, &http::Method::DELETE, &format!("{BASE}/customers/cus_1"));
    }

    #[tokio::test]
    async fn list_defaults_to_ten_per_page() {
        let http = Arc::new(RecordingClient::json(200, &list_body()));

        client_with(&http).list_customers(None).await.unwrap();

        assert_request(
            &http,
            &http::Method::GET,
            &format!("{BASE}/customers?per_page=10"),
        );
    }
}

mod products {
    use super::*;

    fn product_body() -> serde_json::Value {
        json!({ "id": "prod_1", "name": "Mug" })
    }

    #[tokio::test]
    async fn create_and_update_use_post() {
        let http = Arc::new(RecordingClient::json(201, &product_body()));
        client_with(&http)
            .create_product(&CreateProductParams::new("Mug"))
            .await
            .unwrap();
        assert_request(&http, &http::Method::POST, &format!("{BASE}/products"));

        let http = Arc::new(RecordingClient::json(200, &product_body()));
        let params = UpdateProductParams {
            description: Some("Ceramic".to_string()),
            ..UpdateProductParams::default()
        };
        client_with(&http)
            .update_product("prod_1", &params)
            .await
            .unwrap();
        assert_request(&http, &http::Method::POST, &format!("{BASE}/products/prod_1"));
        assert_eq!(
            body_json(&http.single_request()),
            json!({ "description": "Ceramic" })
        );
    }

    #[tokio::test]
    async fn get_list_and_delete() {
        let http = Arc::new(RecordingClient::json(200, &product_body()));
        client_with(&http).get_product("prod_1").await.unwrap();
        assert_request(&http, &http::Method::GET, &format!("{BASE}/products/prod_1"));

        let http = Arc::new(RecordingClient::json(200, &list_body()));
        client_with(&http).list_products(Some(50)).await.unwrap();
        assert_request(
            &http,
            &http::Method::GET,
            &format!("{BASE}/products?per_page=50"),
        );

        let http = Arc::new(RecordingClient::json(
            200,
            &json!({ "id": "prod_1", "deleted": true }),
        ));
        client_with(&http).delete_product("prod_1").await.unwrap();
        assert_request(&http, &http::Method::DELETE, &format!("{BASE}/products/prod_1"));
    }

    #[tokio::test]
    async fn product_prices_are_nested_under_product() {
        let http = Arc::new(RecordingClient::json(200, &list_body()));

        client_with(&http)
            .get_product_prices("prod_1", Some(5))
            .await
            .unwrap();

        assert_request(
            &http,
            &http::Method::GET,
            &format!("{BASE}/products/prod_1/prices?per_page=5"),
        );
    }
}

mod prices {
    use super::*;

    fn price_body() -> serde_json::Value {
        json!({ "id": "price_1", "amount": 2500, "currency": "dzd", "product_id": "prod_1" })
    }

    #[tokio::test]
    async fn create_posts_required_fields() {
        let http = Arc::new(RecordingClient::json(201, &price_body()));
        let params = CreatePriceParams {
            amount: 2500,
            currency: "dzd".to_string(),
            product_id: "prod_1".to_string(),
            metadata: None,
        };

        let price = client_with(&http).create_price(&params).await.unwrap();

        assert_eq!(price.amount, 2500);
        assert_request(&http, &http::Method::POST, &format!("{BASE}/prices"));
        assert_eq!(
            body_json(&http.single_request()),
            json!({ "amount": 2500, "currency": "dzd", "product_id": "prod_1" })
        );
    }

    #[tokio::test]
    async fn update_get_and_list() {
        let http = Arc::new(RecordingClient::json(200, &price_body()));
        let params = UpdatePriceParams {
            metadata: Some(json!({ "tier": "gold" })),
        };
        client_with(&http)
            .update_price("price_1", &params)
            .await
            .unwrap();
        assert_request(&http, &http::Method::POST, &format!("{BASE}/prices/price_1"));

        let http = Arc::new(RecordingClient::json(200, &price_body()));
        client_with(&http).get_price("price_1").await.unwrap();
        assert_request(&http, &http::Method::GET, &format!("{BASE}/prices/price_1"));

        let http = Arc::new(RecordingClient::json(200, &list_body()));
        client_with(&http).list_prices(Some(1)).await.unwrap();
        assert_request(&http, &http::Method::GET, &format!("{BASE}/prices?per_page=1"));
    }
}

mod checkouts {
    use super::*;

    fn items() -> Vec<CheckoutItemParams> {
        vec![CheckoutItemParams {
            price: "price_1".to_string(),
            quantity: 1,
        }]
    }

    #[tokio::test]
    async fn ftp_success_url_fails_before_network() {
        let http = Arc::new(RecordingClient::default());
        let params = CreateCheckoutParams::from_items(items(), "ftp://example.com");

        let err = client_with(&http).create_checkout(&params).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::InvalidSuccessUrl { .. })
        ));
        assert!(err.is_validation());
        assert_eq!(http.calls(), 0);
    }

    #[tokio::test]
    async fn missing_items_and_amount_fails_before_network() {
        let http = Arc::new(RecordingClient::default());
        let params = CreateCheckoutParams {
            success_url: "https://example.com".to_string(),
            ..CreateCheckoutParams::default()
        };

        let err = client_with(&http).create_checkout(&params).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::MissingItemsOrAmount)
        ));
        assert_eq!(http.calls(), 0);
    }

    #[tokio::test]
    async fn valid_checkout_is_posted() {
        let http = Arc::new(RecordingClient::json(201, &checkout_body()));
        let params = CreateCheckoutParams::from_amount(2500, "dzd", "https://shop.example.com");

        let checkout = client_with(&http).create_checkout(&params).await.unwrap();

        assert!(checkout.checkout_url.is_some());
        assert_request(&http, &http::Method::POST, &format!("{BASE}/checkouts"));
        assert_eq!(
            body_json(&http.single_request()),
            json!({ "amount": 2500, "currency": "dzd", "success_url": "https://shop.example.com" })
        );
    }

    #[tokio::test]
    async fn get_list_items_and_expire() {
        let http = Arc::new(RecordingClient::json(200, &checkout_body()));
        client_with(&http).get_checkout("chk_1").await.unwrap();
        assert_request(&http, &http::Method::GET, &format!("{BASE}/checkouts/chk_1"));

        let http = Arc::new(RecordingClient::json(200, &list_body()));
        client_with(&http).list_checkouts(None).await.unwrap();
        assert_request(
            &http,
            &http::Method::GET,
            &format!("{BASE}/checkouts?per_page=10"),
        );

        let http = Arc::new(RecordingClient::json(200, &list_body()));
        client_with(&http)
            .get_checkout_items("chk_1", Some(20))
            .await
            .unwrap();
        assert_request(
            &http,
            &http::Method::GET,
            &format!("{BASE}/checkouts/chk_1/items?per_page=20"),
        );

        let http = Arc::new(RecordingClient::json(200, &checkout_body()));
        client_with(&http).expire_checkout("chk_1").await.unwrap();
        let request = http.single_request();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.url.as_str(), format!("{BASE}/checkouts/chk_1/expire"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn unlisted_payment_method_and_locale_pass_through() {
        let mut body = checkout_body();
        body["status"] = json!("paid");
        body["payment_method"] = json!("chargily_app");
        body["locale"] = json!("kab");
        let http = Arc::new(RecordingClient::json(200, &body));

        let checkout = client_with(&http).get_checkout("chk_1").await.unwrap();

        assert_eq!(checkout.payment_method, Some(PaymentMethod::Unknown));
        assert_eq!(checkout.locale, Some(Locale::Unknown));
    }
}

mod checkout_validation {
    use super::*;

    fn base_params() -> CreateCheckoutParams {
        CreateCheckoutParams {
            success_url: "https://example.com/ok".to_string(),
            ..CreateCheckoutParams::default()
        }
    }

    #[test]
    fn non_http_success_url_is_rejected_regardless_of_other_fields() {
        let params = CreateCheckoutParams {
            success_url: "ftp://example.com".to_string(),
            ..CreateCheckoutParams::from_amount(100, "dzd", "")
        };

        assert_eq!(
            validate_checkout(&params),
            Err(ValidationError::InvalidSuccessUrl {
                url: "ftp://example.com".to_string()
            })
        );
    }

    #[test]
    fn http_and_https_are_accepted() {
        for url in ["http://example.com", "https://example.com"] {
            let params = CreateCheckoutParams::from_amount(100, "dzd", url);
            assert_eq!(validate_checkout(&params), Ok(()), "{url}");
        }
    }

    #[test]
    fn items_alone_pass() {
        let params = CreateCheckoutParams {
            items: Some(vec![CheckoutItemParams {
                price: "price_1".to_string(),
                quantity: 3,
            }]),
            ..base_params()
        };

        assert_eq!(validate_checkout(&params), Ok(()));
    }

    #[test]
    fn empty_items_list_counts_as_present() {
        let params = CreateCheckoutParams {
            items: Some(Vec::new()),
            ..base_params()
        };

        assert_eq!(validate_checkout(&params), Ok(()));
    }

    #[test]
    fn amount_without_currency_is_rejected() {
        let params = CreateCheckoutParams {
            amount: Some(100),
            ..base_params()
        };

        assert_eq!(
            validate_checkout(&params),
            Err(ValidationError::MissingItemsOrAmount)
        );
    }

    #[test]
    fn currency_without_amount_is_rejected() {
        let params = CreateCheckoutParams {
            currency: Some("dzd".to_string()),
            ..base_params()
        };

        assert_eq!(
            validate_checkout(&params),
            Err(ValidationError::MissingItemsOrAmount)
        );
    }

    #[test]
    fn zero_amount_or_empty_currency_counts_as_missing() {
        let zero = CreateCheckoutParams::from_amount(0, "dzd", "https://example.com");
        let empty = CreateCheckoutParams::from_amount(100, "", "https://example.com");

        assert!(validate_checkout(&zero).is_err());
        assert!(validate_checkout(&empty).is_err());
    }
}

mod payment_links {
    use super::*;

    fn link_body() -> serde_json::Value {
        json!({ "id": "pl_1", "name": "Workshop", "active": true, "url": "https://pay.chargily.dz/test/payment-links/pl_1" })
    }

    #[tokio::test]
    async fn create_and_update_use_post() {
        let http = Arc::new(RecordingClient::json(201, &link_body()));
        let params = CreatePaymentLinkParams::new(
            "Workshop",
            vec![PaymentLinkItemParams {
                price: "price_1".to_string(),
                quantity: 1,
                adjustable_quantity: Some(true),
            }],
        );
        let link = client_with(&http).create_payment_link(&params).await.unwrap();
        assert!(link.active);
        assert_request(&http, &http::Method::POST, &format!("{BASE}/payment-links"));

        let http = Arc::new(RecordingClient::json(200, &link_body()));
        let params = UpdatePaymentLinkParams {
            active: Some(false),
            ..UpdatePaymentLinkParams::default()
        };
        client_with(&http)
            .update_payment_link("pl_1", &params)
            .await
            .unwrap();
        assert_request(
            &http,
            &http::Method::POST,
            &format!("{BASE}/payment-links/pl_1"),
        );
        assert_eq!(body_json(&http.single_request()), json!({ "active": false }));
    }

    #[tokio::test]
    async fn get_list_and_items() {
        let http = Arc::new(RecordingClient::json(200, &link_body()));
        client_with(&http).get_payment_link("pl_1").await.unwrap();
        assert_request(
            &http,
            &http::Method::GET,
            &format!("{BASE}/payment-links/pl_1"),
        );

        let http = Arc::new(RecordingClient::json(200, &list_body()));
        client_with(&http).list_payment_links(Some(3)).await.unwrap();
        assert_request(
            &http,
            &http::Method::GET,
            &format!("{BASE}/payment-links?per_page=3"),
        );

        let http = Arc::new(RecordingClient::json(200, &list_body()));
        client_with(&http)
            .get_payment_link_items("pl_1", None)
            .await
            .unwrap();
        assert_request(
            &http,
            &http::Method::GET,
            &format!("{BASE}/payment-links/pl_1/items?per_page=10"),
        );
    }
}

mod pagination {
    use super::*;

    #[tokio::test]
    async fn list_returns_one_page_even_when_more_exist() {
        let http = Arc::new(RecordingClient::json(
            200,
            &json!({
                "current_page": 1,
                "data": [{ "id": "cus_1" }, { "id": "cus_2" }],
                "last_page": 5,
                "next_page_url": format!("{BASE}/customers?page=2"),
                "per_page": 2,
                "total": 10,
            }),
        ));

        let page = client_with(&http).list_customers(Some(2)).await.unwrap();

        assert_eq!(page.data.len(), 2);
        assert!(page.has_next_page());
        assert_eq!(http.calls(), 1);
        assert_eq!(http.single_request().url.query(), Some("per_page=2"));
    }
}

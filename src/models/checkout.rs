//! Checkouts: hosted payment sessions.

use serde::{Deserialize, Serialize};

use super::{Locale, Metadata, PaymentMethod};

/// Lifecycle state of a checkout as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStatus {
    Pending,
    Processing,
    Paid,
    Failed,
    Canceled,
    Expired,
    /// A status this client does not know about yet.
    #[serde(other)]
    Unknown,
}

/// A checkout as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub livemode: bool,
    pub amount: u64,
    pub currency: String,
    #[serde(default)]
    pub fees: u64,
    #[serde(default)]
    pub fees_on_merchant: u64,
    #[serde(default)]
    pub fees_on_customer: u64,
    #[serde(default)]
    pub pass_fees_to_customer: Option<bool>,
    /// Who pays the processing fees: `merchant`, `customer` or `split`
    #[serde(default)]
    pub chargily_pay_fees_allocation: Option<String>,
    pub status: CheckoutStatus,
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    pub success_url: String,
    #[serde(default)]
    pub failure_url: Option<String>,
    #[serde(default)]
    pub webhook_endpoint: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub payment_link_id: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub collect_shipping_address: Option<bool>,
    #[serde(default)]
    pub discount: Option<serde_json::Value>,
    #[serde(default)]
    pub amount_without_discount: Option<u64>,
    /// URL of the hosted payment page to redirect the customer to
    #[serde(default)]
    pub checkout_url: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// One line of a checkout built from existing prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItemParams {
    /// Price identifier
    pub price: String,
    pub quantity: u32,
}

/// An item of an existing checkout, as listed by `checkouts/{id}/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub product_id: Option<String>,
}

/// Body of `POST checkouts`.
///
/// Either `items`, or both `amount` and `currency`, must be given; the
/// client checks this before sending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckoutParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CheckoutItemParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// Where the customer lands after paying; must be an http(s) URL
    pub success_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_discount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_discount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateCheckoutParams {
    /// Creates a checkout for a list of price items.
    #[must_use]
    pub fn from_items(items: Vec<CheckoutItemParams>, success_url: impl Into<String>) -> Self {
        Self {
            items: Some(items),
            success_url: success_url.into(),
            ..Self::default()
        }
    }

    /// Creates a checkout for a fixed amount.
    #[must_use]
    pub fn from_amount(
        amount: u64,
        currency: impl Into<String>,
        success_url: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
            success_url: success_url.into(),
            ..Self::default()
        }
    }
}

//! Payment links: reusable hosted payment pages.

use serde::{Deserialize, Serialize};

use super::{Locale, Metadata};

/// A payment link as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLink {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub livemode: bool,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub after_completion_message: Option<String>,
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(default)]
    pub collect_shipping_address: Option<bool>,
    #[serde(default)]
    pub metadata: Metadata,
    /// Public URL customers open to pay
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// One line of a payment link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLinkItemParams {
    /// Price identifier
    pub price: String,
    pub quantity: u32,
    /// Let the customer change the quantity on the payment page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustable_quantity: Option<bool>,
}

/// An item of an existing payment link, as listed by `payment-links/{id}/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLinkItem {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub adjustable_quantity: bool,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub product_id: Option<String>,
}

/// Body of `POST payment-links`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentLinkParams {
    pub name: String,
    pub items: Vec<PaymentLinkItemParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_completion_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePaymentLinkParams {
    /// Creates parameters with the required name and items set.
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<PaymentLinkItemParams>) -> Self {
        Self {
            name: name.into(),
            items,
            after_completion_message: None,
            locale: None,
            pass_fees_to_customer: None,
            collect_shipping_address: None,
            metadata: None,
        }
    }
}

/// Body of `POST payment-links/{id}`. Only the fields set are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePaymentLinkParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PaymentLinkItemParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_completion_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

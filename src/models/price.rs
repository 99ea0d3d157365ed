//! Prices attached to products.

use serde::{Deserialize, Serialize};

use super::Metadata;

/// A price as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub livemode: bool,
    /// Amount in the currency's main unit
    pub amount: u64,
    pub currency: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Body of `POST prices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePriceParams {
    pub amount: u64,
    pub currency: String,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Body of `POST prices/{id}`.
///
/// Amount and currency of an existing price cannot be changed; only
/// metadata is updatable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePriceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

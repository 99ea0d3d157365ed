//! Checkout operations, including the pre-submission checks on creation.

use crate::models::{Checkout, CheckoutItem, CreateCheckoutParams, ListResponse};
use crate::transport::HttpClient;

use super::{ApiError, ApiRequest, ChargilyClient, Endpoint, ValidationError};

const CHECKOUTS: &str = "checkouts";

/// Checks the two local preconditions of checkout creation.
///
/// 1. `success_url` starts with `http` (so `https` passes too).
/// 2. `items` is present (even if empty), or `amount` is non-zero and
///    `currency` is non-empty.
///
/// # Errors
///
/// Returns the first violated precondition.
pub fn validate_checkout(params: &CreateCheckoutParams) -> Result<(), ValidationError> {
    if !params.success_url.starts_with("http") {
        return Err(ValidationError::InvalidSuccessUrl {
            url: params.success_url.clone(),
        });
    }

    let has_amount = params.amount.is_some_and(|a| a != 0)
        && params.currency.as_deref().is_some_and(|c| !c.is_empty());

    if params.items.is_none() && !has_amount {
        return Err(ValidationError::MissingItemsOrAmount);
    }

    Ok(())
}

impl<H: HttpClient> ChargilyClient<H> {
    /// Creates a checkout after validating `params` locally.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if a
    /// precondition fails (see [`validate_checkout`]), or another
    /// [`ApiError`] if the request fails.
    pub async fn create_checkout(&self, params: &CreateCheckoutParams) -> Result<Checkout, ApiError> {
        validate_checkout(params)?;

        let request = ApiRequest::post(Endpoint::new(CHECKOUTS)).with_json(params)?;
        self.execute(request).await
    }

    /// Fetches a checkout by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_checkout(&self, checkout_id: &str) -> Result<Checkout, ApiError> {
        self.execute(ApiRequest::get(Endpoint::new(CHECKOUTS).id(checkout_id)))
            .await
    }

    /// Lists one page of checkouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_checkouts(
        &self,
        per_page: Option<u32>,
    ) -> Result<ListResponse<Checkout>, ApiError> {
        self.execute(ApiRequest::get(Endpoint::new(CHECKOUTS).per_page(per_page)))
            .await
    }

    /// Lists one page of the items of a checkout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_checkout_items(
        &self,
        checkout_id: &str,
        per_page: Option<u32>,
    ) -> Result<ListResponse<CheckoutItem>, ApiError> {
        let endpoint = Endpoint::new(CHECKOUTS)
            .id(checkout_id)
            .segment("items")
            .per_page(per_page);
        self.execute(ApiRequest::get(endpoint)).await
    }

    /// Expires a pending checkout so it can no longer be paid.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn expire_checkout(&self, checkout_id: &str) -> Result<Checkout, ApiError> {
        let endpoint = Endpoint::new(CHECKOUTS).id(checkout_id).segment("expire");
        self.execute(ApiRequest::post(endpoint)).await
    }
}

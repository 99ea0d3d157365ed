//! Payment link operations.

use crate::models::{
    CreatePaymentLinkParams, ListResponse, PaymentLink, PaymentLinkItem, UpdatePaymentLinkParams,
};
use crate::transport::HttpClient;

use super::{ApiError, ApiRequest, ChargilyClient, Endpoint};

const PAYMENT_LINKS: &str = "payment-links";

impl<H: HttpClient> ChargilyClient<H> {
    /// Creates a payment link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_payment_link(
        &self,
        params: &CreatePaymentLinkParams,
    ) -> Result<PaymentLink, ApiError> {
        let request = ApiRequest::post(Endpoint::new(PAYMENT_LINKS)).with_json(params)?;
        self.execute(request).await
    }

    /// Updates the fields set in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_payment_link(
        &self,
        payment_link_id: &str,
        params: &UpdatePaymentLinkParams,
    ) -> Result<PaymentLink, ApiError> {
        let request = ApiRequest::post(Endpoint::new(PAYMENT_LINKS).id(payment_link_id))
            .with_json(params)?;
        self.execute(request).await
    }

    /// Fetches a payment link by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_payment_link(&self, payment_link_id: &str) -> Result<PaymentLink, ApiError> {
        self.execute(ApiRequest::get(
            Endpoint::new(PAYMENT_LINKS).id(payment_link_id),
        ))
        .await
    }

    /// Lists one page of payment links.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_payment_links(
        &self,
        per_page: Option<u32>,
    ) -> Result<ListResponse<PaymentLink>, ApiError> {
        self.execute(ApiRequest::get(
            Endpoint::new(PAYMENT_LINKS).per_page(per_page),
        ))
        .await
    }

    /// Lists one page of the items of a payment link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_payment_link_items(
        &self,
        payment_link_id: &str,
        per_page: Option<u32>,
    ) -> Result<ListResponse<PaymentLinkItem>, ApiError> {
        let endpoint = Endpoint::new(PAYMENT_LINKS)
            .id(payment_link_id)
            .segment("items")
            .per_page(per_page);
        self.execute(ApiRequest::get(endpoint)).await
    }
}

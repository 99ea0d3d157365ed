//! Price operations.

use crate::models::{CreatePriceParams, ListResponse, Price, UpdatePriceParams};
use crate::transport::HttpClient;

use super::{ApiError, ApiRequest, ChargilyClient, Endpoint};

const PRICES: &str = "prices";

impl<H: HttpClient> ChargilyClient<H> {
    /// Creates a price for an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_price(&self, params: &CreatePriceParams) -> Result<Price, ApiError> {
        let request = ApiRequest::post(Endpoint::new(PRICES)).with_json(params)?;
        self.execute(request).await
    }

    /// Updates a price's metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_price(
        &self,
        price_id: &str,
        params: &UpdatePriceParams,
    ) -> Result<Price, ApiError> {
        let request = ApiRequest::post(Endpoint::new(PRICES).id(price_id)).with_json(params)?;
        self.execute(request).await
    }

    /// Fetches a price by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_price(&self, price_id: &str) -> Result<Price, ApiError> {
        self.execute(ApiRequest::get(Endpoint::new(PRICES).id(price_id)))
            .await
    }

    /// Lists one page of prices across all products.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_prices(&self, per_page: Option<u32>) -> Result<ListResponse<Price>, ApiError> {
        self.execute(ApiRequest::get(Endpoint::new(PRICES).per_page(per_page)))
            .await
    }
}

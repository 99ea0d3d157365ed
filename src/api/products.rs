//! Product operations.

use crate::models::{
    CreateProductParams, DeleteItemResponse, ListResponse, Price, Product, UpdateProductParams,
};
use crate::transport::HttpClient;

use super::{ApiError, ApiRequest, ChargilyClient, Endpoint};

const PRODUCTS: &str = "products";

impl<H: HttpClient> ChargilyClient<H> {
    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_product(&self, params: &CreateProductParams) -> Result<Product, ApiError> {
        let request = ApiRequest::post(Endpoint::new(PRODUCTS)).with_json(params)?;
        self.execute(request).await
    }

    /// Updates the fields set in `params`.
    ///
    /// The API takes product updates as `POST`, not `PATCH`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_product(
        &self,
        product_id: &str,
        params: &UpdateProductParams,
    ) -> Result<Product, ApiError> {
        let request =
            ApiRequest::post(Endpoint::new(PRODUCTS).id(product_id)).with_json(params)?;
        self.execute(request).await
    }

    /// Fetches a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_product(&self, product_id: &str) -> Result<Product, ApiError> {
        self.execute(ApiRequest::get(Endpoint::new(PRODUCTS).id(product_id)))
            .await
    }

    /// Lists one page of products.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_products(
        &self,
        per_page: Option<u32>,
    ) -> Result<ListResponse<Product>, ApiError> {
        self.execute(ApiRequest::get(Endpoint::new(PRODUCTS).per_page(per_page)))
            .await
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_product(&self, product_id: &str) -> Result<DeleteItemResponse, ApiError> {
        self.execute(ApiRequest::delete(Endpoint::new(PRODUCTS).id(product_id)))
            .await
    }

    /// Lists one page of the prices attached to a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_product_prices(
        &self,
        product_id: &str,
        per_page: Option<u32>,
    ) -> Result<ListResponse<Price>, ApiError> {
        let endpoint = Endpoint::new(PRODUCTS)
            .id(product_id)
            .segment("prices")
            .per_page(per_page);
        self.execute(ApiRequest::get(endpoint)).await
    }
}

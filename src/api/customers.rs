//! Customer operations.

use crate::models::{
    CreateCustomerParams, Customer, DeleteItemResponse, ListResponse, UpdateCustomerParams,
};
use crate::transport::HttpClient;

use super::{ApiError, ApiRequest, ChargilyClient, Endpoint};

const CUSTOMERS: &str = "customers";

impl<H: HttpClient> ChargilyClient<H> {
    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_customer(&self, params: &CreateCustomerParams) -> Result<Customer, ApiError> {
        let request = ApiRequest::post(Endpoint::new(CUSTOMERS)).with_json(params)?;
        self.execute(request).await
    }

    /// Fetches a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_customer(&self, customer_id: &str) -> Result<Customer, ApiError> {
        self.execute(ApiRequest::get(Endpoint::new(CUSTOMERS).id(customer_id)))
            .await
    }

    /// Updates the fields set in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_customer(
        &self,
        customer_id: &str,
        params: &UpdateCustomerParams,
    ) -> Result<Customer, ApiError> {
        let request =
            ApiRequest::patch(Endpoint::new(CUSTOMERS).id(customer_id)).with_json(params)?;
        self.execute(request).await
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<DeleteItemResponse, ApiError> {
        self.execute(ApiRequest::delete(Endpoint::new(CUSTOMERS).id(customer_id)))
            .await
    }

    /// Lists one page of customers; `None` requests the default page size.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_customers(
        &self,
        per_page: Option<u32>,
    ) -> Result<ListResponse<Customer>, ApiError> {
        self.execute(ApiRequest::get(Endpoint::new(CUSTOMERS).per_page(per_page)))
            .await
    }
}

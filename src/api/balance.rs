//! Balance retrieval.

use crate::models::Balance;
use crate::transport::HttpClient;

use super::{ApiError, ApiRequest, ChargilyClient, Endpoint};

impl<H: HttpClient> ChargilyClient<H> {
    /// Retrieves the merchant balance for every wallet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_balance(&self) -> Result<Balance, ApiError> {
        self.execute(ApiRequest::get(Endpoint::new("balance"))).await
    }
}

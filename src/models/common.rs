//! Types shared by several resources.

use serde::{Deserialize, Serialize};

/// Free-form metadata attached to a resource.
///
/// The API accepts arbitrary JSON here and echoes it back unchanged.
pub type Metadata = serde_json::Value;

/// One page of a paginated list endpoint.
///
/// List operations return exactly one page; walking further pages is left
/// to the caller (see [`ListResponse::has_next_page`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Whether the objects belong to live mode
    #[serde(default)]
    pub livemode: bool,
    /// 1-based index of this page
    #[serde(default)]
    pub current_page: u32,
    /// Objects on this page
    pub data: Vec<T>,
    /// URL of the first page
    #[serde(default)]
    pub first_page_url: Option<String>,
    /// Index of the last page
    #[serde(default)]
    pub last_page: u32,
    /// URL of the last page
    #[serde(default)]
    pub last_page_url: Option<String>,
    /// URL of the next page, absent on the last page
    #[serde(default)]
    pub next_page_url: Option<String>,
    /// Base path of the list endpoint
    #[serde(default)]
    pub path: Option<String>,
    /// Page size used by the server
    #[serde(default)]
    pub per_page: u32,
    /// URL of the previous page, absent on the first page
    #[serde(default)]
    pub prev_page_url: Option<String>,
    /// Total number of objects across all pages
    #[serde(default)]
    pub total: u64,
}

impl<T> ListResponse<T> {
    /// Returns true if the server reports another page after this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_url.is_some()
    }
}

/// Response body of delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    /// Identifier of the deleted object
    pub id: String,
    /// Object type, e.g. `customer`
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub livemode: bool,
    /// True when the object was removed
    #[serde(default)]
    pub deleted: bool,
}

/// Language of the hosted checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    En,
    Fr,
    /// A language this client does not know about yet.
    #[serde(other)]
    Unknown,
}

/// Card network used to pay a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Edahabia,
    Cib,
    /// A payment method this client does not know about yet.
    #[serde(other)]
    Unknown,
}

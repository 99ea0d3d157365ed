//! Structured builder for API endpoint paths.

use url::Url;

use super::ApiError;

/// Page size used when a list call does not specify one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Location of an API resource relative to the base URL.
///
/// Built from a resource name, an optional object id, optional trailing
/// segments and query pairs. Each segment is percent-encoded on its own,
/// so ids containing `/`, `?` or spaces cannot change the target path.
///
/// # Example
///
/// ```
/// use chargily_pay::api::Endpoint;
/// use url::Url;
///
/// let base = Url::parse("https://pay.chargily.net/test/api/v2").unwrap();
/// let url = Endpoint::new("checkouts")
///     .id("01hj5n7cqpaf0mt2d0xx85tgz8")
///     .segment("items")
///     .per_page(Some(25))
///     .resolve(&base)
///     .unwrap();
///
/// assert_eq!(
///     url.as_str(),
///     "https://pay.chargily.net/test/api/v2/checkouts/01hj5n7cqpaf0mt2d0xx85tgz8/items?per_page=25"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// Creates an endpoint for a top-level resource collection.
    #[must_use]
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            segments: vec![resource.into()],
            query: Vec::new(),
        }
    }

    /// Appends an object id.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.segment(id)
    }

    /// Appends a fixed path segment such as `items` or `expire`.
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Sets `per_page`, falling back to [`DEFAULT_PER_PAGE`].
    #[must_use]
    pub fn per_page(self, per_page: Option<u32>) -> Self {
        self.query("per_page", per_page.unwrap_or(DEFAULT_PER_PAGE))
    }

    /// Returns the unencoded path relative to the base URL, e.g. `customers/42`.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Returns the query pairs in insertion order.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Joins this endpoint onto `base` with a `/` separator.
    ///
    /// Any query string already on `base` is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] if `base` cannot carry path
    /// segments (e.g. a `mailto:` URL).
    pub fn resolve(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.clone();

        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidEndpoint(format!("'{base}' cannot be a base URL")))?
            .pop_if_empty()
            .extend(&self.segments);

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }
}

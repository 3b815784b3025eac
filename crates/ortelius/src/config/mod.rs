//! Request configuration for suggestion queries.

/// Parameters for one suggestion query.
///
/// Defaults: first page, ten suggestions per page, no position. Use
/// [`SuggestRequest::builder`] for ergonomic construction:
///
/// ```rust
/// use ortelius::SuggestRequest;
///
/// let request = SuggestRequest::builder("tor").near(50.0, 55.4).page(0).build();
/// assert_eq!(request.per_page, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestRequest {
    /// Partial name to match against place names.
    pub query: String,
    /// Requester latitude in decimal degrees, if known.
    pub latitude: Option<f64>,
    /// Requester longitude in decimal degrees, if known.
    pub longitude: Option<f64>,
    /// Zero-based page to return.
    pub page: usize,
    /// Number of suggestions per page. Must be at least 1.
    pub per_page: usize,
}

impl Default for SuggestRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            latitude: None,
            longitude: None,
            page: 0,
            per_page: 10,
        }
    }
}

impl SuggestRequest {
    /// A request for `query` with all defaults.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Start building a request for `query`.
    #[must_use]
    pub fn builder(query: impl Into<String>) -> SuggestRequestBuilder {
        SuggestRequestBuilder::new(query)
    }
}

/// Builder for [`SuggestRequest`] with ergonomic defaults.
#[derive(Debug, Clone, Default)]
pub struct SuggestRequestBuilder {
    request: SuggestRequest,
}

impl SuggestRequestBuilder {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            request: SuggestRequest::new(query),
        }
    }

    /// Set both requester coordinates, enabling the proximity filter.
    pub fn near(mut self, latitude: f64, longitude: f64) -> Self {
        self.request.latitude = Some(latitude);
        self.request.longitude = Some(longitude);
        self
    }

    /// Set the requester latitude on its own.
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.request.latitude = Some(latitude);
        self
    }

    /// Set the requester longitude on its own.
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.request.longitude = Some(longitude);
        self
    }

    /// Set the zero-based page to return.
    pub fn page(mut self, page: usize) -> Self {
        self.request.page = page;
        self
    }

    /// Set the page size.
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.request.per_page = per_page;
        self
    }

    /// Build the final request.
    #[must_use]
    pub fn build(self) -> SuggestRequest {
        self.request
    }
}

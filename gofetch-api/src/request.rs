use gofetch_query::Query;

/// Path of the search endpoint relative to the API origin.
pub const SEARCH_PATH: &str = "/api/v1/search";

/// Fixed paging parameters forwarded with every paginated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Query,
    /// `None` selects the legacy contract that sends `q` alone.
    pub pagination: Option<Pagination>,
}

impl SearchRequest {
    pub fn new(query: Query, pagination: Option<Pagination>) -> Self {
        Self { query, pagination }
    }

    /// `q=<encoded>` optionally followed by `&page=<n>&limit=<n>`.
    pub fn query_string(&self) -> String {
        let mut out = format!("q={}", self.query.encoded());
        if let Some(p) = self.pagination {
            out.push_str(&format!("&page={}&limit={}", p.page, p.limit));
        }
        out
    }

    /// Path and query, e.g. `/api/v1/search?q=cat&page=1&limit=10`.
    pub fn path_and_query(&self) -> String {
        format!("{}?{}", SEARCH_PATH, self.query_string())
    }
}

//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: i64 = 12;
/// Maximum page size.
const MAX_PAGE_SIZE: i64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl PageRequest {
    /// Create a new page request, clamping out-of-range values.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination metadata echoed alongside paginated payloads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based).
    pub page: i64,
    /// Number of items per page.
    pub limit: i64,
    /// Total number of items across all pages.
    pub total: i64,
    /// Total number of pages.
    pub total_pages: i64,
}

impl Pagination {
    /// Build pagination metadata from a page request and a total row count.
    pub fn new(request: PageRequest, total: i64) -> Self {
        let total_pages = if total <= 0 {
            0
        } else {
            (total + request.limit - 1) / request.limit
        };
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
        }
    }
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

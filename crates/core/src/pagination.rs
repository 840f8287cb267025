//! Page-number pagination used by gallery-style listings.
//!
//! Pages are 1-based. Out-of-range inputs are clamped rather than rejected so
//! a stale page number from the client still yields a valid (possibly empty)
//! page.

use serde::Serialize;

/// Default page size for the asset gallery.
pub const DEFAULT_PER_PAGE: i64 = 12;

/// Maximum page size accepted from clients.
pub const MAX_PER_PAGE: i64 = 100;

/// Clamp a user-provided limit into `1..=max`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// A resolved page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Build a page request from optional query values.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: clamp_limit(per_page, DEFAULT_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// SQL `OFFSET` for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// Number of pages needed to show `total` items, `ceil(total / per_page)`.
pub fn page_count(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

/// Paginated list envelope: `{ data, page, per_page, total, page_count }`.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub page_count: i64,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            data,
            page: request.page,
            per_page: request.per_page,
            total,
            page_count: page_count(total, request.per_page),
        }
    }
}

//! Pagination types for list operations.
//!
//! [`Pagination`] validates its bounds at construction instead of
//! silently clamping them, so an out-of-range request fails loudly
//! before any query runs. [`Page`] carries the items together with the
//! navigation metadata derived from one shared count.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Default page size.
pub const DEFAULT_PAGE_LIMIT: u64 = 50;
/// Maximum page size.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Validated offset/limit window for a list query.
///
/// Fields are private so every value in circulation went through
/// [`Pagination::new`]. A zero or oversized limit is rejected as
/// `INVALID_ARGUMENT` rather than adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    offset: u64,
    limit: u64,
}

impl Pagination {
    /// Create a validated pagination window.
    pub fn new(offset: u64, limit: u64) -> AppResult<Self> {
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(AppError::invalid_argument(format!(
                "page limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"
            )));
        }
        if offset > i64::MAX as u64 {
            return Err(AppError::invalid_argument(format!(
                "page offset {offset} is out of range"
            )));
        }
        Ok(Self { offset, limit })
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of rows to return.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// One page of a list result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of matching rows across all pages.
    pub total: u64,
    /// Offset this page was requested with.
    pub offset: u64,
    /// Limit this page was requested with.
    pub limit: u64,
    /// Whether rows exist beyond this page.
    pub has_next: bool,
    /// Whether rows exist before this page.
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Assemble a page from the fetched items and the shared-predicate
    /// total count.
    pub fn new(items: Vec<T>, total: u64, page: &Pagination) -> Self {
        Self {
            items,
            total,
            offset: page.offset(),
            limit: page.limit(),
            has_next: page.offset() + page.limit() < total,
            has_previous: page.offset() > 0,
        }
    }

    /// Create an empty page for the given window.
    pub fn empty(page: &Pagination) -> Self {
        Self::new(Vec::new(), 0, page)
    }

    /// 1-based page number of this window.
    pub fn page_number(&self) -> u64 {
        self.offset / self.limit.max(1) + 1
    }

    /// Map the items while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

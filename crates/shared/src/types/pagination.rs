//! Pagination types for list views.
//!
//! Pages are cut from already-materialized collections. Page numbers are
//! 1-indexed and a page past the end clamps to the last page.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    9
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Creates a request for the given page and page size.
    #[must_use]
    pub const fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Page size, never below one.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.per_page.max(1) as usize
    }

    /// Number of pages needed for `total` items. An empty collection has one (empty) page.
    #[must_use]
    pub fn total_pages(&self, total: usize) -> u32 {
        let pages = total.div_ceil(self.limit()).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// The requested page clamped into `1..=total_pages`.
    #[must_use]
    pub fn clamped_page(&self, total: usize) -> u32 {
        self.page.clamp(1, self.total_pages(total))
    }

    /// Offset of the first item on the clamped page.
    #[must_use]
    pub fn offset(&self, total: usize) -> usize {
        (self.clamped_page(total) - 1) as usize * self.limit()
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number, after clamping.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    /// Cuts one page out of `items`.
    ///
    /// Requests beyond the last page (or page 0) are clamped, never rejected.
    #[must_use]
    pub fn paginate(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len();
        let page = request.clamped_page(total);
        let data: Vec<T> = items
            .into_iter()
            .skip(request.offset(total))
            .take(request.limit())
            .collect();

        Self {
            data,
            meta: PageMeta {
                page,
                per_page: u32::try_from(request.limit()).unwrap_or(u32::MAX),
                total: total as u64,
                total_pages: request.total_pages(total),
            },
        }
    }

    /// Maps the items of the page, keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

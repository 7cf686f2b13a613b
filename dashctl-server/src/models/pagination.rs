//! Pagination for the invoices table

/// Rows per page in the invoices table
pub const ITEMS_PER_PAGE: u32 = 6;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination at the fixed table page size.
    ///
    /// Page is clamped to a minimum of 1.
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: ITEMS_PER_PAGE,
        }
    }

    /// Calculate SQL OFFSET value: `(page - 1) * per_page`.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Number of pages needed for `count` rows: `ceil(count / per_page)`.
///
/// Zero rows means zero pages.
pub fn total_pages(count: i64, per_page: u32) -> u32 {
    if count <= 0 || per_page == 0 {
        return 0;
    }
    let per_page = i64::from(per_page);
    let pages = (count + per_page - 1) / per_page;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

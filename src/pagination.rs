use serde::Serialize;

/// Page size used by list endpoints when the client does not ask for one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Largest page size a client may request.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// 1-based page selection applied to list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Row offset of the first item on the page. Page `0` is treated as `1`.
    ///
    /// Offsets past `i64::MAX` saturate, which simply yields an empty page.
    pub fn offset(&self) -> i64 {
        let rows = (self.page.max(1) - 1).saturating_mul(self.per_page);
        i64::try_from(rows).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}

/// One page of results together with the information needed to navigate.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: Pagination, total_items: usize) -> Self {
        let total_pages = if pagination.per_page == 0 {
            0
        } else {
            total_items.div_ceil(pagination.per_page)
        };

        Self {
            items,
            page: pagination.page.max(1),
            per_page: pagination.per_page,
            total_items,
            total_pages,
        }
    }
}

/// Normalize client supplied paging parameters.
pub fn page_request(page: Option<usize>, per_page: Option<usize>) -> Pagination {
    Pagination {
        page: page.unwrap_or(1).max(1),
        per_page: per_page
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
            .clamp(1, MAX_ITEMS_PER_PAGE),
    }
}

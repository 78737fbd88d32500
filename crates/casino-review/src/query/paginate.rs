use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of results plus the totals needed to render pagination controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,
}

/// Slice out a 1-indexed page. Page 0 is treated as page 1; pages past the end are empty.
pub fn paginate<T: Clone>(
    items: &[T],
    page: usize,
    page_size: usize,
) -> Result<Page<T>, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::InvalidPageSize);
    }

    let page = page.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);

    let items = if start >= total_count {
        Vec::new()
    } else {
        let end = (start + page_size).min(total_count);
        items[start..end].to_vec()
    };

    Ok(Page {
        items,
        page,
        page_size,
        total_pages,
        total_count,
    })
}

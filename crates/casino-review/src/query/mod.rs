//! Listing pipeline for the casino catalog: text search, faceted filters,
//! stable sorting, and pagination over an in-memory collection.

mod filter;
mod paginate;
pub mod params;
mod sort;

pub use filter::{filter, matches_search, CasinoFacets};
pub use paginate::{paginate, Page, PaginationError, DEFAULT_PAGE_SIZE};
pub use params::{CasinoQueryParams, QueryParamError};
pub use sort::{sort, SortDirection, SortField};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::domain::Casino;

/// Search, facet, sort, and page selection for one listing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoQuery {
    pub search: String,
    pub facets: CasinoFacets,
    pub sort: Option<SortField>,
    pub direction: SortDirection,
    pub page: usize,
}

impl Default for CasinoQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            facets: CasinoFacets::default(),
            sort: Some(SortField::SafetyIndex),
            direction: SortDirection::Desc,
            page: 1,
        }
    }
}

impl CasinoQuery {
    /// Copy with the page reset, for callers that just changed search, facets, or sort.
    pub fn with_criteria_changed(self) -> Self {
        Self { page: 1, ..self }
    }
}

/// Stateless filter → sort → paginate chain with a fixed page size.
#[derive(Debug, Clone, Copy)]
pub struct CasinoQueryPipeline {
    page_size: usize,
}

impl Default for CasinoQueryPipeline {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CasinoQueryPipeline {
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize);
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn run(
        &self,
        casinos: &[Casino],
        query: &CasinoQuery,
    ) -> Result<Page<Casino>, PaginationError> {
        let matched = filter(casinos, &query.search, &query.facets);
        let ordered = sort(&matched, query.sort, query.direction);
        let page = paginate(&ordered, query.page, self.page_size)?;

        debug!(
            matched = page.total_count,
            page = page.page,
            total_pages = page.total_pages,
            "casino query evaluated"
        );

        Ok(page)
    }
}

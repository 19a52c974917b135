use serde::Serialize;
use shopdesk_products::Product;

use crate::filters::ProductFilters;

/// Message published when the catalog could not be reached.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load products. Please try again.";

/// Read-only snapshot of a product listing, as a presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListState {
    /// The current page, already ordered.
    pub products: Vec<Product>,
    /// First load in progress (nothing has been shown yet).
    pub loading: bool,
    /// A filter change (category, sort, page size) is in flight.
    pub updating: bool,
    /// A page change is in flight.
    pub paginating: bool,
    pub error: Option<String>,
    pub filters: ProductFilters,
    pub total_pages: u32,
}

impl ListState {
    pub(crate) fn initial(filters: ProductFilters) -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            updating: false,
            paginating: false,
            error: None,
            filters,
            total_pages: 1,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.loading || self.updating || self.paginating
    }

    pub fn has_next_page(&self) -> bool {
        self.filters.page < self.total_pages
    }

    pub fn has_prev_page(&self) -> bool {
        self.filters.page > 1
    }

    pub(crate) fn clear_activity(&mut self) {
        self.loading = false;
        self.updating = false;
        self.paginating = false;
    }
}

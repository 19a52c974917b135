//! Listing filter state and partial updates.

use serde::{Deserialize, Serialize};
use shopdesk_catalog::ProductQuery;
use shopdesk_products::SortOrder;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// User-controlled parameters of a product listing.
///
/// `page` is 1-based and `limit` is the page size; both are at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilters {
    pub category: Option<String>,
    pub sort: Option<SortOrder>,
    pub page: u32,
    pub limit: u32,
}

impl ProductFilters {
    pub fn new(limit: u32) -> Self {
        Self {
            category: None,
            sort: None,
            page: 1,
            limit: limit.max(1),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = normalize_category(Some(category.into()));
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Server-side part of the filters.
    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            category: self.category.clone(),
        }
    }

    /// Merge a partial update into these filters.
    ///
    /// Whenever the update carries a category or a sort, the result lands on
    /// page 1 even if the same update also names a page.
    pub fn merge(&self, update: &FilterUpdate) -> Self {
        let mut next = self.clone();
        if let Some(category) = &update.category {
            next.category = normalize_category(category.clone());
        }
        if let Some(sort) = update.sort {
            next.sort = sort;
        }
        if let Some(limit) = update.limit {
            next.limit = limit.max(1);
        }
        next.page = if update.resets_page() {
            1
        } else {
            update.page.unwrap_or(self.page).max(1)
        };
        next
    }

    pub(crate) fn normalized(mut self) -> Self {
        self.category = normalize_category(self.category);
        self.page = self.page.max(1);
        self.limit = self.limit.max(1);
        self
    }
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Partial filter change. Fields left unset keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    category: Option<Option<String>>,
    sort: Option<Option<SortOrder>>,
    page: Option<u32>,
    limit: Option<u32>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category; a blank name selects all categories.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Some(category.into()));
        self
    }

    pub fn all_categories(mut self) -> Self {
        self.category = Some(None);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(Some(sort));
        self
    }

    /// Back to the high-rated-first default ordering.
    pub fn default_sort(mut self) -> Self {
        self.sort = Some(None);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Category or sort present: the merged filters restart at page 1.
    pub fn resets_page(&self) -> bool {
        self.category.is_some() || self.sort.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn normalize_category(category: Option<String>) -> Option<String> {
    category.filter(|c| !c.trim().is_empty())
}

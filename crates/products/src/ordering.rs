//! Client-side ordering, filtering and pagination of product snapshots.
//!
//! The remote catalog returns products in its own native order; everything the
//! listing shows is re-ordered and sliced here.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use shopdesk_core::{DomainError, DomainResult};

use crate::product::Product;

/// Products rated strictly above this rate are "high-rated".
pub const HIGH_RATING_THRESHOLD: f64 = 4.5;

/// Explicit price sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(DomainError::validation(format!(
                "sort must be one of: asc, desc (got {other:?})"
            ))),
        }
    }
}

/// Default listing order: high-rated products first (higher rate first), then
/// everything else by ascending id. Id is the final tie-break in both groups.
pub fn default_order(a: &Product, b: &Product) -> Ordering {
    match (a.high_rate(), b.high_rate()) {
        (Some(ra), Some(rb)) => rb.total_cmp(&ra).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

/// Stable sort by price. Equal prices keep their relative input order.
pub fn sort_by_price(products: &[Product], order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Desc => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    sorted
}

/// Order a full product set for display.
pub fn sort_products(products: &[Product], sort: Option<SortOrder>) -> Vec<Product> {
    match sort {
        Some(order) => sort_by_price(products, order),
        None => {
            let mut sorted = products.to_vec();
            sorted.sort_by(default_order);
            sorted
        }
    }
}

/// Number of pages needed to show `len` items, never less than one.
pub fn total_pages(len: usize, limit: u32) -> u32 {
    let limit = limit.max(1) as usize;
    let pages = len.div_ceil(limit);
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Slice the 1-based `page` out of `items`. Out-of-range pages are empty.
pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Vec<T> {
    let per_page = per_page.max(1) as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(per_page);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(per_page).min(items.len());
    items[start..end].to_vec()
}

/// Case-insensitive title search combined with an exact category match.
///
/// An empty search term or category matches everything.
pub fn filter_products(products: &[Product], search: &str, category: &str) -> Vec<Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .filter(|p| category.is_empty() || p.belongs_to(category))
        .cloned()
        .collect()
}

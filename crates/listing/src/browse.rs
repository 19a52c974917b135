//! Support for the `shopdesk-browse` binary: filters from the environment and
//! a plain-text rendering of a listing page.

use shopdesk_catalog::CatalogError;
use shopdesk_products::{SortOrder, TITLE_MAX_CHARS, format_currency, format_rating, truncate_text};

use crate::filters::{DEFAULT_PAGE_SIZE, ProductFilters};
use crate::state::ListState;

pub const ENV_CATEGORY: &str = "SHOPDESK_CATEGORY";
pub const ENV_SORT: &str = "SHOPDESK_SORT";
pub const ENV_PAGE_SIZE: &str = "SHOPDESK_PAGE_SIZE";

/// Initial listing filters from `SHOPDESK_CATEGORY`, `SHOPDESK_SORT` and
/// `SHOPDESK_PAGE_SIZE`.
pub fn filters_from_env() -> Result<ProductFilters, CatalogError> {
    filters_from_lookup(|key| std::env::var(key).ok())
}

pub fn filters_from_lookup<F>(lookup: F) -> Result<ProductFilters, CatalogError>
where
    F: Fn(&str) -> Option<String>,
{
    let limit = match lookup(ENV_PAGE_SIZE) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                CatalogError::Config(format!(
                    "{ENV_PAGE_SIZE}={raw:?}: expected a positive integer"
                ))
            })?,
        None => DEFAULT_PAGE_SIZE,
    };

    let mut filters = ProductFilters::new(limit);
    if let Some(category) = lookup(ENV_CATEGORY) {
        filters = filters.with_category(category);
    }
    if let Some(raw) = lookup(ENV_SORT).filter(|s| !s.trim().is_empty()) {
        filters = filters.with_sort(raw.parse::<SortOrder>()?);
    }
    Ok(filters)
}

/// Fails with the published message when the listing could not be loaded.
pub fn ensure_loaded(state: &ListState) -> anyhow::Result<()> {
    if let Some(error) = &state.error {
        anyhow::bail!("{error}");
    }
    Ok(())
}

/// One line per product plus a footer with the page position.
pub fn render_page(state: &ListState) -> Vec<String> {
    let mut lines: Vec<String> = state
        .products
        .iter()
        .map(|p| {
            let rating = p
                .rating
                .map(|r| format!("{} ({})", format_rating(r.rate), r.count))
                .unwrap_or_else(|| "unrated".to_string());
            format!(
                "#{:<4} {:<30} {:>12}  {}",
                p.id,
                truncate_text(&p.title, TITLE_MAX_CHARS),
                format_currency(p.price),
                rating
            )
        })
        .collect();

    if let Some(error) = &state.error {
        lines.push(error.clone());
    }
    lines.push(format!("page {} of {}", state.filters.page, state.total_pages));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FETCH_FAILED_MESSAGE;
    use shopdesk_core::ProductId;
    use shopdesk_products::{Product, Rating};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_all_categories_and_default_order() {
        let filters = filters_from_lookup(lookup(&[])).unwrap();
        assert_eq!(filters, ProductFilters::default());
    }

    #[test]
    fn reads_category_sort_and_page_size() {
        let filters = filters_from_lookup(lookup(&[
            (ENV_CATEGORY, "electronics"),
            (ENV_SORT, "desc"),
            (ENV_PAGE_SIZE, "4"),
        ]))
        .unwrap();

        assert_eq!(filters.category.as_deref(), Some("electronics"));
        assert_eq!(filters.sort, Some(SortOrder::Desc));
        assert_eq!(filters.limit, 4);
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            filters_from_lookup(lookup(&[(ENV_PAGE_SIZE, "0")])),
            Err(CatalogError::Config(_))
        ));
        assert!(matches!(
            filters_from_lookup(lookup(&[(ENV_SORT, "rating")])),
            Err(CatalogError::Domain(_))
        ));
    }

    #[test]
    fn failed_listing_is_an_error() {
        let mut state = ListState::initial(ProductFilters::default());
        state.loading = false;
        assert!(ensure_loaded(&state).is_ok());

        state.error = Some(FETCH_FAILED_MESSAGE.to_string());
        let err = ensure_loaded(&state).unwrap_err();
        assert_eq!(err.to_string(), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn renders_truncated_titles_and_prices() {
        let mut state = ListState::initial(ProductFilters::new(10));
        state.loading = false;
        state.products = vec![Product {
            id: ProductId::new(3),
            title: "Mens Cotton Jacket with Extra Long Name".to_string(),
            price: 1055.99,
            description: String::new(),
            category: "men's clothing".to_string(),
            image: String::new(),
            rating: Some(Rating::new(4.7, 500)),
        }];

        let lines = render_page(&state);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Mens Cotton Jacket with Ext..."));
        assert!(lines[0].contains("$1,055.99"));
        assert!(lines[0].contains("4.7 (500)"));
        assert_eq!(lines[1], "page 1 of 1");
    }
}

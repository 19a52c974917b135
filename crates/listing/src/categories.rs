use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use shopdesk_catalog::CatalogService;
use shopdesk_products::Category;

/// Message published when categories could not be loaded.
pub const CATEGORIES_FAILED_MESSAGE: &str = "Failed to load categories. Please try again.";

/// Snapshot of the category options offered to a filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryState {
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Loads the catalog's category list for filter/selection options.
pub struct CategoryList<S: ?Sized> {
    service: Arc<S>,
    state: Mutex<CategoryState>,
}

impl<S> CategoryList<S>
where
    S: CatalogService + ?Sized,
{
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            state: Mutex::new(CategoryState::default()),
        }
    }

    /// Fetch the category list, replacing any previous one.
    pub async fn load(&self) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.loading = true;
            state.error = None;
        }

        let result = self.service.get_categories().await;

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match result {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "categories loaded");
                state.categories = categories;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch categories");
                state.error = Some(CATEGORIES_FAILED_MESSAGE.to_string());
            }
        }
        state.loading = false;
    }

    pub fn state(&self) -> CategoryState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_catalog::InMemoryCatalog;
    use shopdesk_core::ProductId;
    use shopdesk_products::Product;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: 1.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: None,
        }
    }

    #[tokio::test]
    async fn loads_categories() {
        let service = Arc::new(InMemoryCatalog::with_products(vec![
            product(1, "electronics"),
            product(2, "jewelery"),
        ]));
        let list = CategoryList::new(service);
        assert!(list.state().categories.is_empty());

        list.load().await;
        let state = list.state();

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(
            state.categories,
            vec![Category::new("electronics"), Category::new("jewelery")]
        );
    }

    #[tokio::test]
    async fn failure_publishes_message_and_clears_loading() {
        let service = Arc::new(InMemoryCatalog::new());
        service.set_unavailable(true);
        let list = CategoryList::new(service);

        list.load().await;
        let state = list.state();

        assert!(!state.loading);
        assert!(state.categories.is_empty());
        assert_eq!(state.error.as_deref(), Some(CATEGORIES_FAILED_MESSAGE));
    }
}

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use shopdesk_core::ProductId;
use shopdesk_products::{Category, Product, ProductDraft, ProductUpdate};

use crate::error::CatalogError;
use crate::service::{CatalogService, ProductQuery};

/// In-memory catalog for tests/dev.
///
/// Keeps products in insertion order (the "native" order a remote catalog would
/// return), records every listing query, and can be switched into a failing
/// mode to exercise error paths.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<Vec<Product>>,
    queries: RwLock<Vec<ProductQuery>>,
    list_calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            ..Self::default()
        }
    }

    /// Replace the stored catalog wholesale.
    pub fn replace_products(&self, products: Vec<Product>) {
        if let Ok(mut stored) = self.products.write() {
            *stored = products;
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `list_products` calls served (including failed ones).
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Every listing query received, oldest first.
    pub fn queries(&self) -> Vec<ProductQuery> {
        self.queries.read().map(|q| q.clone()).unwrap_or_default()
    }

    fn ensure_available(&self) -> Result<(), CatalogError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(CatalogError::Network("catalog unavailable".to_string()))
        } else {
            Ok(())
        }
    }

    fn snapshot(&self) -> Vec<Product> {
        self.products.read().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.queries.write() {
            queries.push(query.clone());
        }
        self.ensure_available()?;

        Ok(self
            .snapshot()
            .into_iter()
            .filter(|p| match &query.category {
                Some(category) => p.belongs_to(category),
                None => true,
            })
            .collect())
    }

    async fn get_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.ensure_available()?;

        let mut categories: Vec<Category> = Vec::new();
        for product in self.snapshot() {
            if !categories.iter().any(|c| c.name == product.category) {
                categories.push(Category::new(product.category));
            }
        }
        Ok(categories)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.ensure_available()?;

        self.snapshot()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound)
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, CatalogError> {
        self.ensure_available()?;

        let mut products = self
            .products
            .write()
            .map_err(|_| CatalogError::Network("catalog lock poisoned".to_string()))?;
        let next_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        let product = Product {
            id: ProductId::new(next_id),
            title: draft.title.clone(),
            price: draft.price,
            description: draft.description.clone(),
            category: draft.category.clone(),
            image: draft.image.clone(),
            rating: None,
        };
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<Product, CatalogError> {
        self.ensure_available()?;

        let mut products = self
            .products
            .write()
            .map_err(|_| CatalogError::Network("catalog lock poisoned".to_string()))?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound)?;

        product.title = update.title.clone();
        product.price = update.price;
        product.description = update.description.clone();
        product.category = update.category.clone();
        product.image = update.image.clone();
        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        self.ensure_available()?;

        let mut products = self
            .products
            .write()
            .map_err(|_| CatalogError::Network("catalog lock poisoned".to_string()))?;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }
}

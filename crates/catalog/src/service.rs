//! The remote catalog contract.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shopdesk_core::ProductId;
use shopdesk_products::{Category, Product, ProductDraft, ProductUpdate};

use crate::error::CatalogError;

/// Server-side restriction of a product listing.
///
/// Only the category is delegated to the catalog; ordering and pagination are
/// done client-side on the full result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

impl ProductQuery {
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one category. A blank name means "all categories".
    pub fn in_category(category: impl Into<String>) -> Self {
        let category = category.into();
        Self {
            category: (!category.trim().is_empty()).then_some(category),
        }
    }
}

/// Product catalog operations offered by the remote service.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Every product in the queried category, in the service's native order.
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError>;

    async fn get_categories(&self) -> Result<Vec<Category>, CatalogError>;

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, CatalogError>;

    async fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<Product, CatalogError>;

    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError>;
}

#[async_trait]
impl<S> CatalogService for Arc<S>
where
    S: CatalogService + ?Sized,
{
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError> {
        (**self).list_products(query).await
    }

    async fn get_categories(&self) -> Result<Vec<Category>, CatalogError> {
        (**self).get_categories().await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        (**self).get_product(id).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, CatalogError> {
        (**self).create_product(draft).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<Product, CatalogError> {
        (**self).update_product(id, update).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        (**self).delete_product(id).await
    }
}

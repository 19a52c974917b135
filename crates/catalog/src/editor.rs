//! Create / edit / delete workflows over a `CatalogService`.

use std::sync::Arc;

use shopdesk_core::ProductId;
use shopdesk_products::{Product, ProductDraft, ProductUpdate};
use validator::Validate;

use crate::error::CatalogError;
use crate::service::CatalogService;

/// Validate a draft and create it in the catalog.
pub async fn create_product<S>(service: &S, draft: ProductDraft) -> Result<Product, CatalogError>
where
    S: CatalogService + ?Sized,
{
    draft.validate()?;
    service.create_product(&draft).await
}

pub async fn delete_product<S>(service: &S, id: ProductId) -> Result<(), CatalogError>
where
    S: CatalogService + ?Sized,
{
    service.delete_product(id).await
}

/// Edit session for one stored product.
///
/// Holds the snapshot loaded for editing; submissions keep its category.
pub struct ProductEditor<S: ?Sized> {
    service: Arc<S>,
    product: Product,
}

impl<S> ProductEditor<S>
where
    S: CatalogService + ?Sized,
{
    pub async fn load(service: Arc<S>, id: ProductId) -> Result<Self, CatalogError> {
        let product = service.get_product(id).await?;
        Ok(Self { service, product })
    }

    /// Load from a raw route segment such as `/products/edit/{id}`.
    pub async fn load_route(service: Arc<S>, raw_id: &str) -> Result<Self, CatalogError> {
        let id = raw_id.parse::<ProductId>()?;
        Self::load(service, id).await
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Form values prefilled from the loaded product.
    pub fn draft(&self) -> ProductDraft {
        ProductDraft::from_product(&self.product)
    }

    /// Validate and submit an edit. On success the session holds the updated
    /// snapshot; on failure it is left untouched.
    pub async fn submit(&mut self, draft: ProductDraft) -> Result<&Product, CatalogError> {
        draft.validate()?;
        let update = ProductUpdate::for_product(&self.product, draft);
        let updated = self.service.update_product(self.product.id, &update).await?;
        self.product = updated;
        Ok(&self.product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryCatalog;
    use shopdesk_core::DomainError;

    fn stored() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Silver Ring".to_string(),
            price: 19.99,
            description: "Sterling silver".to_string(),
            category: "jewelery".to_string(),
            image: "https://example.test/ring.jpg".to_string(),
            rating: None,
        }
    }

    fn draft(title: &str, category: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            price: 24.5,
            description: "Updated".to_string(),
            category: category.to_string(),
            image: "https://example.test/ring-2.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn create_validates_before_calling_service() {
        let catalog = InMemoryCatalog::new();

        let err = create_product(&catalog, draft("", "electronics")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(catalog.get_product(ProductId::new(1)).await.is_err());

        let created = create_product(&catalog, draft("Headphones", "electronics"))
            .await
            .unwrap();
        assert_eq!(created.id, ProductId::new(1));
        assert_eq!(created.category, "electronics");
    }

    #[tokio::test]
    async fn submit_keeps_stored_category() {
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![stored()]));
        let mut editor = ProductEditor::load(catalog.clone(), ProductId::new(1))
            .await
            .unwrap();

        let updated = editor
            .submit(draft("Gold Ring", "electronics"))
            .await
            .unwrap()
            .clone();

        assert_eq!(updated.title, "Gold Ring");
        assert_eq!(updated.category, "jewelery");
        assert_eq!(
            catalog.get_product(ProductId::new(1)).await.unwrap().category,
            "jewelery"
        );
    }

    #[tokio::test]
    async fn invalid_submit_leaves_snapshot_untouched() {
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![stored()]));
        let mut editor = ProductEditor::load(catalog, ProductId::new(1)).await.unwrap();

        let mut bad = editor.draft();
        bad.title = "x".repeat(40);

        assert!(matches!(
            editor.submit(bad).await,
            Err(CatalogError::Validation(_))
        ));
        assert_eq!(editor.product(), &stored());
    }

    #[tokio::test]
    async fn load_route_rejects_malformed_ids() {
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![stored()]));

        let err = ProductEditor::load_route(catalog.clone(), "abc").await.err().unwrap();
        assert!(matches!(err, CatalogError::Domain(DomainError::InvalidId(_))));

        let editor = ProductEditor::load_route(catalog, "1").await.unwrap();
        assert_eq!(editor.product().title, "Silver Ring");
    }

    #[tokio::test]
    async fn delete_removes_product() {
        let catalog = InMemoryCatalog::with_products(vec![stored()]);

        delete_product(&catalog, ProductId::new(1)).await.unwrap();

        assert!(matches!(
            catalog.get_product(ProductId::new(1)).await,
            Err(CatalogError::NotFound)
        ));
    }
}

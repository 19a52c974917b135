//! Product form model (create/edit) and its validation rules.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::product::Product;

/// Longest accepted product title; listings truncate titles to the same width.
pub const TITLE_MAX_CHARS: usize = 30;

const TITLE_MAX_LEN: u64 = TITLE_MAX_CHARS as u64;

/// Form data for creating or editing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(length(
        min = 1,
        max = TITLE_MAX_LEN,
        message = "title is required and cannot exceed 30 characters"
    ))]
    pub title: String,
    #[validate(custom(function = "validate_price"))]
    pub price: f64,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(url(message = "image must be a valid URL"))]
    pub image: String,
}

impl ProductDraft {
    /// Prefill a form from an existing product snapshot.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }
}

/// Payload of the edit flow.
///
/// The category is fixed at creation: it always comes from the stored product,
/// never from the submitted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ProductUpdate {
    pub fn for_product(existing: &Product, draft: ProductDraft) -> Self {
        Self {
            title: draft.title,
            price: draft.price,
            description: draft.description,
            category: existing.category.clone(),
            image: draft.image,
        }
    }
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::new("price_not_a_number")
            .with_message("price must be a number".into()));
    }
    if price <= 0.0 {
        return Err(ValidationError::new("price_not_positive")
            .with_message("price must be greater than zero".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_core::ProductId;

    fn draft() -> ProductDraft {
        ProductDraft {
            title: "Mechanical Keyboard".to_string(),
            price: 89.9,
            description: "Hot-swappable switches".to_string(),
            category: "electronics".to_string(),
            image: "https://example.test/keyboard.jpg".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn title_limits_are_enforced() {
        let mut empty = draft();
        empty.title = String::new();
        assert!(empty.validate().unwrap_err().field_errors().contains_key("title"));

        let mut long = draft();
        long.title = "x".repeat(TITLE_MAX_CHARS + 1);
        assert!(long.validate().unwrap_err().field_errors().contains_key("title"));

        let mut exact = draft();
        exact.title = "é".repeat(TITLE_MAX_CHARS);
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn price_must_be_positive_and_finite() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut bad = draft();
            bad.price = price;
            let errors = bad.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("price"), "price {price} accepted");
        }
    }

    #[test]
    fn smallest_positive_price_is_accepted() {
        let mut cheap = draft();
        cheap.price = 0.01;
        assert!(cheap.validate().is_ok());
    }

    #[test]
    fn all_field_errors_are_collected() {
        let bad = ProductDraft {
            title: String::new(),
            price: 0.0,
            description: String::new(),
            category: String::new(),
            image: "not a url".to_string(),
        };

        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();

        for field in ["title", "price", "description", "category", "image"] {
            assert!(fields.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn update_keeps_stored_category() {
        let existing = Product {
            id: ProductId::new(4),
            title: "Old".to_string(),
            price: 1.0,
            description: "Old".to_string(),
            category: "jewelery".to_string(),
            image: "https://example.test/old.jpg".to_string(),
            rating: None,
        };
        let mut edited = draft();
        edited.category = "electronics".to_string();

        let update = ProductUpdate::for_product(&existing, edited);

        assert_eq!(update.category, "jewelery");
        assert_eq!(update.title, "Mechanical Keyboard");
    }

    #[test]
    fn draft_prefills_from_product() {
        let existing = Product {
            id: ProductId::new(4),
            title: "Ring".to_string(),
            price: 9.5,
            description: "Silver".to_string(),
            category: "jewelery".to_string(),
            image: "https://example.test/ring.jpg".to_string(),
            rating: None,
        };

        let prefilled = ProductDraft::from_product(&existing);

        assert_eq!(prefilled.title, "Ring");
        assert_eq!(prefilled.category, "jewelery");
        assert!(prefilled.validate().is_ok());
    }
}

//! Products catalog model.
//!
//! Snapshots of the remote catalog (`Product`, `Rating`, `Category`), the product
//! form model with its validation rules, display formatting, and the pure
//! ordering/pagination primitives used by the listing engine (no IO, no HTTP).

pub mod form;
pub mod format;
pub mod ordering;
pub mod product;

pub use form::{ProductDraft, ProductUpdate, TITLE_MAX_CHARS};
pub use format::{format_currency, format_rating, truncate_text};
pub use ordering::{
    HIGH_RATING_THRESHOLD, SortOrder, default_order, filter_products, paginate, sort_by_price,
    sort_products, total_pages,
};
pub use product::{Category, Product, Rating};

//! `shopdesk-listing`
//!
//! **Responsibility:** the product listing engine behind a catalog browser.
//!
//! The engine owns the filter state, fetches the category-filtered product set
//! from a `CatalogService`, orders and paginates it client-side, and publishes
//! read-only `ListState` snapshots for a presentation layer to render.

pub mod browse;
pub mod categories;
pub mod engine;
pub mod filters;
pub mod state;

pub use categories::{CategoryList, CategoryState};
pub use engine::ProductListEngine;
pub use filters::{FilterUpdate, ProductFilters};
pub use state::ListState;

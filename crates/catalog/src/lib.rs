//! `shopdesk-catalog`
//!
//! **Responsibility:** the client side of the remote product catalog.
//!
//! This crate provides:
//! - The `CatalogService` contract consumed by the listing engine
//! - A reqwest-backed HTTP implementation and an in-memory one
//! - Client configuration loaded from the environment
//! - Create/edit/delete workflows with form validation
//!
//! The remote catalog remains the authority; nothing here persists data.

pub mod config;
pub mod editor;
pub mod error;
pub mod http;
pub mod in_memory;
pub mod service;

pub use config::CatalogConfig;
pub use editor::{ProductEditor, create_product, delete_product};
pub use error::CatalogError;
pub use http::HttpCatalogClient;
pub use in_memory::InMemoryCatalog;
pub use service::{CatalogService, ProductQuery};

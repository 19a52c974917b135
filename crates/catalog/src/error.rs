//! Catalog client errors.

use shopdesk_core::DomainError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("product not found")]
    NotFound,
    #[error("invalid product: {0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Transport-level failures worth surfacing as "try again" to a user.
    pub fn is_transient(&self) -> bool {
        match self {
            CatalogError::Network(_) => true,
            CatalogError::Api(status, _) => *status >= 500,
            _ => false,
        }
    }
}

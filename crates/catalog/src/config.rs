//! Catalog client configuration.

use std::time::Duration;

use crate::error::CatalogError;

pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_URL: &str = "SHOPDESK_API_URL";
pub const ENV_AUTH_TOKEN: &str = "SHOPDESK_AUTH_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "SHOPDESK_TIMEOUT_SECS";

/// Where the remote catalog lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_url: String,
    pub auth_token: Option<String>,
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            auth_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_token(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(token.into()),
            ..Self::new(api_url)
        }
    }

    /// Load from `SHOPDESK_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (environment, test fixtures, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let auth_token = lookup(ENV_AUTH_TOKEN).filter(|v| !v.trim().is_empty());

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    CatalogError::Config(format!("{ENV_TIMEOUT_SECS}={raw:?}: {e}"))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            auth_token,
            timeout,
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

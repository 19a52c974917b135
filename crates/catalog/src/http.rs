//! HTTP client for the remote catalog (fakestoreapi-compatible REST API).

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use shopdesk_core::ProductId;
use shopdesk_products::{Category, Product, ProductDraft, ProductUpdate};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::service::{CatalogService, ProductQuery};

/// reqwest-backed `CatalogService`.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpCatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| {
            CatalogError::Config(format!("invalid API URL {:?}: {e}", config.api_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::Config(format!(
                "API URL {:?} cannot be used as a base",
                config.api_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment.
    pub(crate) fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "catalog request");
        let req = self.client.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, CatalogError> {
        let resp = req
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::Api(status.as_u16(), body));
        }
        Ok(resp)
    }

    async fn json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, CatalogError> {
        let resp = self.send(req).await?;
        resp.json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Single-record reads: the catalog answers unknown ids with an empty body.
    async fn json_record<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, CatalogError> {
        let resp = self.send(req).await?;
        let body = resp
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(CatalogError::NotFound);
        }
        serde_json::from_str(trimmed).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogService for HttpCatalogClient {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError> {
        let url = match &query.category {
            Some(category) => self.endpoint(["products", "category", category.as_str()]),
            None => self.endpoint(["products"]),
        };
        let products: Vec<Product> = self.json(self.request(Method::GET, url)).await?;
        tracing::info!(
            category = query.category.as_deref().unwrap_or("*"),
            count = products.len(),
            "fetched products"
        );
        Ok(products)
    }

    async fn get_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let url = self.endpoint(["products", "categories"]);
        let names: Vec<String> = self.json(self.request(Method::GET, url)).await?;
        Ok(names.into_iter().map(Category::from).collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let url = self.endpoint(["products".to_string(), id.to_string()]);
        self.json_record(self.request(Method::GET, url)).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, CatalogError> {
        let url = self.endpoint(["products"]);
        let product: Product = self
            .json(self.request(Method::POST, url).json(draft))
            .await?;
        tracing::info!(product_id = %product.id, "created product");
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<Product, CatalogError> {
        let url = self.endpoint(["products".to_string(), id.to_string()]);
        let product: Product = self
            .json_record(self.request(Method::PUT, url).json(update))
            .await?;
        tracing::info!(product_id = %id, "updated product");
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        let url = self.endpoint(["products".to_string(), id.to_string()]);
        self.send(self.request(Method::DELETE, url)).await?;
        tracing::info!(product_id = %id, "deleted product");
        Ok(())
    }
}

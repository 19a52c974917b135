//! `shopdesk-browse`: print one page of the remote catalog.

use std::sync::Arc;

use anyhow::Context;
use shopdesk_catalog::{CatalogConfig, HttpCatalogClient};
use shopdesk_listing::browse::{ensure_loaded, filters_from_env, render_page};
use shopdesk_listing::{CategoryList, ProductListEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopdesk_observability::init();

    let config = CatalogConfig::from_env().context("invalid catalog configuration")?;
    let filters = filters_from_env().context("invalid listing filters")?;
    tracing::info!(api_url = %config.api_url, ?filters, "browsing catalog");

    let client =
        Arc::new(HttpCatalogClient::new(&config).context("failed to build catalog client")?);

    let categories = CategoryList::new(client.clone());
    let engine = ProductListEngine::new(client, filters);
    tokio::join!(categories.load(), engine.activate());

    let categories = categories.state();
    if !categories.categories.is_empty() {
        let names: Vec<&str> = categories.categories.iter().map(|c| c.name.as_str()).collect();
        println!("categories: {}", names.join(", "));
    }

    let state = engine.state();
    for line in render_page(&state) {
        println!("{line}");
    }

    ensure_loaded(&state)
}

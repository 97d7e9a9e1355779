//! HTTP client for the catalog service.

use crate::catalog::error::CatalogError;
use crate::catalog::models::{Category, Fetched, Product};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

/// Trait for catalog fetching - enables mocking for tests.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Lists top-level categories, or the subcategories of `parent_id`.
    async fn fetch_categories(&self, parent_id: Option<&str>) -> Fetched<Category>;

    /// Lists the products of a category.
    async fn fetch_products(&self, category_id: &str) -> Fetched<Product>;
}

/// Catalog HTTP client with a browser-like signature.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl CatalogClient {
    /// Creates a new catalog client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// Returns the base URL all endpoints hang off.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn showcases_url(&self, parent_id: Option<&str>) -> String {
        match parent_id {
            Some(id) => format!("{}/showcases?parent={}", self.base_url, urlencoding::encode(id)),
            None => format!("{}/showcases", self.base_url),
        }
    }

    fn products_url(&self, category_id: &str) -> String {
        format!("{}/products?category={}", self.base_url, urlencoding::encode(category_id))
    }

    /// Performs a GET request and decodes a JSON array.
    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, CatalogError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| CatalogError::Network { url: url.to_string(), source })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(CatalogError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Network { url: url.to_string(), source })?;

        serde_json::from_str(&body)
            .map_err(|source| CatalogError::Decode { url: url.to_string(), source })
    }
}

/// Logs a failed fetch; the caller still receives the cause.
fn logged<T>(fetched: Fetched<T>) -> Fetched<T> {
    if let Fetched::Failed(err) = &fetched {
        warn!("{}", err);
    }
    fetched
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_categories(&self, parent_id: Option<&str>) -> Fetched<Category> {
        let url = self.showcases_url(parent_id);

        match parent_id {
            Some(id) => info!("Fetching subcategories of {}", id),
            None => info!("Fetching top-level categories"),
        }
        logged(Fetched::from(self.get_list::<Category>(&url).await))
    }

    async fn fetch_products(&self, category_id: &str) -> Fetched<Product> {
        let url = self.products_url(category_id);

        info!("Fetching products of {}", category_id);
        logged(Fetched::from(self.get_list::<Product>(&url).await))
    }
}

//! HTTP implementation of [`CatalogApi`]

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use super::CatalogApi;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::{Product, ProductsResponse, QueryState};

const SEED_PATH: &str = "/api/seed";
const PRODUCTS_PATH: &str = "/api/products";

#[derive(Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Build a client for the configured backend. No request timeout is set;
    /// a hung request stays pending.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full products URL for `query`, with `q` and `category` only when set.
    pub fn products_url(&self, query: &QueryState) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, PRODUCTS_PATH))
            .map_err(|e| CatalogError::Config(format!("invalid API URL: {e}")))?;

        let term = query.term_param();
        let category = query.category_param();
        if term.is_some() || category.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(term) = term {
                pairs.append_pair("q", term);
            }
            if let Some(category) = category {
                pairs.append_pair("category", category);
            }
        }

        Ok(url)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(CatalogError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn seed(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, SEED_PATH);
        let response = self.client.post(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn list_products(&self, query: &QueryState) -> Result<Vec<Product>> {
        let url = self.products_url(query)?;
        debug!(%url, "GET products");

        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response).await?;

        // Decode via serde_json so malformed bodies surface as Decode errors
        let bytes = response.bytes().await?;
        let body: ProductsResponse = serde_json::from_slice(&bytes)?;
        Ok(body.items)
    }
}

//! Catalog backend boundary
//!
//! The coordinator only ever talks to a [`CatalogApi`]. Production code uses
//! [`HttpCatalogClient`]; tests substitute an in-memory double.

pub mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Product, QueryState};

pub use http::HttpCatalogClient;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Ask the backend to populate its catalog. Idempotent; the response body
    /// carries nothing of interest.
    async fn seed(&self) -> Result<()>;

    /// Fetch products matching `query`, in backend order.
    async fn list_products(&self, query: &QueryState) -> Result<Vec<Product>>;
}

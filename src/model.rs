//! Catalog data model
//!
//! Wire types for the products endpoint plus the client-side query and fetch
//! state that the coordinator publishes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

// =============================================================================
// WIRE TYPES
// =============================================================================

/// A product as returned by `GET /api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier. Document stores send it as `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub in_stock: bool,
    /// 0-5 when present
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews_count: Option<u32>,
}

/// Body of the products endpoint. A missing `items` field means no results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub items: Vec<Product>,
}

// =============================================================================
// QUERY STATE
// =============================================================================

/// User-controlled query: free-text term and selected category.
///
/// An empty category means "all categories".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub term: String,
    pub category: String,
}

impl QueryState {
    pub fn new(term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            category: category.into(),
        }
    }

    /// Value for the `q` parameter, `None` when it should be omitted
    pub fn term_param(&self) -> Option<&str> {
        let term = self.term.trim();
        (!term.is_empty()).then_some(term)
    }

    /// Value for the `category` parameter, `None` for "all categories"
    pub fn category_param(&self) -> Option<&str> {
        let category = self.category.trim();
        if category.is_empty() || category.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(category)
        }
    }
}

// =============================================================================
// FETCH STATE
// =============================================================================

/// Lifecycle of the product fetch.
///
/// `Idle -> Loading -> Success | Failure`, and any state may go back to
/// `Loading` when a new request is issued. The item list lives beside the
/// state in [`CatalogSnapshot`] so a failure can leave it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Failure(String),
}

/// Everything the presenter needs, published as one value per change
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub query: QueryState,
    pub state: FetchState,
    /// Items from the last successful fetch. Replaced wholesale, never edited.
    pub items: Arc<[Product]>,
    /// Sequence number of the most recently issued fetch (0 before the first)
    pub request_seq: u64,
}

impl CatalogSnapshot {
    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

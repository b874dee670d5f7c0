//! Shared test doubles for coordinator scenarios
//!
//! `FakeCatalog` records every call and answers from scripted responses,
//! optionally after a per-term delay (driven by paused tokio time).

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use storefront::{CatalogApi, CatalogError, Product, QueryState};

pub fn product(id: &str, title: &str, price: f64, category: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price,
        category: (!category.is_empty()).then(|| category.to_string()),
        image_url: None,
        in_stock: true,
        rating: None,
        reviews_count: None,
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    seed_fails: bool,
    seeds: Mutex<usize>,
    calls: Mutex<Vec<QueryState>>,
    /// Items per search term; unknown terms get `default_items`
    by_term: HashMap<String, Vec<Product>>,
    default_items: Vec<Product>,
    delays: HashMap<String, Duration>,
    failing_terms: Vec<String>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, items: Vec<Product>) -> Self {
        self.default_items = items;
        self
    }

    pub fn with_term(mut self, term: &str, items: Vec<Product>) -> Self {
        self.by_term.insert(term.to_string(), items);
        self
    }

    pub fn with_delay(mut self, term: &str, delay: Duration) -> Self {
        self.delays.insert(term.to_string(), delay);
        self
    }

    pub fn failing_for(mut self, term: &str) -> Self {
        self.failing_terms.push(term.to_string());
        self
    }

    pub fn failing_seed(mut self) -> Self {
        self.seed_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<QueryState> {
        self.calls.lock().unwrap().clone()
    }

    pub fn seed_count(&self) -> usize {
        *self.seeds.lock().unwrap()
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn seed(&self) -> storefront::Result<()> {
        *self.seeds.lock().unwrap() += 1;
        if self.seed_fails {
            return Err(CatalogError::Status {
                status: 500,
                body: "seed exploded".into(),
            });
        }
        Ok(())
    }

    async fn list_products(&self, query: &QueryState) -> storefront::Result<Vec<Product>> {
        self.calls.lock().unwrap().push(query.clone());

        if let Some(delay) = self.delays.get(&query.term) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing_terms.contains(&query.term) {
            return Err(CatalogError::Status {
                status: 502,
                body: "bad gateway".into(),
            });
        }

        let items = self
            .by_term
            .get(&query.term)
            .cloned()
            .unwrap_or_else(|| self.default_items.clone());

        Ok(items
            .into_iter()
            .filter(|p| {
                query.category.is_empty() || p.category.as_deref() == Some(query.category.as_str())
            })
            .collect())
    }
}

/// Let timers up to `ms` fire and spawned work run to completion.
pub async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

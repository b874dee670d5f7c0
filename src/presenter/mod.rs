//! Result Presenter
//!
//! Turns a [`CatalogSnapshot`] into a renderer-agnostic [`CatalogView`].
//! Nothing here knows about the network.

pub mod card;
pub mod categories;

use std::sync::Arc;

use crate::model::{CatalogSnapshot, FetchState, QueryState};

pub use card::{format_price, ProductCard, StockBadge};
pub use categories::{derive_categories, CategoryMemo};

/// Placeholder cards shown while a fetch is in flight
pub const SKELETON_COUNT: usize = 8;

pub const NO_RESULTS_MESSAGE: &str = "No products found";

/// What the main area shows. Exactly one applies at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    Loading { skeletons: usize },
    Error { message: String },
    Empty,
    Grid(Vec<ProductCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub query: QueryState,
    /// Category filter options, from the current items
    pub categories: Arc<[String]>,
    pub body: ViewBody,
}

/// Pick the body for `snapshot`: loading, then error, then empty, then grid.
pub fn select_body(snapshot: &CatalogSnapshot) -> ViewBody {
    match &snapshot.state {
        FetchState::Loading => ViewBody::Loading {
            skeletons: SKELETON_COUNT,
        },
        FetchState::Failure(message) => ViewBody::Error {
            message: message.clone(),
        },
        FetchState::Idle | FetchState::Success if snapshot.items.is_empty() => ViewBody::Empty,
        FetchState::Idle | FetchState::Success => {
            ViewBody::Grid(snapshot.items.iter().map(ProductCard::from).collect())
        }
    }
}

/// Stateful presenter that memoizes category derivation between frames
#[derive(Debug, Default)]
pub struct Presenter {
    categories: CategoryMemo,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn present(&mut self, snapshot: &CatalogSnapshot) -> CatalogView {
        CatalogView {
            query: snapshot.query.clone(),
            categories: self.categories.get(&snapshot.items),
            body: select_body(snapshot),
        }
    }
}

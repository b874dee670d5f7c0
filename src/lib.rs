//! Storefront catalog browser
//!
//! Search and category filtering over a product catalog served by a backend
//! API.
//!
//! ## Architecture
//! User input -> [`CatalogCoordinator`] (query state, debounce, fetch) ->
//! [`CatalogSnapshot`] store -> [`Presenter`] (categories, view selection) ->
//! renderer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront::{CatalogConfig, CatalogCoordinator, Presenter};
//!
//! # async fn run() -> storefront::Result<()> {
//! let config = CatalogConfig::from_env()?;
//! let coordinator = CatalogCoordinator::with_http(&config)?;
//! coordinator.initialize().await;
//! coordinator.set_term("shoe");
//!
//! let mut presenter = Presenter::new();
//! let view = presenter.present(&coordinator.snapshot());
//! println!("{}", storefront::render::render_view(&view));
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

pub mod config;
pub mod model;

// Backend boundary
pub mod api;

// Query coordination
pub mod coordinator;
pub mod schedule;

// View model and text rendering
pub mod presenter;
pub mod render;

pub use api::{CatalogApi, HttpCatalogClient};
pub use config::CatalogConfig;
pub use coordinator::{CatalogCoordinator, FETCH_FAILED_MESSAGE};
pub use error::{CatalogError, Result};
pub use model::{CatalogSnapshot, FetchState, Product, ProductsResponse, QueryState};
pub use presenter::{CatalogView, Presenter, ProductCard, ViewBody};

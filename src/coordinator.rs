//! Catalog Query Coordinator
//!
//! Owns the query state and the fetch lifecycle. Query changes are applied
//! immediately and turned into a backend request after a quiet period;
//! results land in a single `watch` store that renderers subscribe to.
//!
//! Every fetch takes a sequence number when it is issued. A response is only
//! applied if no newer fetch has been issued since, so the displayed items
//! always belong to the most recently issued request.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::{CatalogApi, HttpCatalogClient};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::model::{CatalogSnapshot, FetchState, QueryState};
use crate::schedule::Debouncer;

/// Banner text for any failed product fetch. Raw errors only go to the log.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load products";

#[derive(Clone)]
pub struct CatalogCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn CatalogApi>,
    store: watch::Sender<CatalogSnapshot>,
    debouncer: Mutex<Debouncer>,
}

impl CatalogCoordinator {
    pub fn new(api: Arc<dyn CatalogApi>, config: &CatalogConfig) -> Self {
        let (store, _) = watch::channel(CatalogSnapshot::default());
        Self {
            inner: Arc::new(Inner {
                api,
                store,
                debouncer: Mutex::new(Debouncer::new(config.debounce)),
            }),
        }
    }

    /// Coordinator backed by the HTTP client for `config.api_base_url`.
    pub fn with_http(config: &CatalogConfig) -> Result<Self> {
        let client = HttpCatalogClient::new(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    // =========================================================================
    // STATE ACCESS
    // =========================================================================

    /// Current state. Items are shared, so this is cheap.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.inner.store.borrow().clone()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.inner.store.subscribe()
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Seed the catalog, then load the first page of products.
    ///
    /// A failed seed is logged and otherwise ignored; the fetch always runs.
    pub async fn initialize(&self) {
        match self.inner.api.seed().await {
            Ok(()) => info!("Catalog seed completed"),
            Err(e) => info!(error = %e, "Catalog seed failed, continuing without it"),
        }

        let query = self.snapshot().query;
        self.fetch_products(query).await;
    }

    pub fn set_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.update_query(|query| query.term = term);
    }

    pub fn set_category(&self, category: impl Into<String>) {
        let category = category.into();
        self.update_query(|query| query.category = category);
    }

    /// Select "all categories"
    pub fn clear_category(&self) {
        self.update_query(|query| query.category.clear());
    }

    pub fn set_query(&self, next: QueryState) {
        self.update_query(|query| *query = next);
    }

    /// Refetch the current query right away, bypassing the debounce.
    pub async fn refresh(&self) {
        self.debouncer().cancel();
        let query = self.snapshot().query;
        self.fetch_products(query).await;
    }

    /// Drop a scheduled fetch that has not fired yet.
    pub fn cancel_pending(&self) {
        self.debouncer().cancel();
    }

    /// Issue one request for `query` and record its outcome.
    ///
    /// State is `Loading` from issue until this request (or a newer one)
    /// settles. A failure keeps the current items and only sets the error.
    pub async fn fetch_products(&self, query: QueryState) {
        let mut seq = 0;
        self.inner.store.send_modify(|snapshot| {
            snapshot.request_seq += 1;
            seq = snapshot.request_seq;
            snapshot.state = FetchState::Loading;
        });
        debug!(seq, term = %query.term, category = %query.category, "Issuing product fetch");

        let result = self.inner.api.list_products(&query).await;

        let applied = self.inner.store.send_if_modified(|snapshot| {
            if snapshot.request_seq != seq {
                return false;
            }
            match &result {
                Ok(items) => {
                    snapshot.items = items.clone().into();
                    snapshot.state = FetchState::Success;
                }
                Err(_) => {
                    snapshot.state = FetchState::Failure(FETCH_FAILED_MESSAGE.to_string());
                }
            }
            true
        });

        match (&result, applied) {
            (_, false) => debug!(seq, "Discarding response superseded by a newer fetch"),
            (Ok(items), true) => info!(seq, items = items.len(), "Products loaded"),
            (Err(e), true) => {
                warn!(seq, error = %e, transient = e.is_transient(), "Product fetch failed")
            }
        }
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Apply `edit` to the query; schedule a debounced fetch if it changed.
    fn update_query<F>(&self, edit: F)
    where
        F: FnOnce(&mut QueryState),
    {
        let changed = self.inner.store.send_if_modified(|snapshot| {
            let before = snapshot.query.clone();
            edit(&mut snapshot.query);
            snapshot.query != before
        });

        if changed {
            self.schedule_fetch();
        }
    }

    fn schedule_fetch(&self) {
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let mut debouncer = self.debouncer();
        debug!(delay_ms = debouncer.delay().as_millis() as u64, "Scheduling product fetch");

        // The query is read when the timer fires so the latest values win
        debouncer.call(async move {
            if let Some(inner) = weak.upgrade() {
                let coordinator = CatalogCoordinator { inner };
                let query = coordinator.snapshot().query;
                coordinator.fetch_products(query).await;
            }
        });
    }

    fn debouncer(&self) -> MutexGuard<'_, Debouncer> {
        match self.inner.debouncer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

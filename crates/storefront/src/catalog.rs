//! Cached catalog snapshot.
//!
//! Products, categories and brands are loaded together from the backend and
//! kept in a `moka` cache for the configured TTL. Concurrent misses share one
//! load. A fresh load reloads the carousel only when its slides changed, so
//! a TTL expiry does not send shoppers back to the first slide.

use std::sync::Arc;

use moka::future::Cache;
use remakeup_core::carousel::Slide;
use remakeup_core::{Brand, Category, Product, ProductId};
use tracing::{info, instrument};

use crate::autoplay::Autoplay;
use crate::backend::{BackendClient, BackendError};
use crate::config::CatalogConfig;

/// Everything the storefront pages read from the backend.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
}

impl CatalogSnapshot {
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Loads and caches the catalog, and keeps the carousel in step with it.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<CatalogServiceInner>,
}

struct CatalogServiceInner {
    backend: BackendClient,
    autoplay: Arc<Autoplay>,
    cache: Cache<(), Arc<CatalogSnapshot>>,
}

impl CatalogService {
    #[must_use]
    pub fn new(backend: BackendClient, autoplay: Arc<Autoplay>, config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogServiceInner {
                backend,
                autoplay,
                cache,
            }),
        }
    }

    #[must_use]
    pub fn autoplay(&self) -> &Autoplay {
        &self.inner.autoplay
    }

    /// The current snapshot, loading it if missing or expired.
    ///
    /// # Errors
    ///
    /// Returns the backend error of the load that was attempted. Callers
    /// waiting on the same load share it.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, Arc<BackendError>> {
        self.inner
            .cache
            .try_get_with((), self.load())
            .await
    }

    /// Drop the cached snapshot so the next read reloads it.
    pub async fn invalidate(&self) {
        self.inner.cache.invalidate(&()).await;
        info!("Catalog snapshot invalidated");
    }

    /// Install a snapshot without asking the backend.
    pub async fn seed(&self, snapshot: CatalogSnapshot) {
        let snapshot = Arc::new(snapshot);
        self.reload_carousel(&snapshot);
        self.inner.cache.insert((), snapshot).await;
    }

    #[instrument(skip(self))]
    async fn load(&self) -> Result<Arc<CatalogSnapshot>, BackendError> {
        let backend = &self.inner.backend;
        let (products, categories, brands) = tokio::try_join!(
            backend.list_products(),
            backend.list_categories(),
            backend.list_brands(),
        )?;

        info!(
            products = products.len(),
            categories = categories.len(),
            brands = brands.len(),
            "Catalog snapshot loaded"
        );

        let snapshot = Arc::new(CatalogSnapshot {
            products,
            categories,
            brands,
        });
        self.reload_carousel(&snapshot);
        Ok(snapshot)
    }

    fn reload_carousel(&self, snapshot: &CatalogSnapshot) {
        self.inner
            .autoplay
            .refresh(Slide::sequence(&snapshot.products));
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("backend", &self.inner.backend.base_url().as_str())
            .field("autoplay", &self.inner.autoplay)
            .finish_non_exhaustive()
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use crate::autoplay::Autoplay;
use crate::backend::{BackendClient, BackendError};
use crate::catalog::CatalogService;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    backend: BackendClient,
    catalog: CatalogService,
}

impl AppState {
    /// Build the backend client, the autoplay carousel and the catalog cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, BackendError> {
        let backend = BackendClient::new(&config.backend)?;
        let autoplay = Arc::new(Autoplay::new(config.catalog.carousel_interval));
        let catalog = CatalogService::new(backend.clone(), autoplay, &config.catalog);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                catalog,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the store backend client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Get a reference to the cached catalog.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the promotional carousel.
    #[must_use]
    pub fn autoplay(&self) -> &Autoplay {
        self.inner.catalog.autoplay()
    }
}

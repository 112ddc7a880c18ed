//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::CmsApi;
use crate::catalog::{CatalogBackend, CatalogError, CatalogStore, JsonFileBackend, MemoryBackend};
use crate::config::StorefrontConfig;
use crate::content::ContentStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and gives every handler the
/// same [`CmsApi`] instance, constructed once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    api: CmsApi,
}

impl AppState {
    /// Create the application state with seeded stores.
    ///
    /// The catalog is backed by `config.catalog_path` when set, otherwise
    /// it lives in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file exists but cannot be read, or
    /// cannot be written while seeding.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let backend: Box<dyn CatalogBackend> = match &config.catalog_path {
            Some(path) => {
                let file = JsonFileBackend::new(path);
                tracing::info!(path = %file.path().display(), "Using JSON catalog file");
                Box::new(file)
            }
            None => {
                tracing::warn!("CATALOG_PATH not set, catalog changes will not survive a restart");
                Box::new(MemoryBackend::default())
            }
        };
        let catalog = CatalogStore::open(backend)?;
        let api = CmsApi::new(ContentStore::seeded(), catalog, config.latency);

        Ok(Self::with_api(config, api))
    }

    /// Create the application state around an already-built facade.
    #[must_use]
    pub fn with_api(config: StorefrontConfig, api: CmsApi) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, api }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the content and catalog facade.
    #[must_use]
    pub fn api(&self) -> &CmsApi {
        &self.inner.api
    }
}

//! Wiring of the state layer around one set of collaborators.
//!
//! Nothing here is global: screens (or the CLI) receive an [`App`] and take
//! the stores they need from it.

use std::sync::Arc;

use crate::adapters::{FileKeyValueStore, PokeApiClient, ReqwestHttpClient};
use crate::config::AppConfig;
use crate::error::{DexError, DexResult, StorageError};
use crate::state::{DetailsFetchCoordinator, FavoritesStore, PaginatedListCache};
use crate::theme::ThemeEngine;
use crate::traits::{CatalogueApi, KeyValueStore};

pub struct App {
    pub config: AppConfig,
    pub api: Arc<dyn CatalogueApi>,
    pub favorites: FavoritesStore,
    pub theme: ThemeEngine,
}

impl App {
    /// Hydrate favorites from `store` and seed the theme from `config`.
    pub async fn new(
        config: AppConfig,
        api: Arc<dyn CatalogueApi>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let favorites = FavoritesStore::hydrate(store).await;
        let theme = ThemeEngine::new(config.initial_theme());
        Self {
            config,
            api,
            favorites,
            theme,
        }
    }

    /// Production wiring: reqwest transport, PokeAPI catalogue, file store.
    pub async fn from_config(config: AppConfig) -> DexResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)
            .map_err(|err| DexError::client(err.to_string()))?;
        let api = PokeApiClient::new(Arc::new(http))
            .with_base_url(config.api_base_url.clone())
            .with_page_size(config.page_size);
        let data_dir = config
            .data_dir
            .clone()
            .ok_or(StorageError::NoDataDirectory)?;
        let store = FileKeyValueStore::new(data_dir);
        tracing::debug!(base_url = %config.api_base_url, "catalogue client configured");
        Ok(Self::new(config, Arc::new(api), Arc::new(store)).await)
    }

    /// A fresh list cache for a new listing session.
    pub fn list_cache(&self) -> PaginatedListCache {
        PaginatedListCache::new(Arc::clone(&self.api))
    }

    pub fn details(&self) -> DetailsFetchCoordinator {
        DetailsFetchCoordinator::new(Arc::clone(&self.api), self.config.language.clone())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("favorites", &self.favorites)
            .field("theme", &self.theme.mode())
            .finish()
    }
}

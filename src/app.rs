//! Root application object: storage, session store, API client and router.
//!
//! A view layer owns one `App` and hands its parts to the page controllers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use crate::config::{ClientConfig, ConfigError};
use crate::net::api::ApiClient;
use crate::net::types::ApiError;
use crate::state::store::SessionStore;
use crate::util::router::{Route, Router};
use crate::util::storage::{KeyValueStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
    #[error("api client: {0}")]
    Api(#[from] ApiError),
}

pub struct App {
    pub api: ApiClient,
    pub session: SessionStore,
    pub router: Router,
    storage: Arc<dyn KeyValueStore>,
}

impl App {
    /// Load `.env`, read config from the environment and build the app.
    ///
    /// # Errors
    ///
    /// Returns an error if config is invalid or storage cannot be opened.
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();
        let config = ClientConfig::from_env()?;
        Self::from_config(&config)
    }

    /// Build with the storage backend selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file store cannot be opened or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, AppError> {
        let storage = default_storage(config)?;
        Self::with_storage(config, storage)
    }

    /// Build over an explicit storage backend, rehydrating the session and
    /// starting on the route the guard allows.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_storage(config: &ClientConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let api = ApiClient::new(&config.api_base_url, config.timeouts)?
            .with_auth(Arc::clone(&storage), &config.token_key);
        let session = SessionStore::open(Arc::clone(&storage), config.session_key.clone());
        let mut router = Router::new();
        if session.is_authenticated() {
            router.navigate(Route::Dashboard, session.state());
        }
        tracing::info!(
            base_url = %config.api_base_url,
            authenticated = session.is_authenticated(),
            route = %router.current(),
            "portal client ready"
        );
        Ok(Self { api, session, router, storage })
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }

    /// Navigate the app router against the current session.
    pub fn navigate(&mut self, route: Route) -> bool {
        self.router.navigate(route, self.session.state())
    }
}

#[cfg(not(feature = "hydrate"))]
fn default_storage(config: &ClientConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    use crate::util::storage::{FileStorage, MemoryStorage};

    let storage: Arc<dyn KeyValueStore> = match &config.storage_path {
        Some(path) => Arc::new(FileStorage::open(path)?),
        None => Arc::new(MemoryStorage::new()),
    };
    Ok(storage)
}

#[cfg(feature = "hydrate")]
fn default_storage(config: &ClientConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let _ = config;
    Ok(Arc::new(crate::util::storage::BrowserStorage))
}

//! Shared application state.

use std::sync::Arc;

use lectern_directory::{DirectoryCache, DirectoryClient};
use lectern_profiles::ProfileAggregator;
use lectern_ratings::{RatingsCache, RatingsClient};
use lectern_storage::MemoryStore;

use crate::config::ApiConfig;

/// The concrete aggregator wiring used by the server: HTTP clients over the
/// shared in-memory store.
pub type Aggregator = ProfileAggregator<DirectoryClient, RatingsClient, MemoryStore>;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ApiConfig>,
    /// Profile aggregator over the directory and ratings caches.
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    /// Build the full production wiring from configuration: one pooled
    /// HTTP client shared by both upstreams, one shared in-memory store.
    pub fn from_config(config: ApiConfig) -> Self {
        let http = reqwest::Client::new();
        let store = MemoryStore::new();

        let directory = DirectoryCache::new(
            DirectoryClient::with_client(http.clone(), config.directory_base_url.clone()),
            store.clone(),
        );
        let ratings = RatingsCache::new(
            RatingsClient::with_client(
                http,
                config.ratings_endpoint.clone(),
                config.ratings_authorization.clone(),
            ),
            store,
        );

        Self {
            config: Arc::new(config),
            aggregator: Arc::new(ProfileAggregator::new(directory, ratings)),
        }
    }
}

//! The [`KeyValueStore`] trait.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

/// Errors surfaced by a storage backend.
///
/// The caches absorb these into their failure sentinels; a store error never
/// propagates past a cache boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store failed to read or write.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// An async key-value store addressed by string keys holding JSON values.
///
/// Keys are namespaced per source by the caches (`directory:<id>`,
/// `ratings:<id-or-name>`). The batch `get`/`set` shapes mirror the host
/// storage interface the caches were designed against.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the stored values for `keys`. Absent keys are simply missing
    /// from the returned map.
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, StoreError>;

    /// Store every entry in `entries`, overwriting existing values.
    async fn set(&self, entries: HashMap<String, Value>) -> Result<(), StoreError>;

    /// Delete `key` if present. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

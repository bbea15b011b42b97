//! Time-bounded cache over the directory lookup.
//!
//! Read path: fresh stored entry → return it unchanged, no network. Miss or
//! expiry → one upstream fetch, one store write. Every failure mode
//! (transport, empty payload, malformed payload, store errors, corrupted
//! entries) is absorbed into the `{data: None, success: false}` sentinel and
//! the affected key is removed best-effort so the next call retries clean.
//! `get_profile` never fails outward.

use std::collections::HashMap;

use lectern_core::cache::{now_ms, CacheEntry};
use lectern_core::directory::DirectoryResult;
use lectern_storage::KeyValueStore;

use crate::client::DirectoryFetch;

/// Cache component fronting the campus directory.
pub struct DirectoryCache<F, S> {
    fetcher: F,
    store: S,
}

impl<F, S> DirectoryCache<F, S>
where
    F: DirectoryFetch,
    S: KeyValueStore,
{
    /// Create a cache over `fetcher`, persisting into `store`.
    pub fn new(fetcher: F, store: S) -> Self {
        Self { fetcher, store }
    }

    fn cache_key(id: &str) -> String {
        format!("directory:{id}")
    }

    /// Look up the directory record for `id`, consulting the cache first.
    ///
    /// An empty `id` short-circuits to the failure sentinel with no I/O.
    pub async fn get_profile(&self, id: &str) -> DirectoryResult {
        let id = id.trim();
        if id.is_empty() {
            return DirectoryResult::failure();
        }

        let key = Self::cache_key(id);

        if let Some(result) = self.lookup_fresh(&key).await {
            tracing::debug!(%id, "directory cache hit");
            return result;
        }

        tracing::debug!(%id, "directory cache miss, fetching");
        self.refresh(id, &key).await
    }

    /// Return the stored result when a fresh, well-formed entry exists.
    ///
    /// A corrupted entry is removed so this call's refresh (not just a
    /// future call) starts from a clean key.
    async fn lookup_fresh(&self, key: &str) -> Option<DirectoryResult> {
        let stored = match self.store.get(&[key]).await {
            Ok(mut map) => map.remove(key)?,
            Err(e) => {
                tracing::warn!(%key, error = %e, "directory cache read failed");
                self.remove_entry(key).await;
                return None;
            }
        };

        match serde_json::from_value::<CacheEntry<DirectoryResult>>(stored) {
            Ok(entry) if entry.is_fresh(now_ms()) => Some(entry.value),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(%key, error = %e, "corrupted directory cache entry, removing");
                self.remove_entry(key).await;
                None
            }
        }
    }

    /// Fetch from the upstream and persist the wrapped result.
    async fn refresh(&self, id: &str, key: &str) -> DirectoryResult {
        let profile = match self.fetcher.fetch_profile(id).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(%id, error = %e, "directory fetch failed");
                self.remove_entry(key).await;
                return DirectoryResult::failure();
            }
        };

        let result = DirectoryResult::ok(profile);
        let entry = CacheEntry::new(result.clone(), now_ms());

        let raw = match serde_json::to_value(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(%id, error = %e, "directory cache entry not serializable");
                self.remove_entry(key).await;
                return DirectoryResult::failure();
            }
        };

        if let Err(e) = self
            .store
            .set(HashMap::from([(key.to_string(), raw)]))
            .await
        {
            tracing::warn!(%id, error = %e, "directory cache write failed");
            self.remove_entry(key).await;
            return DirectoryResult::failure();
        }

        result
    }

    /// Best-effort key removal; failures are logged and swallowed.
    async fn remove_entry(&self, key: &str) {
        if let Err(e) = self.store.remove(key).await {
            tracing::warn!(%key, error = %e, "directory cache remove failed");
        }
    }
}

//! Time-bounded cache over the ratings search.
//!
//! The stored unit is the whole candidate list, including an explicit
//! `None`, so a "no usable answer" is itself remembered for the TTL window
//! instead of hammering the upstream on every page load. The cache key
//! prefers the caller's stable identifier over the display name, which
//! decouples keying from name-formatting noise. `get_candidates` never
//! fails outward.

use std::collections::HashMap;

use lectern_core::cache::{now_ms, CacheEntry};
use lectern_core::naming::normalize_cache_key;
use lectern_core::ratings::TeacherCandidate;
use lectern_storage::KeyValueStore;

use crate::client::RatingsSearch;

/// The cached unit: a candidate list, or a remembered "no usable answer".
type CandidateList = Option<Vec<TeacherCandidate>>;

/// Cache component fronting the ratings search.
pub struct RatingsCache<F, S> {
    fetcher: F,
    store: S,
}

impl<F, S> RatingsCache<F, S>
where
    F: RatingsSearch,
    S: KeyValueStore,
{
    /// Create a cache over `fetcher`, persisting into `store`.
    pub fn new(fetcher: F, store: S) -> Self {
        Self { fetcher, store }
    }

    /// Key by stable id when available, else by the normalized name.
    fn cache_key(id: Option<&str>, name: &str) -> String {
        match id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => format!("ratings:{id}"),
            None => format!("ratings:{}", normalize_cache_key(name)),
        }
    }

    /// Look up the candidate list for `query_name`, consulting the cache
    /// first.
    ///
    /// An empty `query_name` short-circuits to `None` with no I/O and no
    /// cache interaction.
    pub async fn get_candidates(
        &self,
        id: Option<&str>,
        query_name: &str,
        school_id: Option<&str>,
    ) -> CandidateList {
        let name = query_name.trim();
        if name.is_empty() {
            return None;
        }

        let key = Self::cache_key(id, name);

        if let Some(candidates) = self.lookup_fresh(&key).await {
            tracing::debug!(%key, %name, "ratings cache hit");
            return candidates;
        }

        tracing::debug!(%key, %name, "ratings cache miss, searching");
        self.refresh(&key, name, school_id).await
    }

    /// Return the stored list when a fresh, well-formed entry exists.
    ///
    /// The outer `Option` is hit/miss; the inner [`CandidateList`] is the
    /// stored value, which may itself be a cached `None`.
    async fn lookup_fresh(&self, key: &str) -> Option<CandidateList> {
        let stored = match self.store.get(&[key]).await {
            Ok(mut map) => map.remove(key)?,
            Err(e) => {
                tracing::warn!(%key, error = %e, "ratings cache read failed");
                self.remove_entry(key).await;
                return None;
            }
        };

        match serde_json::from_value::<CacheEntry<CandidateList>>(stored) {
            Ok(entry) if entry.is_fresh(now_ms()) => Some(entry.value),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(%key, error = %e, "corrupted ratings cache entry, removing");
                self.remove_entry(key).await;
                None
            }
        }
    }

    /// Search the upstream and persist the result, whatever it is.
    async fn refresh(&self, key: &str, name: &str, school_id: Option<&str>) -> CandidateList {
        let candidates = match self.fetcher.search_candidates(name, school_id).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(%name, error = %e, "ratings search failed");
                self.remove_entry(key).await;
                return None;
            }
        };

        let entry = CacheEntry::new(candidates.clone(), now_ms());
        match serde_json::to_value(&entry) {
            Ok(raw) => {
                if let Err(e) = self.store.set(HashMap::from([(key.to_string(), raw)])).await {
                    tracing::warn!(%key, error = %e, "ratings cache write failed");
                    self.remove_entry(key).await;
                    return None;
                }
            }
            Err(e) => {
                tracing::error!(%key, error = %e, "ratings cache entry not serializable");
                self.remove_entry(key).await;
                return None;
            }
        }

        candidates
    }

    /// Best-effort key removal; failures are logged and swallowed.
    async fn remove_entry(&self, key: &str) {
        if let Err(e) = self.store.remove(key).await {
            tracing::warn!(%key, error = %e, "ratings cache remove failed");
        }
    }
}

//! Behavioral tests for the directory cache component: hit/miss/TTL flow,
//! failure absorption, and corruption recovery.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use lectern_core::cache::{now_ms, CacheEntry, CACHE_TTL_MS};
use lectern_core::directory::{DirectoryProfile, DirectoryResult};
use lectern_directory::{DirectoryApiError, DirectoryCache, DirectoryFetch};
use lectern_storage::{KeyValueStore, MemoryStore};

// ---------------------------------------------------------------------------
// Scripted fetcher
// ---------------------------------------------------------------------------

/// Fetcher that counts upstream calls and either succeeds with a fixed
/// profile or fails every time.
struct ScriptedFetch {
    calls: AtomicUsize,
    fail: bool,
}

impl ScriptedFetch {
    fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectoryFetch for &ScriptedFetch {
    async fn fetch_profile(&self, id: &str) -> Result<DirectoryProfile, DirectoryApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DirectoryApiError::EmptyPayload);
        }
        Ok(DirectoryProfile {
            uid: Some(id.to_string()),
            display_name: Some("Cormac Tantalo".to_string()),
            ..DirectoryProfile::default()
        })
    }
}

/// Seed the store with a directory entry written `age_ms` in the past.
async fn seed_entry(store: &MemoryStore, id: &str, age_ms: i64) {
    let result = DirectoryResult::ok(DirectoryProfile {
        uid: Some(id.to_string()),
        display_name: Some("Cached Person".to_string()),
        ..DirectoryProfile::default()
    });
    let entry = CacheEntry::new(result, now_ms() - age_ms);
    store
        .set(HashMap::from([(
            format!("directory:{id}"),
            serde_json::to_value(&entry).expect("serializable"),
        )]))
        .await
        .expect("seed succeeds");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_id_short_circuits_without_io() {
    let fetch = ScriptedFetch::succeeding();
    let store = MemoryStore::new();
    let cache = DirectoryCache::new(&fetch, store.clone());

    let result = cache.get_profile("   ").await;

    assert_eq!(result, DirectoryResult::failure());
    assert_eq!(fetch.call_count(), 0);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn miss_fetches_once_and_persists() {
    let fetch = ScriptedFetch::succeeding();
    let store = MemoryStore::new();
    let cache = DirectoryCache::new(&fetch, store.clone());

    let result = cache.get_profile("ctantalo").await;

    assert!(result.success);
    assert_eq!(
        result.data.as_ref().and_then(|p| p.uid.as_deref()),
        Some("ctantalo")
    );
    assert_eq!(fetch.call_count(), 1);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn second_call_is_served_from_cache() {
    let fetch = ScriptedFetch::succeeding();
    let store = MemoryStore::new();
    let cache = DirectoryCache::new(&fetch, store.clone());

    let first = cache.get_profile("ctantalo").await;
    let second = cache.get_profile("ctantalo").await;

    assert_eq!(first, second);
    assert_eq!(fetch.call_count(), 1, "hit must not touch the upstream");
}

#[tokio::test]
async fn fresh_entry_just_inside_ttl_is_trusted() {
    let fetch = ScriptedFetch::succeeding();
    let store = MemoryStore::new();
    seed_entry(&store, "ctantalo", CACHE_TTL_MS - 60_000).await;
    let cache = DirectoryCache::new(&fetch, store.clone());

    let result = cache.get_profile("ctantalo").await;

    assert_eq!(fetch.call_count(), 0, "fresh entry must not refetch");
    assert_eq!(
        result.data.and_then(|p| p.display_name),
        Some("Cached Person".to_string())
    );
}

#[tokio::test]
async fn expired_entry_triggers_refetch() {
    let fetch = ScriptedFetch::succeeding();
    let store = MemoryStore::new();
    seed_entry(&store, "ctantalo", CACHE_TTL_MS + 60_000).await;
    let cache = DirectoryCache::new(&fetch, store.clone());

    let result = cache.get_profile("ctantalo").await;

    assert_eq!(fetch.call_count(), 1, "expired entry must refetch");
    assert_eq!(
        result.data.and_then(|p| p.display_name),
        Some("Cormac Tantalo".to_string()),
        "refetched value replaces the stale one"
    );
}

#[tokio::test]
async fn upstream_failure_yields_sentinel_and_removes_key() {
    let fetch = ScriptedFetch::failing();
    let store = MemoryStore::new();
    // A stale entry is present; the failed refresh must clear it.
    seed_entry(&store, "ctantalo", CACHE_TTL_MS + 60_000).await;
    let cache = DirectoryCache::new(&fetch, store.clone());

    let result = cache.get_profile("ctantalo").await;

    assert_eq!(result, DirectoryResult::failure());
    assert!(store.is_empty().await, "failure path removes the cache key");
}

#[tokio::test]
async fn corrupted_entry_is_removed_and_refetched() {
    let fetch = ScriptedFetch::succeeding();
    let store = MemoryStore::new();
    store
        .set(HashMap::from([(
            "directory:ctantalo".to_string(),
            json!({"not": "a cache entry"}),
        )]))
        .await
        .expect("seed succeeds");
    let cache = DirectoryCache::new(&fetch, store.clone());

    let result = cache.get_profile("ctantalo").await;

    assert!(result.success, "corruption falls through to a clean fetch");
    assert_eq!(fetch.call_count(), 1);

    // The store now holds the refreshed, well-formed entry.
    let raw = store
        .get(&["directory:ctantalo"])
        .await
        .expect("get succeeds");
    let entry: CacheEntry<DirectoryResult> =
        serde_json::from_value(raw["directory:ctantalo"].clone()).expect("well-formed entry");
    assert!(entry.value.success);
}

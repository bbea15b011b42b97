//! Time-bounded cache envelope shared by both upstream caches.
//!
//! A [`CacheEntry`] wraps whatever a cache component stores, stamped with the
//! write time. Freshness is a pure predicate over that stamp so the TTL rule
//! lives in exactly one place.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Freshness window for cached upstream data (24 hours), shared by the
/// directory and ratings caches.
pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// One stored cache record: the value plus its write timestamp.
///
/// `stored_at_ms` is set at write time only. Entries are overwritten
/// wholesale on every refresh; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached value.
    pub value: T,
    /// Unix epoch milliseconds at which the value was written.
    pub stored_at_ms: i64,
}

impl<T> CacheEntry<T> {
    /// Wrap a value with the given write timestamp.
    pub fn new(value: T, stored_at_ms: i64) -> Self {
        Self {
            value,
            stored_at_ms,
        }
    }

    /// Whether this entry is still trusted at `now_ms`.
    ///
    /// Fresh iff `now_ms - stored_at_ms < CACHE_TTL_MS`. An entry exactly at
    /// the TTL boundary is stale.
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms - self.stored_at_ms < CACHE_TTL_MS
    }
}

/// Current Unix epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_fresh_one_ms_before_ttl() {
        let entry = CacheEntry::new("x", 0);
        assert!(entry.is_fresh(CACHE_TTL_MS - 1));
    }

    #[test]
    fn entry_stale_at_ttl() {
        let entry = CacheEntry::new("x", 0);
        assert!(!entry.is_fresh(CACHE_TTL_MS));
    }

    #[test]
    fn entry_stale_one_ms_after_ttl() {
        let entry = CacheEntry::new("x", 0);
        assert!(!entry.is_fresh(CACHE_TTL_MS + 1));
    }

    #[test]
    fn entry_fresh_immediately_after_write() {
        let now = 1_700_000_000_000;
        let entry = CacheEntry::new(42, now);
        assert!(entry.is_fresh(now));
    }

    #[test]
    fn entry_round_trips_through_json() {
        let entry = CacheEntry::new(serde_json::json!({"name": "Tantalo"}), 123);
        let raw = serde_json::to_value(&entry).expect("serializable");
        let back: CacheEntry<serde_json::Value> =
            serde_json::from_value(raw).expect("deserializable");
        assert_eq!(back.stored_at_ms, 123);
        assert_eq!(back.value["name"], "Tantalo");
    }
}

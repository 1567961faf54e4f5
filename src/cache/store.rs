//! Cache Store Module
//!
//! HashMap-backed key/value store with per-entry TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == Cache Store ==
/// Key/value storage where every entry carries an absolute expiry.
///
/// Expired entries are invisible to reads: `get` treats them as a miss and
/// drops them on the spot, and `cleanup_expired` sweeps the rest.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds for writes that do not name one
    default_ttl: u64,
    /// Time source for expiry decisions
    clock: Arc<dyn Clock>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store on the system clock.
    pub fn new(default_ttl: u64) -> Self {
        Self::with_clock(default_ttl, Arc::new(SystemClock))
    }

    /// Creates an empty store driven by `clock`.
    pub fn with_clock(default_ttl: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
            clock,
        }
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous entry and its expiry.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - TTL in seconds (uses default_ttl if None)
    pub fn set(&mut self, key: String, value: V, ttl: Option<u64>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, ttl, self.clock.now_ms());
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the value if present and unexpired.
    ///
    /// An expired entry is removed and counted as a miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clear ==
    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let removed = before - self.entries.len();
        self.stats.record_expired(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn manual_store() -> (CacheStore<String>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_000_000));
        let store = CacheStore::with_clock(300, clock.clone());
        (store, clock)
    }

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new(300);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.default_ttl(), 300);
    }

    #[test]
    fn test_store_set_and_get() {
        let (mut store, _) = manual_store();

        store.set("key1".to_string(), "value1".to_string(), None);

        assert_eq!(store.get("key1").as_deref(), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let (mut store, _) = manual_store();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite_resets_ttl() {
        let (mut store, clock) = manual_store();

        store.set("key1".to_string(), "value1".to_string(), Some(10));
        clock.advance_secs(8);
        store.set("key1".to_string(), "value2".to_string(), Some(10));
        clock.advance_secs(8);

        assert_eq!(store.get("key1").as_deref(), Some("value2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let (mut store, clock) = manual_store();

        store.set("key1".to_string(), "value1".to_string(), Some(1));
        assert!(store.get("key1").is_some());

        clock.advance_ms(1_000);

        assert!(store.get("key1").is_none());
        assert!(store.is_empty(), "expired entry is dropped on read");
    }

    #[test]
    fn test_store_default_ttl_applies() {
        let (mut store, clock) = manual_store();

        store.set("key1".to_string(), "value1".to_string(), None);
        clock.advance_secs(299);
        assert!(store.get("key1").is_some());

        clock.advance_secs(1);
        assert!(store.get("key1").is_none());
    }

    #[test]
    fn test_store_clear() {
        let (mut store, _) = manual_store();

        store.set("a".to_string(), "1".to_string(), None);
        store.set("b".to_string(), "2".to_string(), None);
        store.clear();

        assert!(store.is_empty());
        assert!(store.get("a").is_none());
    }

    #[test]
    fn test_store_stats() {
        let (mut store, _) = manual_store();

        store.set("key1".to_string(), "value1".to_string(), None);
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let (mut store, clock) = manual_store();

        store.set("key1".to_string(), "value1".to_string(), Some(1));
        store.set("key2".to_string(), "value2".to_string(), Some(10));

        clock.advance_secs(2);

        assert_eq!(store.cleanup_expired(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().expired, 1);
        assert!(store.get("key2").is_some());
    }
}

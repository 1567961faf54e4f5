//! Cache Entry Module
//!
//! A stored value together with its absolute expiry time.

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
///
/// Entries are replaced wholesale on every write; nothing mutates a stored value.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry inserted at `now_ms` that lives for `ttl_seconds`.
    pub fn new(value: V, ttl_seconds: u64, now_ms: u64) -> Self {
        Self {
            value,
            expires_at: now_ms.saturating_add(ttl_seconds.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is visible only while `now < expires_at`, so it is already
    /// expired at the exact expiry instant.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}

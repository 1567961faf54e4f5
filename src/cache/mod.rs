//! Cache Module
//!
//! Generic in-memory key/value store with TTL expiration and an injectable clock.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

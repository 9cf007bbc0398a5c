//! Cache Module
//!
//! Best-effort read accelerator in front of the item store: the `Cache`
//! trait with Redis and in-memory backends, and the cache-aside coordinator.

mod aside;
mod entry;
mod memory;
mod redis_cache;


use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheResult;

// Re-export public types
pub use aside::CacheAside;
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use redis_cache::RedisCache;

// == Public Constants ==
/// Key holding the snapshot of the full item list
pub const ALL_ITEMS_KEY: &str = "items:all";

/// Key holding the snapshot of a single item.
pub fn item_key(id: i64) -> String {
    format!("items:{}", id)
}

// == Cache Trait ==
/// Key-value store with expiring entries.
///
/// Values are opaque serialized snapshots. Every method may fail; callers
/// decide what a failure means.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns the live value for `key`, or `None` on a miss.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value, expiring after `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()>;

    /// Removes `key`. Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Round trip used by health checks.
    async fn ping(&self) -> CacheResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_key_format() {
        assert_eq!(item_key(12), "items:12");
        assert_ne!(item_key(0), ALL_ITEMS_KEY);
    }
}

//! In-memory cache backend
//!
//! TTL map used when Redis is not deployed (`CACHE_BACKEND=memory`) and by
//! tests. Expired entries are hidden from reads and reclaimed by the sweep
//! task in `crate::tasks`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{Cache, CacheEntry};
use crate::error::CacheResult;

// == Memory Cache ==
/// Shared TTL map; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    /// Number of stored entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), CacheEntry::new(value, ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn ping(&self) -> CacheResult<()> {
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new();
        cache.set("items:1", "one".to_string(), TTL).await.unwrap();

        assert_eq!(cache.get("items:1").await.unwrap().as_deref(), Some("one"));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let cache = MemoryCache::new();
        assert!(cache.get("items:all").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value() {
        let cache = MemoryCache::new();
        cache.set("k", "v1".to_string(), TTL).await.unwrap();
        cache.set("k", "v2".to_string(), TTL).await.unwrap();

        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_and_delete_missing() {
        let cache = MemoryCache::new();
        cache.set("k", "v".to_string(), TTL).await.unwrap();

        cache.delete("k").await.unwrap();
        cache.delete("never-set").await.unwrap();
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let cache = MemoryCache::new();
        cache
            .set("k", "v".to_string(), Duration::from_millis(20))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(cache.get("k").await.unwrap().is_none());
        // Still stored until swept
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let cache = MemoryCache::new();
        cache
            .set("short", "v".to_string(), Duration::from_millis(20))
            .await
            .unwrap();
        cache.set("long", "v".to_string(), TTL).await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(cache.cleanup_expired().await, 1);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("long").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = MemoryCache::new();
        let other = cache.clone();
        cache.set("k", "v".to_string(), TTL).await.unwrap();
        assert!(other.get("k").await.unwrap().is_some());
    }
}

//! Cache-Aside Coordinator
//!
//! Reads go to the cache first and fall back to the store on a miss or on any
//! cache failure, repopulating the cache afterwards. Writes go to the store
//! and then remove the affected cache keys. The cache never decides the
//! outcome of an operation: only the store's result is surfaced.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::error::{CacheError, CacheResult};
use crate::models::Sourced;

// == Cache Aside ==
#[derive(Clone)]
pub struct CacheAside {
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl CacheAside {
    pub fn new(cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    // == Read ==
    /// Returns the cached snapshot under `key`, or the result of `fetch`.
    ///
    /// A fetched value is written back with the configured TTL. Errors from
    /// `fetch` are returned unchanged; cache errors are only logged.
    pub async fn read<T, E, F, Fut>(&self, key: &str, fetch: F) -> Result<Sourced<T>, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.lookup(key).await {
            return Ok(Sourced::from_cache(cached));
        }

        let fresh = fetch().await?;
        self.populate(key, &fresh).await;
        Ok(Sourced::from_database(fresh))
    }

    // == Read Optional ==
    /// Like [`CacheAside::read`] for lookups that may find nothing.
    ///
    /// Absence is returned as `None` and is not cached.
    pub async fn read_optional<T, E, F, Fut>(
        &self,
        key: &str,
        fetch: F,
    ) -> Result<Option<Sourced<T>>, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
    {
        if let Some(cached) = self.lookup(key).await {
            return Ok(Some(Sourced::from_cache(cached)));
        }

        match fetch().await? {
            Some(fresh) => {
                self.populate(key, &fresh).await;
                Ok(Some(Sourced::from_database(fresh)))
            }
            None => Ok(None),
        }
    }

    // == Invalidate ==
    /// Deletes `key`. Failures are logged and swallowed; the entry then
    /// lives until its TTL runs out.
    pub async fn invalidate(&self, key: &str) {
        match self.cache.delete(key).await {
            Ok(()) => debug!(key, "cache key invalidated"),
            Err(err) => warn!(key, error = %err, "cache invalidation failed"),
        }
    }

    /// Health probe for the underlying cache.
    pub async fn probe(&self) -> CacheResult<()> {
        self.cache.ping().await
    }

    async fn lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.cache.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "cache miss");
                return None;
            }
            Err(err) => {
                warn!(key, error = %err, "cache read failed, falling back to store");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, "cache hit");
                Some(value)
            }
            Err(err) => {
                warn!(key, error = %CacheError::from(err), "discarding undecodable cache entry");
                None
            }
        }
    }

    async fn populate<T: Serialize>(&self, key: &str, value: &T) {
        let result = match serde_json::to_string(value) {
            Ok(raw) => self.cache.set(key, raw, self.ttl).await,
            Err(err) => Err(err.into()),
        };

        if let Err(err) = result {
            warn!(key, error = %err, "cache write failed");
        }
    }
}

//! Item Service
//!
//! Application layer between the HTTP handlers and the store/cache pair.
//! Reads go through the cache-aside coordinator; creates write to the store
//! and then invalidate the list snapshot.
//!
//! Single-item snapshots (`items:{id}`) are left alone on create. Items are
//! never updated or deleted, so they cannot go stale through this service;
//! an update or delete path would have to invalidate them too.

use std::sync::Arc;

use crate::cache::{item_key, CacheAside, ALL_ITEMS_KEY};
use crate::error::StoreResult;
use crate::models::{Item, NewItem, Sourced};
use crate::store::ItemStore;

/// Status reported for a dependency that answered its probe.
pub const HEALTHY: &str = "healthy";

// == Dependency Health ==
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyHealth {
    pub database: String,
    pub cache: String,
}

// == Item Service ==
#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    cache: CacheAside,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>, cache: CacheAside) -> Self {
        Self { store, cache }
    }

    /// All items, from the `items:all` snapshot when present.
    pub async fn list_items(&self) -> StoreResult<Sourced<Vec<Item>>> {
        let store = Arc::clone(&self.store);
        self.cache
            .read(ALL_ITEMS_KEY, || async move { store.list().await })
            .await
    }

    /// One item, from its `items:{id}` snapshot when present. `None` means
    /// the store has no such item.
    pub async fn get_item(&self, id: i64) -> StoreResult<Option<Sourced<Item>>> {
        let store = Arc::clone(&self.store);
        self.cache
            .read_optional(&item_key(id), || async move { store.get(id).await })
            .await
    }

    /// Inserts into the store, then drops the list snapshot so the next list
    /// read repopulates it. A failed insert leaves the cache untouched.
    pub async fn create_item(&self, item: NewItem) -> StoreResult<i64> {
        let id = self.store.insert(&item).await?;
        tracing::info!(id, name = %item.name, "item created");
        self.cache.invalidate(ALL_ITEMS_KEY).await;
        Ok(id)
    }

    /// Probes store and cache independently. Never fails; a failed probe is
    /// reported as `"unhealthy: <reason>"`.
    pub async fn health(&self) -> DependencyHealth {
        let (database, cache) = tokio::join!(self.store.ping(), self.cache.probe());

        DependencyHealth {
            database: status_of(database),
            cache: status_of(cache),
        }
    }
}

fn status_of<E: std::fmt::Display>(probe: Result<(), E>) -> String {
    match probe {
        Ok(()) => HEALTHY.to_string(),
        Err(err) => format!("unhealthy: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{Cache, MemoryCache};
    use crate::models::Source;
    use crate::store::MemoryItemStore;
    use std::time::Duration;

    fn service() -> (MemoryCache, ItemService) {
        let cache = MemoryCache::new();
        let aside = CacheAside::new(Arc::new(cache.clone()), Duration::from_secs(300));
        let service = ItemService::new(Arc::new(MemoryItemStore::new()), aside);
        (cache, service)
    }

    fn new_item(name: &str, price: f64) -> NewItem {
        NewItem {
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_invalidates_list_snapshot() {
        let (cache, service) = service();
        service.list_items().await.unwrap();
        assert!(cache.get(ALL_ITEMS_KEY).await.unwrap().is_some());

        let id = service.create_item(new_item("lamp", 12.5)).await.unwrap();
        assert!(cache.get(ALL_ITEMS_KEY).await.unwrap().is_none());

        let listed = service.list_items().await.unwrap();
        assert_eq!(listed.source, Source::Database);
        assert!(listed.data.iter().any(|item| item.id == id));
    }

    #[tokio::test]
    async fn test_get_item_round_trip() {
        let (_, service) = service();
        let id = service.create_item(new_item("desk", 99.0)).await.unwrap();

        let first = service.get_item(id).await.unwrap().unwrap();
        assert_eq!(first.source, Source::Database);
        assert_eq!(first.data, new_item("desk", 99.0).with_id(id));

        let second = service.get_item(id).await.unwrap().unwrap();
        assert_eq!(second.source, Source::Cache);
        assert_eq!(second.data, first.data);
    }

    #[tokio::test]
    async fn test_get_missing_item_is_none() {
        let (cache, service) = service();
        assert!(service.get_item(404).await.unwrap().is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_health_all_up() {
        let (_, service) = service();
        let health = service.health().await;
        assert_eq!(health.database, HEALTHY);
        assert_eq!(health.cache, HEALTHY);
    }

    #[test]
    fn test_status_of_failure() {
        let status = status_of::<String>(Err("connection refused".to_string()));
        assert_eq!(status, "unhealthy: connection refused");
    }
}

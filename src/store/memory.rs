//! In-process item store
//!
//! Assigns ids sequentially from 1. Used where a real MySQL is not wanted,
//! such as router and gateway tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::models::{Item, NewItem};
use crate::store::ItemStore;

#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn insert(&self, item: &NewItem) -> StoreResult<i64> {
        let mut items = self.items.write().await;
        let id = items.last().map_or(1, |last| last.id + 1);
        items.push(item.clone().with_id(id));
        Ok(id)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

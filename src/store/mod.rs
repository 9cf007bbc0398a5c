//! Store Module
//!
//! The durable, authoritative side of the service. Every item is owned here;
//! the cache only holds snapshots of what these stores return.

mod memory;
mod mysql;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Item, NewItem};

pub use memory::MemoryItemStore;
pub use mysql::MySqlItemStore;

// == Item Store Trait ==
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, ordered by id.
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// The item with `id`, or `None` if there is none.
    async fn get(&self, id: i64) -> StoreResult<Option<Item>>;

    /// Inserts `item` and returns its store-assigned id.
    async fn insert(&self, item: &NewItem) -> StoreResult<i64>;

    /// Round trip used by health checks.
    async fn ping(&self) -> StoreResult<()>;
}

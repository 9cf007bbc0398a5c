//! Item records
//!
//! The store owns items; the cache only ever holds serialized snapshots of them.

use serde::{Deserialize, Serialize};

// == Item ==
/// A persisted item. `id` is assigned by the store on insert and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

// == New Item ==
/// A validated item that has not been inserted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl NewItem {
    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

// == Source ==
/// Where a read was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Cache,
    Database,
}

// == Sourced ==
/// A read result tagged with the layer that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Sourced<T> {
    pub fn from_cache(data: T) -> Self {
        Self {
            data,
            source: Source::Cache,
        }
    }

    pub fn from_database(data: T) -> Self {
        Self {
            data,
            source: Source::Database,
        }
    }
}

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use backend_api::api::create_router;
use backend_api::cache::{Cache, MemoryCache};
use backend_api::error::{CacheError, CacheResult, StoreError, StoreResult};
use backend_api::models::{Item, NewItem};
use backend_api::store::{ItemStore, MemoryItemStore};
use backend_api::AppState;
use serde_json::Value;

pub const TTL: Duration = Duration::from_secs(300);

/// Cache whose every operation fails, like an unreachable Redis.
pub struct DownCache;

#[async_trait]
impl Cache for DownCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Unavailable("connection refused".into()))
    }
    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> CacheResult<()> {
        Err(CacheError::Unavailable("connection refused".into()))
    }
    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(CacheError::Unavailable("connection refused".into()))
    }
    async fn ping(&self) -> CacheResult<()> {
        Err(CacheError::Unavailable("connection refused".into()))
    }
}

/// Store whose every operation fails, like an unreachable MySQL.
pub struct DownStore;

#[async_trait]
impl ItemStore for DownStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn get(&self, _id: i64) -> StoreResult<Option<Item>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn insert(&self, _item: &NewItem) -> StoreResult<i64> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

pub fn app_with(store: Arc<dyn ItemStore>, cache: Arc<dyn Cache>) -> Router {
    create_router(AppState::from_parts(store, cache, TTL))
}

pub fn create_test_app() -> Router {
    app_with(Arc::new(MemoryItemStore::new()), Arc::new(MemoryCache::new()))
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

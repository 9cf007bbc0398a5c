//! API Handlers
//!
//! HTTP request handlers for each items endpoint. Each one is a thin adapter
//! over [`ItemService`].

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::cache::{Cache, CacheAside};
use crate::error::{ApiError, Result};
use crate::models::{
    CreateItemRequest, CreateItemResponse, HealthResponse, ItemListResponse, ItemResponse,
};
use crate::service::ItemService;
use crate::store::ItemStore;

/// Application state shared across all handlers.
///
/// Holds only the service; the store and cache behind it do their own
/// concurrency control.
#[derive(Clone)]
pub struct AppState {
    pub service: ItemService,
}

impl AppState {
    pub fn new(service: ItemService) -> Self {
        Self { service }
    }

    /// Wires a store and cache together with the given cache TTL.
    pub fn from_parts(store: Arc<dyn ItemStore>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self::new(ItemService::new(store, CacheAside::new(cache, ttl)))
    }
}

/// Handler for GET /health
///
/// Always 200; dependency failures show up in the `database` and `cache` fields.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let health = state.service.health().await;
    Json(HealthResponse::new(health.database, health.cache))
}

/// Handler for GET /items
pub async fn list_items_handler(State(state): State<AppState>) -> Result<Json<ItemListResponse>> {
    let items = state.service.list_items().await?;
    Ok(Json(items.into()))
}

/// Handler for GET /items/:id
pub async fn get_item_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<ItemResponse>> {
    let Path(id) = id?;

    match state.service.get_item(id).await? {
        Some(item) => Ok(Json(item.into())),
        None => Err(ApiError::NotFound("Item not found".to_string())),
    }
}

/// Handler for POST /items
///
/// Validates the body, inserts the item, and invalidates the list snapshot.
pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<CreateItemResponse>> {
    let Json(req) = payload?;

    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let id = state.service.create_item(req.into_new_item()).await?;
    Ok(Json(CreateItemResponse::new(id)))
}

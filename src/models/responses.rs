//! Response DTOs for the items API and the gateway
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::models::{Item, Source, Sourced};

/// Response body for GET /items
#[derive(Debug, Clone, Serialize)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
    pub source: Source,
}

impl From<Sourced<Vec<Item>>> for ItemListResponse {
    fn from(read: Sourced<Vec<Item>>) -> Self {
        Self {
            items: read.data,
            source: read.source,
        }
    }
}

/// Response body for GET /items/:id
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub item: Item,
    pub source: Source,
}

impl From<Sourced<Item>> for ItemResponse {
    fn from(read: Sourced<Item>) -> Self {
        Self {
            item: read.data,
            source: read.source,
        }
    }
}

/// Response body for POST /items
#[derive(Debug, Clone, Serialize)]
pub struct CreateItemResponse {
    /// Store-assigned id of the new item
    pub id: i64,
    /// Success message
    pub message: String,
}

impl CreateItemResponse {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            message: "Item created successfully".to_string(),
        }
    }
}

/// Response body for the backend health endpoint (GET /health)
///
/// `database` and `cache` are either `"healthy"` or `"unhealthy: <reason>"`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub database: String,
    pub cache: String,
}

impl HealthResponse {
    pub fn new(database: String, cache: String) -> Self {
        Self {
            status: "healthy".to_string(),
            service: "backend-api".to_string(),
            database,
            cache,
        }
    }
}

/// Response body for the gateway's own health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct GatewayHealthResponse {
    pub status: String,
    pub service: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl GatewayHealthResponse {
    /// Creates a new GatewayHealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "api-gateway".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for GET /api/health on the gateway
#[derive(Debug, Clone, Serialize)]
pub struct BackendHealthResponse {
    pub gateway: String,
    /// Backend health document, or the string `"unavailable"`
    pub backend: Value,
}

impl BackendHealthResponse {
    pub fn new(backend: Option<Value>) -> Self {
        Self {
            gateway: "healthy".to_string(),
            backend: backend.unwrap_or_else(|| Value::String("unavailable".to_string())),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

//! Gateway Handlers
//!
//! Forward each `/api` request to the backend. Unreachable backends and
//! backend 5xx replies become 502; backend 4xx replies pass through.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::warn;

use crate::error::{ApiError, Result};
use crate::gateway::{BackendClient, BackendResponse};
use crate::models::{BackendHealthResponse, GatewayHealthResponse};

/// Shared state for gateway handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub backend: BackendClient,
}

impl GatewayState {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

type Forwarded = (StatusCode, Json<Value>);

fn forward(result: reqwest::Result<BackendResponse>) -> Result<Forwarded> {
    let response = result.map_err(|err| {
        warn!(error = %err, "backend request failed");
        ApiError::BackendUnavailable(err.to_string())
    })?;

    if response.status.is_server_error() {
        warn!(status = %response.status, "backend returned a server error");
        return Err(ApiError::BackendUnavailable(format!(
            "backend responded with {}",
            response.status
        )));
    }

    Ok((response.status, Json(response.body)))
}

/// Handler for GET /health
pub async fn gateway_health_handler() -> Json<GatewayHealthResponse> {
    Json(GatewayHealthResponse::healthy())
}

/// Handler for GET /api/health
///
/// Always 200; an unreachable or failing backend is reported as `"unavailable"`.
pub async fn backend_health_handler(
    State(state): State<GatewayState>,
) -> Json<BackendHealthResponse> {
    let backend = match state.backend.get("/health").await {
        Ok(response) if response.status.is_success() => Some(response.body),
        Ok(response) => {
            warn!(status = %response.status, "backend health check failed");
            None
        }
        Err(err) => {
            warn!(error = %err, "backend health check failed");
            None
        }
    };

    Json(BackendHealthResponse::new(backend))
}

/// Handler for GET /api/items
pub async fn proxy_list_items(State(state): State<GatewayState>) -> Result<Forwarded> {
    forward(state.backend.get("/items").await)
}

/// Handler for POST /api/items
pub async fn proxy_create_item(
    State(state): State<GatewayState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Forwarded> {
    let Json(body) = payload?;
    forward(state.backend.post_json("/items", &body).await)
}

/// Handler for GET /api/items/:id
pub async fn proxy_get_item(
    State(state): State<GatewayState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Forwarded> {
    let Path(id) = id?;
    let (status, body) = forward(state.backend.get(&format!("/items/{}", id)).await)?;

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound("Item not found".to_string()));
    }
    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn backend_reply(status: StatusCode, body: Value) -> reqwest::Result<BackendResponse> {
        Ok(BackendResponse { status, body })
    }

    #[test]
    fn test_forward_success_passes_through() {
        let (status, Json(body)) =
            forward(backend_reply(StatusCode::OK, json!({"items": []}))).unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"items": []}));
    }

    #[test]
    fn test_forward_client_error_passes_through() {
        let (status, _) = forward(backend_reply(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({"error": "Name cannot be empty"}),
        ))
        .unwrap();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_forward_server_error_is_bad_gateway() {
        let result = forward(backend_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "db down"}),
        ));
        assert!(matches!(result, Err(ApiError::BackendUnavailable(_))));
    }

    #[tokio::test]
    async fn test_gateway_health_handler() {
        let response = gateway_health_handler().await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "api-gateway");
    }
}

//! Gateway Routes

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    backend_health_handler, gateway_health_handler, proxy_create_item, proxy_get_item,
    proxy_list_items, GatewayState,
};

/// Creates the gateway router with CORS and request tracing.
pub fn create_gateway_router(state: GatewayState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(gateway_health_handler))
        .route("/api/health", get(backend_health_handler))
        .route("/api/items", get(proxy_list_items).post(proxy_create_item))
        .route("/api/items/:id", get(proxy_get_item))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

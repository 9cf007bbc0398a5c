//! API Gateway - proxies `/api` requests to the items backend.

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;

use backend_api::gateway::{create_gateway_router, BackendClient, GatewayState};
use backend_api::server::{init_tracing, shutdown_signal};
use backend_api::GatewayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("api_gateway=info,backend_api=info,tower_http=info");

    let config = GatewayConfig::from_env();
    let backend = BackendClient::new(&config.backend_url);
    info!("Backend URL: {}", backend.base_url());
    let app = create_gateway_router(GatewayState::new(backend));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("API Gateway running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(None))
        .await
        .context("gateway server error")?;

    Ok(())
}

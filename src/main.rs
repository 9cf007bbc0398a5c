//! Backend API - items service with cache-aside reads
//!
//! Serves `/health` and `/items` over MySQL with a Redis (or in-memory)
//! read cache.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use backend_api::api::create_router;
use backend_api::cache::{Cache, MemoryCache, RedisCache};
use backend_api::server::{init_tracing, shutdown_signal};
use backend_api::store::MySqlItemStore;
use backend_api::{spawn_cleanup_task, AppState, CacheBackend, Config};

/// Main entry point for the items backend.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the lazily connecting store and the configured cache backend
/// 4. Start the TTL sweep task when the memory cache is used
/// 5. Serve HTTP until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("backend_api=info,tower_http=info");

    info!("Starting backend API");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, mysql={}:{}/{}, cache={:?}, cache_ttl={}s",
        config.server_port,
        config.mysql_host,
        config.mysql_port,
        config.mysql_database,
        config.cache_backend,
        config.cache_ttl
    );

    let store = Arc::new(MySqlItemStore::connect_lazy(&config));

    let (cache, cleanup_handle) = match config.cache_backend {
        CacheBackend::Redis => {
            let cache = RedisCache::from_config(&config).context("invalid Redis settings")?;
            info!(
                "Using Redis cache at {}:{}",
                config.redis_host, config.redis_port
            );
            (Arc::new(cache) as Arc<dyn Cache>, None)
        }
        CacheBackend::Memory => {
            let cache = MemoryCache::new();
            let handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval);
            info!("Using in-memory cache");
            (Arc::new(cache) as Arc<dyn Cache>, Some(handle))
        }
    };

    let state = AppState::from_parts(store, cache, config.cache_ttl());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

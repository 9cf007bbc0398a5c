//! Backend API - items service with cache-aside reads
//!
//! Serves an `items` resource from MySQL with Redis as a best-effort read
//! cache, plus a thin gateway that proxies `/api` requests to it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod server;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::{CacheBackend, Config, GatewayConfig};
pub use service::ItemService;
pub use tasks::spawn_cleanup_task;

//! Configuration Module
//!
//! Loads server configuration from environment variables once at startup.
//! The resulting structs are passed to the components that need them.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Reads `name` and parses it, falling back to `default` when unset or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// == Cache Backend ==
/// Which cache implementation the service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" => Ok(CacheBackend::Memory),
            other => Err(format!("unknown cache backend '{}'", other)),
        }
    }
}

/// Backend service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    pub mysql_host: String,
    pub mysql_port: u16,
    pub mysql_user: String,
    pub mysql_password: String,
    pub mysql_database: String,
    /// Seconds to wait for a store connection before failing the operation
    pub mysql_acquire_timeout_secs: u64,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: Option<String>,
    /// TTL in seconds for every cache entry
    pub cache_ttl: u64,
    pub cache_backend: CacheBackend,
    /// Sweep interval in seconds for the memory cache backend
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 6000)
    /// - `MYSQL_HOST`, `MYSQL_PORT` - Store address (default: localhost:3306)
    /// - `MYSQL_USER`, `MYSQL_PASSWORD` - Store credentials (default: app_user / app_password)
    /// - `MYSQL_DATABASE` - Store schema (default: app_db)
    /// - `MYSQL_ACQUIRE_TIMEOUT` - Connection acquire timeout in seconds (default: 5)
    /// - `REDIS_HOST`, `REDIS_PORT` - Cache address (default: localhost:6379)
    /// - `REDIS_PASSWORD` - Optional cache password (empty means none)
    /// - `CACHE_TTL` - Cache entry TTL in seconds (default: 300)
    /// - `CACHE_BACKEND` - `redis` or `memory` (default: redis)
    /// - `CLEANUP_INTERVAL` - Memory cache sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            mysql_host: env_or("MYSQL_HOST", defaults.mysql_host),
            mysql_port: env_or("MYSQL_PORT", defaults.mysql_port),
            mysql_user: env_or("MYSQL_USER", defaults.mysql_user),
            mysql_password: env_or("MYSQL_PASSWORD", defaults.mysql_password),
            mysql_database: env_or("MYSQL_DATABASE", defaults.mysql_database),
            mysql_acquire_timeout_secs: env_or(
                "MYSQL_ACQUIRE_TIMEOUT",
                defaults.mysql_acquire_timeout_secs,
            ),
            redis_host: env_or("REDIS_HOST", defaults.redis_host),
            redis_port: env_or("REDIS_PORT", defaults.redis_port),
            redis_password: env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty()),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            cache_backend: env_or("CACHE_BACKEND", defaults.cache_backend),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn mysql_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.mysql_acquire_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 6000,
            mysql_host: "localhost".to_string(),
            mysql_port: 3306,
            mysql_user: "app_user".to_string(),
            mysql_password: "app_password".to_string(),
            mysql_database: "app_db".to_string(),
            mysql_acquire_timeout_secs: 5,
            redis_host: "localhost".to_string(),
            redis_port: 6379,
            redis_password: None,
            cache_ttl: 300,
            cache_backend: CacheBackend::Redis,
            cleanup_interval: 1,
        }
    }
}

/// Gateway configuration parameters.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP server port
    pub port: u16,
    /// Base URL of the backend service, without a trailing slash
    pub backend_url: String,
}

impl GatewayConfig {
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 5000)
    /// - `BACKEND_URL` - Backend base URL (default: http://localhost:6000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_or("PORT", defaults.port),
            backend_url: env::var("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            backend_url: "http://localhost:6000".to_string(),
        }
    }
}

//! Redis cache backend
//!
//! Opens a multiplexed connection per operation and drops it when the
//! operation ends; there is no pooling contract.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{Client, IntoConnectionInfo};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::CacheResult;

// == Redis Cache ==
#[derive(Debug, Clone)]
pub struct RedisCache {
    client: Client,
}

impl RedisCache {
    /// Builds a client for `host:port`. No connection is made until first use.
    pub fn new(host: &str, port: u16, password: Option<String>) -> CacheResult<Self> {
        let mut info = (host, port).into_connection_info()?;
        info.redis.password = password;
        let client = Client::open(info)?;
        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> CacheResult<Self> {
        Self::new(
            &config.redis_host,
            config.redis_port,
            config.redis_password.clone(),
        )
    }

    async fn connection(&self) -> CacheResult<MultiplexedConnection> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value = redis::cmd("GET")
            .arg(key)
            .query_async::<_, Option<String>>(&mut conn)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        // EX rejects zero, so round sub-second TTLs up to one second.
        let seconds = ttl.as_secs().max(1);
        let mut conn = self.connection().await?;
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(seconds)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        redis::cmd("DEL")
            .arg(key)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await?;
        Ok(())
    }
}

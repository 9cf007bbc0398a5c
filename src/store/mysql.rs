//! MySQL item store
//!
//! Expects a table `items (id, name, description, price)` with an
//! auto-increment id. The pool connects lazily so the service can start, and
//! report itself unhealthy, while MySQL is down. Each call acquires a
//! connection for the duration of one statement.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::models::{Item, NewItem};
use crate::store::ItemStore;

// Columns are cast so unsigned ids and DECIMAL prices decode as i64 / f64.
const SELECT_ITEMS: &str = "SELECT CAST(id AS SIGNED) AS id, name, description, \
                            CAST(price AS DOUBLE) AS price FROM items";

#[derive(Debug, Clone)]
pub struct MySqlItemStore {
    pool: MySqlPool,
}

impl MySqlItemStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Builds a lazily connecting pool from the `MYSQL_*` settings.
    pub fn connect_lazy(config: &Config) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.mysql_host)
            .port(config.mysql_port)
            .username(&config.mysql_user)
            .password(&config.mysql_password)
            .database(&config.mysql_database);

        let pool = MySqlPoolOptions::new()
            .acquire_timeout(config.mysql_acquire_timeout())
            .connect_lazy_with(options);

        Self::new(pool)
    }
}

#[async_trait]
impl ItemStore for MySqlItemStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let query = format!("{SELECT_ITEMS} ORDER BY id");
        let items = sqlx::query_as::<_, Item>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Item>> {
        let query = format!("{SELECT_ITEMS} WHERE id = ?");
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn insert(&self, item: &NewItem) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO items (name, description, price) VALUES (?, ?, ?)")
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .execute(&self.pool)
            .await?;

        i64::try_from(result.last_insert_id()).map_err(|_| {
            StoreError::InvalidData(format!(
                "insert id {} does not fit in a signed 64-bit integer",
                result.last_insert_id()
            ))
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> Config {
        Config {
            mysql_host: "127.0.0.1".to_string(),
            mysql_port: 1,
            mysql_acquire_timeout_secs: 1,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_connect_lazy_does_not_touch_the_server() {
        let store = MySqlItemStore::connect_lazy(&unreachable_config());
        assert_eq!(store.pool.size(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_store_error() {
        let store = MySqlItemStore::connect_lazy(&unreachable_config());

        assert!(matches!(store.ping().await, Err(StoreError::Database(_))));
        assert!(matches!(store.list().await, Err(StoreError::Database(_))));
    }
}

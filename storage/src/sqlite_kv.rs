//! SQLite-backed key-value store.
//!
//! One `kv` table (`key TEXT PRIMARY KEY, value TEXT`); records cross this
//! crate as opaque JSON. The table is created on construction if missing.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::{debug, info};

use crate::error::StorageError;
use crate::kv::KvStore;

#[derive(Clone)]
pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    /// Opens (creating if missing) the database at `database_url`
    /// (e.g. `sqlite:./intake.db` or `sqlite::memory:`) and ensures the
    /// `kv` table exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        info!("Initializing SQLite kv store: {}", database_url);

        let options = database_url
            .parse::<SqliteConnectOptions>()?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl KvStore for SqliteKvStore {
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO kv (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value.to_string())
        .execute(&self.pool)
        .await?;

        debug!("Stored value at key={}", key);
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StorageError> {
        let pattern = format!("{}%", prefix);
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM kv WHERE key LIKE ? ORDER BY key")
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?;

        let mut values = Vec::with_capacity(rows.len());
        for (key, raw) in rows {
            let value =
                serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                    key,
                    reason: e.to_string(),
                })?;
            values.push(value);
        }

        debug!("Prefix scan {} returned {} values", prefix, values.len());
        Ok(values)
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

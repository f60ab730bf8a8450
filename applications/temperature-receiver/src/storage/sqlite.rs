use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use super::ReadingStore;
use crate::error::Result;
use crate::models::Reading;

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database file behind `url`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database {}", url);
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // An in-memory database exists once per connection, so the pool
        // must keep exactly one alive for the lifetime of the process.
        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        };

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ReadingStore for SqliteStore {
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS measurements (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                temperature REAL NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn append(&self, temperature: f64, timestamp: DateTime<Utc>) -> Result<i64> {
        let result = sqlx::query("INSERT INTO measurements (temperature, timestamp) VALUES (?, ?)")
            .bind(temperature)
            .bind(timestamp)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_all(&self) -> Result<Vec<Reading>> {
        let readings = sqlx::query_as::<_, Reading>(
            "SELECT id, temperature, timestamp FROM measurements ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }
}

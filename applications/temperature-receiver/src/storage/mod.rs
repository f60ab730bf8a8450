//! Persistence for readings.
//!
//! Every backend exposes the same append-only contract: readings go in
//! through [`ReadingStore::append`] and come back out through
//! [`ReadingStore::list_all`], newest first. Nothing updates or deletes.

pub mod memory;
pub mod postgres;
pub mod sqlite;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::{Backend, StorageConfig};
use crate::error::Result;
use crate::models::Reading;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;

#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Create the backing table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<()>;

    /// Store one reading and return the id the backend assigned to it.
    async fn append(&self, temperature: f64, timestamp: DateTime<Utc>) -> Result<i64>;

    /// Every stored reading, ordered by id descending.
    async fn list_all(&self) -> Result<Vec<Reading>>;
}

pub type SharedStore = Arc<dyn ReadingStore>;

/// Open the store selected by `config` and make sure its schema exists.
pub async fn connect(config: &StorageConfig) -> Result<SharedStore> {
    let store: SharedStore = match (config.backend()?, config.url.as_deref()) {
        (Backend::Postgres, Some(url)) => {
            Arc::new(PostgresStore::connect(url, config.max_connections).await?)
        }
        (Backend::Sqlite, Some(url)) => {
            Arc::new(SqliteStore::connect(url, config.max_connections).await?)
        }
        _ => Arc::new(MemoryStore::new()),
    };

    store.ensure_schema().await?;
    Ok(store)
}

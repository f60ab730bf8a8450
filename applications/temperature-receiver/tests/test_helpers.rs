#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use temperature_receiver::api::create_router;
use temperature_receiver::models::Reading;
use temperature_receiver::storage::{MemoryStore, ReadingStore, SharedStore};
use temperature_receiver::{AppError, ReadingService, Result};

/// Test server over a fresh in-memory store. The store is returned so
/// tests can inspect what was persisted.
pub fn memory_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = server_for(store.clone());
    (server, store)
}

pub fn server_for(store: SharedStore) -> TestServer {
    let app = create_router(ReadingService::new(store));
    TestServer::new(app).unwrap()
}

/// Store whose backend is always unreachable.
pub struct FailingStore;

#[async_trait]
impl ReadingStore for FailingStore {
    async fn ensure_schema(&self) -> Result<()> {
        Err(AppError::Storage(sqlx::Error::PoolClosed))
    }

    async fn append(&self, _temperature: f64, _timestamp: DateTime<Utc>) -> Result<i64> {
        Err(AppError::Storage(sqlx::Error::PoolClosed))
    }

    async fn list_all(&self) -> Result<Vec<Reading>> {
        Err(AppError::Storage(sqlx::Error::PoolClosed))
    }
}

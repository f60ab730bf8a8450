use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::ReadingStore;
use crate::error::Result;
use crate::models::Reading;

/// Process-local store. Contents live until the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    readings: RwLock<Vec<Reading>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadingStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn append(&self, temperature: f64, timestamp: DateTime<Utc>) -> Result<i64> {
        let mut readings = self.readings.write().await;
        // 1-based position, matching what a SQL sequence would hand out
        let id = readings.len() as i64 + 1;
        readings.push(Reading {
            id,
            temperature,
            timestamp,
        });
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Reading>> {
        let readings = self.readings.read().await;
        Ok(readings.iter().rev().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_append_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let now = Utc::now();

        let first = store.append(21.5, now).await.unwrap();
        let second = store.append(22.0, now).await.unwrap();
        let third = store.append(19.8, now).await.unwrap();

        assert_eq!((first, second, third), (1, 2, 3));
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let store = MemoryStore::new();
        let start = Utc::now();

        for (i, t) in [21.5, 22.0, 19.8].into_iter().enumerate() {
            store
                .append(t, start + Duration::seconds(i as i64))
                .await
                .unwrap();
        }

        let readings = store.list_all().await.unwrap();
        let ids: Vec<i64> = readings.iter().map(|r| r.id).collect();
        let temps: Vec<f64> = readings.iter().map(|r| r.temperature).collect();

        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(temps, vec![19.8, 22.0, 21.5]);
        assert_eq!(readings[0].timestamp, start + Duration::seconds(2));
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = MemoryStore::new();
        store.ensure_schema().await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_get_unique_ids() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(i as f64, Utc::now()).await.unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
    }
}

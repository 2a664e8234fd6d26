//! In-process [`Store`] backed by a map of collections.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use showtracker_core::types::{DbId, Record};
use tokio::sync::RwLock;

use crate::store::{Store, StoreError};

/// Attribute carrying the store-assigned id.
const ID: &str = "id";

#[derive(Debug)]
struct Collection {
    next_id: DbId,
    records: Vec<Record>,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

impl Collection {
    fn position(&self, id: DbId) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.get(ID).and_then(Value::as_i64) == Some(id))
    }
}

/// Volatile store: contents live as long as the process.
///
/// Writers take an exclusive lock, so concurrent updates to the same record
/// resolve as last-write-wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|c| c.records.clone())
            .unwrap_or_default())
    }

    async fn get_by_id(&self, collection: &str, id: DbId) -> Result<Option<Record>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|c| c.position(id).map(|i| c.records[i].clone())))
    }

    async fn create(&self, collection: &str, mut fields: Record) -> Result<Record, StoreError> {
        let mut collections = self.collections.write().await;
        let target = collections.entry(collection.to_string()).or_default();

        let id = target.next_id;
        target.next_id += 1;
        fields.insert(ID.to_string(), Value::from(id));
        target.records.push(fields.clone());

        tracing::debug!(collection, id, "Record created");
        Ok(fields)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: DbId,
        patch: Record,
    ) -> Result<Option<Record>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(target) = collections.get_mut(collection) else {
            return Ok(None);
        };
        let Some(index) = target.position(id) else {
            return Ok(None);
        };

        let record = &mut target.records[index];
        for (key, value) in patch {
            if key != ID {
                record.insert(key, value);
            }
        }

        tracing::debug!(collection, id, "Record updated");
        Ok(Some(record.clone()))
    }

    async fn delete_by_id(&self, collection: &str, id: DbId) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(target) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let Some(index) = target.position(id) else {
            return Ok(false);
        };

        // `remove` rather than `swap_remove`: listing order is insertion order.
        target.records.remove(index);
        tracing::debug!(collection, id, "Record deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.get_all("shows").await.unwrap().is_empty());
        assert!(store.get_by_id("shows", 1).await.unwrap().is_none());
        assert!(store.update_by_id("shows", 1, Record::new()).await.unwrap().is_none());
        assert!(!store.delete_by_id("shows", 1).await.unwrap());
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.create("shows", record(json!({"name": "a"}))).await.unwrap();
        let second = store.create("shows", record(json!({"name": "b"}))).await.unwrap();

        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
        assert_eq!(store.get_by_id("shows", 2).await.unwrap().unwrap()["name"], "b");
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let store = MemoryStore::new();
        store.create("shows", record(json!({"name": "a"}))).await.unwrap();
        let other = store.create("movies", record(json!({"name": "m"}))).await.unwrap();

        assert_eq!(other["id"], 1);
        assert_eq!(store.get_all("shows").await.unwrap().len(), 1);
        assert_eq!(store.get_all("movies").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = MemoryStore::new();
        store.create("shows", record(json!({"name": "a"}))).await.unwrap();
        store.create("shows", record(json!({"name": "b"}))).await.unwrap();
        assert!(store.delete_by_id("shows", 2).await.unwrap());

        let next = store.create("shows", record(json!({"name": "c"}))).await.unwrap();
        assert_eq!(next["id"], 3);
        assert!(store.get_by_id("shows", 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_preserves_order_of_remaining_records() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            store.create("shows", record(json!({"name": name}))).await.unwrap();
        }
        store.delete_by_id("shows", 1).await.unwrap();

        let names: Vec<_> = store
            .get_all("shows")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("b"), json!("c")]);
    }

    #[tokio::test]
    async fn update_merges_and_keeps_id() {
        let store = MemoryStore::new();
        store
            .create("shows", record(json!({"name": "a", "episodes_seen": 1})))
            .await
            .unwrap();

        let updated = store
            .update_by_id("shows", 1, record(json!({"episodes_seen": 4, "id": 99})))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated["id"], 1);
        assert_eq!(updated["name"], "a");
        assert_eq!(updated["episodes_seen"], 4);
        assert!(store.get_by_id("shows", 99).await.unwrap().is_none());
    }
}

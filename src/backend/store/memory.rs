//! In-memory document store.
//!
//! Keeps each collection as an insertion-ordered list of BSON documents.
//! Used by the test suites in place of MongoDB; failure and latency can be
//! injected to exercise the error paths.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use tokio::sync::RwLock;

use super::{DocumentStore, StoreError, StoreResult};

/// Document store that keeps everything in memory.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    fail_on_read: RwLock<bool>,
    fail_on_write: RwLock<bool>,
    delay: RwLock<Option<Duration>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read fail with `StoreError::Unavailable`.
    pub async fn set_fail_on_read(&self, fail: bool) {
        *self.fail_on_read.write().await = fail;
    }

    /// Make every write fail with `StoreError::Unavailable`.
    pub async fn set_fail_on_write(&self, fail: bool) {
        *self.fail_on_write.write().await = fail;
    }

    /// Sleep for `delay` before every operation.
    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    /// Number of documents in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    async fn before_read(&self) -> StoreResult<()> {
        self.wait().await;
        if *self.fail_on_read.read().await {
            return Err(StoreError::Unavailable("read failure injected".to_string()));
        }
        Ok(())
    }

    async fn before_write(&self) -> StoreResult<()> {
        self.wait().await;
        if *self.fail_on_write.read().await {
            return Err(StoreError::Unavailable("write failure injected".to_string()));
        }
        Ok(())
    }

    async fn wait(&self) {
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.before_read().await?;
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        self.before_read().await?;
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| matches_filter(d, &filter)))
            .cloned())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> StoreResult<ObjectId> {
        self.before_write().await?;

        let id = match document.get("_id") {
            Some(Bson::ObjectId(id)) => *id,
            Some(_) => {
                return Err(StoreError::Rejected("_id must be an ObjectId".to_string()));
            }
            None => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn push_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        value: Bson,
    ) -> StoreResult<u64> {
        self.before_write().await?;

        let mut collections = self.collections.write().await;
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|d| d.get("_id") == Some(&Bson::ObjectId(id))))
        else {
            return Ok(0);
        };

        match document.get_mut(field) {
            Some(Bson::Array(values)) => values.push(value),
            Some(other) => {
                return Err(StoreError::Rejected(format!(
                    "field '{}' is a {:?}, not an array",
                    field,
                    other.element_type()
                )));
            }
            None => {
                document.insert(field, Bson::Array(vec![value]));
            }
        }

        Ok(1)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.before_read().await
    }
}

//! Document Store Module
//!
//! This module provides access to the document database that holds every
//! record collection.
//!
//! # Architecture
//!
//! - **`DocumentStore`** - untyped collection operations (find-all,
//!   find-one, insert-one, array push, ping) over BSON documents
//! - **`mongo`** - MongoDB implementation used by the server
//! - **`memory`** - in-process implementation for tests and local runs
//! - **`repository`** - typed access over any `DocumentStore`, bounding each
//!   call with the configured timeout
//!
//! Handlers only ever talk to the [`Repository`]; the concrete store is
//! chosen once at startup and injected through `AppState`.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};

/// MongoDB-backed store
pub mod mongo;

/// In-memory store
pub mod memory;

/// Typed record access
pub mod repository;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use repository::Repository;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Failed to encode {entity}: {message}")]
    Encode { entity: &'static str, message: String },

    #[error("Failed to decode {entity}: {message}")]
    Decode { entity: &'static str, message: String },

    #[error("Document in '{collection}' has no ObjectId _id")]
    MissingId { collection: String },

    #[error("Update rejected: {0}")]
    Rejected(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Collection-level operations on the document store.
///
/// Implementations:
/// - `MongoStore`: MongoDB
/// - `MemoryStore`: in-process maps
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document in `collection`, in natural order.
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// The first document whose fields equal every entry of `filter`.
    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>>;

    /// Insert `document`, returning the `_id` the store assigned.
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// Append `value` to the array `field` of the document with `_id == id`.
    ///
    /// Returns the number of matched documents (0 or 1).
    async fn push_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        value: Bson,
    ) -> StoreResult<u64>;

    /// Round-trip to the store.
    async fn ping(&self) -> StoreResult<()>;
}

/// Run a store operation, abandoning it once `limit` has elapsed.
///
/// The operation future is dropped on every exit path, so nothing outlives
/// the call.
pub async fn with_timeout<T, F>(limit: Duration, operation: F) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}

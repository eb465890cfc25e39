/**
 * Typed Repository
 *
 * Maps [`Record`] types onto collections of a [`DocumentStore`]. Every call
 * is bounded by the repository's timeout, so a slow or unreachable store
 * surfaces as `StoreError::Timeout` instead of a hung request.
 *
 * The record's entity-specific id field (`property_id`, `listing_id`, ...)
 * is exchanged with the store's `_id` here: stripped before insert, filled
 * in from `_id` after read. Timestamp fields are stored as BSON dates and
 * handed to serde as RFC 3339 strings.
 */
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{self, doc, Bson, Document};

use super::{with_timeout, DocumentStore, StoreError, StoreResult};
use crate::shared::records::{Record, RecordId};

/// Typed access to the document store
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
    timeout: Duration,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Every record of type `T`, in natural order.
    ///
    /// Fails on the first document that does not decode.
    pub async fn fetch_all<T: Record>(&self) -> StoreResult<Vec<T>> {
        let documents = with_timeout(self.timeout, self.store.find_all(T::COLLECTION)).await?;
        documents.into_iter().map(decode::<T>).collect()
    }

    /// Whether a record with id `id` is stored.
    pub async fn exists_by_id<T: Record>(&self, id: RecordId) -> StoreResult<bool> {
        let filter = doc! { "_id": id.object_id() };
        let found = with_timeout(self.timeout, self.store.find_one(T::COLLECTION, filter)).await?;
        Ok(found.is_some())
    }

    /// Whether any record of type `T` has `field` exactly equal to `value`.
    pub async fn exists_where<T: Record>(&self, field: &str, value: impl Into<Bson>) -> StoreResult<bool> {
        let mut filter = Document::new();
        filter.insert(field, value.into());
        let found = with_timeout(self.timeout, self.store.find_one(T::COLLECTION, filter)).await?;
        Ok(found.is_some())
    }

    /// Store `record` and return the id the store assigned.
    ///
    /// Any id already set on `record` is ignored.
    pub async fn insert<T: Record>(&self, record: &T) -> StoreResult<RecordId> {
        let document = encode(record)?;
        let id = with_timeout(self.timeout, self.store.insert_one(T::COLLECTION, document)).await?;
        Ok(RecordId::from(id))
    }

    /// Append `value` to the array `field` of record `id`.
    ///
    /// Returns `false` when no record has that id.
    pub async fn push_to_list<T: Record>(
        &self,
        id: RecordId,
        field: &str,
        value: impl Into<Bson>,
    ) -> StoreResult<bool> {
        let matched = with_timeout(
            self.timeout,
            self.store.push_by_id(T::COLLECTION, id.object_id(), field, value.into()),
        )
        .await?;
        Ok(matched > 0)
    }

    /// Round-trip to the store.
    pub async fn ping(&self) -> StoreResult<()> {
        with_timeout(self.timeout, self.store.ping()).await
    }
}

fn encode<T: Record>(record: &T) -> StoreResult<Document> {
    let mut document = bson::to_document(record).map_err(|e| StoreError::Encode {
        entity: T::ENTITY,
        message: e.to_string(),
    })?;
    document.remove(T::ID_FIELD);

    for &field in T::DATE_FIELDS {
        let Some(Bson::String(text)) = document.get(field) else {
            continue;
        };
        let parsed = DateTime::parse_from_rfc3339(text).map_err(|e| StoreError::Encode {
            entity: T::ENTITY,
            message: format!("{}: {}", field, e),
        })?;
        let millis = parsed.timestamp_millis();
        document.insert(field, Bson::DateTime(bson::DateTime::from_millis(millis)));
    }
    Ok(document)
}

fn decode<T: Record>(mut document: Document) -> StoreResult<T> {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(id)) => id,
        _ => {
            return Err(StoreError::MissingId {
                collection: T::COLLECTION.to_string(),
            })
        }
    };
    document.insert(T::ID_FIELD, id.to_hex());

    for &field in T::DATE_FIELDS {
        let Some(Bson::DateTime(stored)) = document.get(field) else {
            continue;
        };
        let millis = stored.timestamp_millis();
        let instant = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| StoreError::Decode {
            entity: T::ENTITY,
            message: format!("{}: date out of range", field),
        })?;
        document.insert(field, instant.to_rfc3339_opts(SecondsFormat::AutoSi, true));
    }

    bson::from_document(document).map_err(|e| StoreError::Decode {
        entity: T::ENTITY,
        message: e.to_string(),
    })
}

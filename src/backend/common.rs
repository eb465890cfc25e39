/**
 * Common Handler Steps
 *
 * The list and create handlers of every resource share the same shape:
 *
 * - **list**: fetch the whole collection, render it as a JSON array
 * - **create**: decode the body, validate, stamp server-owned fields,
 *   insert, answer `{"<entity>_id": "<hex id>"}`
 *
 * The per-resource handler modules call into these helpers and add their
 * own checks (referential validation, password redaction) around them.
 */
use axum::extract::rejection::JsonRejection;
use axum::Json;
use chrono::Utc;
use serde_json::{Map, Value};

use crate::backend::error::BackendError;
use crate::backend::store::{Repository, StoreError};
use crate::shared::error::SharedError;
use crate::shared::records::{Record, RecordId};

/// Unwrap a JSON body, mapping any rejection to 400
pub fn read_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, BackendError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!("Request body rejected: {}", rejection.body_text());
            Err(SharedError::serialization(rejection.body_text()).into())
        }
    }
}

/// Every stored record of type `T`
///
/// `plural` names the collection in client-facing error messages.
pub async fn list_all<T: Record>(repository: &Repository, plural: &str) -> Result<Vec<T>, BackendError> {
    match repository.fetch_all::<T>().await {
        Ok(records) => {
            tracing::debug!("Fetched {} {}", records.len(), plural);
            Ok(records)
        }
        Err(e @ StoreError::Decode { .. }) => {
            Err(BackendError::store(format!("Failed to decode retrieved {}", plural), e))
        }
        Err(e) => Err(BackendError::store(format!("Failed to retrieve {}", plural), e)),
    }
}

/// Validate, stamp and insert `record`, returning its new id
pub async fn create_one<T: Record>(repository: &Repository, mut record: T) -> Result<RecordId, BackendError> {
    record.validate()?;
    record.stamp(Utc::now());

    let id = repository
        .insert(&record)
        .await
        .map_err(|e| BackendError::store(format!("Failed to create {}", T::ENTITY), e))?;

    tracing::info!("Created {} {}", T::ENTITY, id);
    Ok(id)
}

/// `{"<entity>_id": "<hex id>"}`
pub fn created<T: Record>(id: RecordId) -> Json<Value> {
    let mut body = Map::new();
    body.insert(T::ID_FIELD.to_string(), Value::String(id.to_hex()));
    Json(Value::Object(body))
}

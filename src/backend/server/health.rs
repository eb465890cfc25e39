//! `GET /health`: pings the document store.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::store::Repository;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

/// `{"status": "ok"}` when the store answers a ping, 503 otherwise
pub async fn health(State(repository): State<Repository>) -> Result<Json<HealthStatus>, BackendError> {
    match repository.ping().await {
        Ok(()) => Ok(Json(HealthStatus {
            status: "ok".to_string(),
        })),
        Err(e) => {
            tracing::error!("Health check failed: {:?}", e);
            Err(BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Store unavailable"))
        }
    }
}

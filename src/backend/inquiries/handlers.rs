//! Inquiry handlers: `GET /inquiries` and `POST /add/inquiry`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::backend::common::{create_one, created, list_all, read_json};
use crate::backend::error::BackendError;
use crate::backend::store::Repository;
use crate::shared::records::Inquiry;

/// List every inquiry
pub async fn list_inquiries(
    State(repository): State<Repository>,
) -> Result<Json<Vec<Inquiry>>, BackendError> {
    let inquiries = list_all::<Inquiry>(&repository, "Inquiries").await?;
    Ok(Json(inquiries))
}

/// Create an inquiry
///
/// `user_id` and `property_id` are stored as given; they are not checked
/// against the users and properties collections.
pub async fn create_inquiry(
    State(repository): State<Repository>,
    payload: Result<Json<Inquiry>, JsonRejection>,
) -> Result<Json<Value>, BackendError> {
    let inquiry = read_json(payload)?;
    let id = create_one(&repository, inquiry).await?;
    Ok(created::<Inquiry>(id))
}

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::backend::common::{create_one, created, list_all, read_json};
use crate::backend::error::BackendError;
use crate::backend::store::Repository;
use crate::shared::records::Appointment;

/// `GET /appointments`
pub async fn list_appointments(
    State(repository): State<Repository>,
) -> Result<Json<Vec<Appointment>>, BackendError> {
    let appointments = list_all::<Appointment>(&repository, "Appointments").await?;
    Ok(Json(appointments))
}

/// `POST /add/appointment`
///
/// Responds `{"appointment_id": "<hex id>"}`. A missing `Status` is stored
/// as absent rather than defaulted.
pub async fn create_appointment(
    State(repository): State<Repository>,
    payload: Result<Json<Appointment>, JsonRejection>,
) -> Result<Json<Value>, BackendError> {
    let appointment = read_json(payload)?;
    let id = create_one(&repository, appointment).await?;
    Ok(created::<Appointment>(id))
}

//! Appointment API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{appointment_json, TestApp};
use crate::{assert_error, assert_status};

#[tokio::test]
async fn test_create_and_list_appointment() {
    let app = TestApp::new();

    let response = app.server.post("/add/appointment").json(&appointment_json()).await;
    assert_status!(response, StatusCode::OK);
    let id = response.json::<Value>()["appointment_id"].as_str().unwrap().to_string();

    let appointments: Vec<Value> = app.server.get("/appointments").await.json();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["appointment_id"], json!(id));
    assert_eq!(appointments[0]["Status"], json!("scheduled"));
    assert_eq!(appointments[0]["Appointment_date"], json!("2026-11-02T10:30:00Z"));
    assert_eq!(appointments[0]["Listing_id"], json!("65f0c0ffee0000000000cccc"));
}

#[tokio::test]
async fn test_appointment_without_status() {
    let app = TestApp::new();
    let mut payload = appointment_json();
    payload.as_object_mut().unwrap().remove("Status");

    let response = app.server.post("/add/appointment").json(&payload).await;
    assert_status!(response, StatusCode::OK);

    let appointments: Vec<Value> = app.server.get("/appointments").await.json();
    assert!(appointments[0].get("Status").is_none());
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let app = TestApp::new();
    let mut payload = appointment_json();
    payload["Status"] = json!("postponed");

    let response = app.server.post("/add/appointment").json(&payload).await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Failed to parse request body");
    assert_eq!(app.store.count("appointments").await, 0);
}

#[tokio::test]
async fn test_empty_appointments() {
    let app = TestApp::new();

    let response = app.server.get("/appointments").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

//! Health and routing integration tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestApp;
use crate::{assert_error, assert_status};

#[tokio::test]
async fn test_health_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_reports_unavailable_store() {
    let app = TestApp::new();
    app.store.set_fail_on_read(true).await;

    let response = app.server.get("/health").await;

    assert_error!(response, StatusCode::SERVICE_UNAVAILABLE, "Store unavailable");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/houses").await;

    assert_status!(response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = TestApp::new();

    let response = app.server.get("/add/property").await;

    assert_status!(response, StatusCode::METHOD_NOT_ALLOWED);
}

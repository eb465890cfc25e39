//! Property API integration tests

use std::time::Duration;

use axum::http::StatusCode;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_skyview, skyview_json, TestApp};
use crate::{assert_error, assert_hex_id, assert_status};

#[tokio::test]
async fn test_create_property_returns_id() {
    let app = TestApp::new();

    let response = app.server.post("/add/property").json(&skyview_json()).await;

    assert_status!(response, StatusCode::OK);
    let body: Value = response.json();
    assert_hex_id!(body["property_id"].as_str().unwrap());
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_created_property_is_listed_with_empty_images() {
    let app = TestApp::new();
    let before = Utc::now();
    let id = create_skyview(&app).await;

    let response = app.server.get("/properties").await;
    assert_status!(response, StatusCode::OK);

    let properties: Vec<Value> = response.json();
    assert_eq!(properties.len(), 1);

    let property = &properties[0];
    assert_eq!(property["property_id"], json!(id));
    assert_eq!(property["Title"], json!("Skyview"));
    assert_eq!(property["Developer"], json!("Acme"));
    assert_eq!(property["MinPrice"], json!(100000));
    assert_eq!(property["MaxPrice"], json!(200000));
    assert_eq!(property["Images"], json!([]));

    let created_at: DateTime<Utc> = property["Created_at"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= before - chrono::Duration::seconds(1));
}

#[tokio::test]
async fn test_server_owned_fields_are_overridden() {
    let app = TestApp::new();
    let mut payload = skyview_json();
    payload["property_id"] = json!("65f0c0ffee0000000000abcd");
    payload["Images"] = json!(["https://elsewhere.example/x.png"]);
    payload["Created_at"] = json!("1999-01-01T00:00:00Z");

    let response = app.server.post("/add/property").json(&payload).await;
    assert_status!(response, StatusCode::OK);
    let id = response.json::<Value>()["property_id"].as_str().unwrap().to_string();
    assert_ne!(id, "65f0c0ffee0000000000abcd");

    let properties: Vec<Value> = app.server.get("/properties").await.json();
    assert_eq!(properties[0]["Images"], json!([]));
    assert_ne!(properties[0]["Created_at"], json!("1999-01-01T00:00:00Z"));
}

#[tokio::test]
async fn test_empty_collection_is_an_empty_array() {
    let app = TestApp::new();

    let response = app.server.get("/properties").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add/property")
        .bytes(Bytes::from_static(b"{\"Title\": "))
        .content_type("application/json")
        .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Failed to parse request body");
    assert_eq!(app.store.count("properties").await, 0);
}

#[tokio::test]
async fn test_wrong_field_type_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add/property")
        .json(&json!({ "Title": "Skyview", "MinPrice": "cheap" }))
        .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Failed to parse request body");
}

#[tokio::test]
async fn test_invalid_property_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add/property")
        .json(&json!({ "Developer": "Acme" }))
        .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid Title: must not be empty");
}

#[tokio::test]
async fn test_inverted_price_band_is_rejected() {
    let app = TestApp::new();
    let mut payload = skyview_json();
    payload["MinPrice"] = json!(300000);

    let response = app.server.post("/add/property").json(&payload).await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid MinPrice: must not exceed MaxPrice");
}

#[tokio::test]
async fn test_store_failure_on_list() {
    let app = TestApp::new();
    app.store.set_fail_on_read(true).await;

    let response = app.server.get("/properties").await;

    assert_error!(response, StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve Properties");
}

#[tokio::test]
async fn test_store_failure_on_create() {
    let app = TestApp::new();
    app.store.set_fail_on_write(true).await;

    let response = app.server.post("/add/property").json(&skyview_json()).await;

    assert_error!(response, StatusCode::INTERNAL_SERVER_ERROR, "Failed to create Property");
}

#[tokio::test]
async fn test_slow_store_times_out() {
    let app = TestApp::with_store_timeout(Duration::from_millis(50));
    app.store.set_delay(Some(Duration::from_secs(2))).await;

    let response = app.server.get("/properties").await;

    assert_error!(response, StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve Properties");
}

#[tokio::test]
async fn test_undecodable_record_fails_the_list() {
    use homelist::backend::store::DocumentStore;
    use mongodb::bson::doc;

    let app = TestApp::new();
    create_skyview(&app).await;
    app.store
        .insert_one("properties", doc! { "Title": ["not", "a", "string"] })
        .await
        .unwrap();

    let response = app.server.get("/properties").await;

    assert_error!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to decode retrieved Properties"
    );
}

#[tokio::test]
async fn test_records_with_stored_dates_are_listed() {
    use homelist::backend::store::DocumentStore;
    use mongodb::bson::{self, doc};

    let app = TestApp::new();
    app.store
        .insert_one(
            "properties",
            doc! {
                "Title": "Marina Heights",
                "Developer": "Emaar",
                "Coordinates": [25.08, 55.14],
                "MinPrice": 900_000_i64,
                "MaxPrice": 1_500_000_i64,
                "Images": ["https://img.example/marina.png"],
                "Created_at": bson::DateTime::from_millis(1_700_000_000_000),
            },
        )
        .await
        .unwrap();

    let response = app.server.get("/properties").await;

    assert_status!(response, StatusCode::OK);
    let properties: Vec<Value> = response.json();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0]["Title"], json!("Marina Heights"));
    assert_eq!(properties[0]["Created_at"], json!("2023-11-14T22:13:20Z"));
}

#[tokio::test]
async fn test_created_property_is_stored_with_a_date() {
    use homelist::backend::store::DocumentStore;
    use mongodb::bson::Bson;

    let app = TestApp::new();
    create_skyview(&app).await;

    let stored = app.store.find_all("properties").await.unwrap();
    assert!(matches!(stored[0].get("Created_at"), Some(Bson::DateTime(_))));
}

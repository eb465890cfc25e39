//! Inquiry API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{inquiry_json, TestApp};
use crate::{assert_error, assert_hex_id, assert_status};

#[tokio::test]
async fn test_create_and_list_inquiry() {
    let app = TestApp::new();

    let response = app.server.post("/add/inquiry").json(&inquiry_json()).await;
    assert_status!(response, StatusCode::OK);
    let id = response.json::<Value>()["inquiry_id"].as_str().unwrap().to_string();
    assert_hex_id!(&id);

    let inquiries: Vec<Value> = app.server.get("/inquiries").await.json();
    assert_eq!(inquiries.len(), 1);
    assert_eq!(inquiries[0]["inquiry_id"], json!(id));
    assert_eq!(inquiries[0]["message"], json!("Is parking included?"));
    assert_eq!(inquiries[0]["user_id"], json!("65f0c0ffee0000000000aaaa"));
    assert!(inquiries[0]["Created_at"].is_string());
}

#[tokio::test]
async fn test_inquiries_keep_insertion_order() {
    let app = TestApp::new();

    for message in ["first", "second", "third"] {
        let mut payload = inquiry_json();
        payload["message"] = json!(message);
        let response = app.server.post("/add/inquiry").json(&payload).await;
        assert_status!(response, StatusCode::OK);
    }

    let inquiries: Vec<Value> = app.server.get("/inquiries").await.json();
    let messages: Vec<&str> = inquiries.iter().map(|i| i["message"].as_str().unwrap()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_inquiry_requires_message() {
    let app = TestApp::new();
    let mut payload = inquiry_json();
    payload["message"] = json!("   ");

    let response = app.server.post("/add/inquiry").json(&payload).await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid message: must not be empty");
}

#[tokio::test]
async fn test_inquiry_list_failure() {
    let app = TestApp::new();
    app.store.set_fail_on_read(true).await;

    let response = app.server.get("/inquiries").await;

    assert_error!(response, StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve Inquiries");
}

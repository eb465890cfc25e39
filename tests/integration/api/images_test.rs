//! Image attachment integration tests
//!
//! `POST /properties/{id}/images` against the stub image host.

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_skyview, StubBehavior, TestApp};
use crate::{assert_error, assert_status};
use homelist::backend::properties::MAX_IMAGE_BYTES;

fn image_form(bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(bytes).file_name("front.png").mime_type("image/png"),
    )
}

fn small_png() -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.resize(2048, 0);
    bytes
}

#[tokio::test]
async fn test_upload_appends_url() {
    let app = TestApp::new();
    let id = create_skyview(&app).await;

    let response = app
        .server
        .post(&format!("/properties/{}/images", id))
        .multipart(image_form(small_png()))
        .await;

    assert_status!(response, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Image uploaded successfully"));
    assert_eq!(body["url"], json!("https://img.example/1/front.png"));

    let properties: Vec<Value> = app.server.get("/properties").await.json();
    assert_eq!(properties[0]["Images"], json!(["https://img.example/1/front.png"]));
}

#[tokio::test]
async fn test_uploads_accumulate() {
    let app = TestApp::new();
    let id = create_skyview(&app).await;
    let path = format!("/properties/{}/images", id);

    for _ in 0..3 {
        let response = app.server.post(&path).multipart(image_form(small_png())).await;
        assert_status!(response, StatusCode::OK);
    }

    let properties: Vec<Value> = app.server.get("/properties").await.json();
    assert_eq!(properties[0]["Images"].as_array().unwrap().len(), 3);
    assert_eq!(app.uploads().await, 3);
}

#[tokio::test]
async fn test_upload_forwards_file_details() {
    let app = TestApp::new();
    let id = create_skyview(&app).await;

    app.server
        .post(&format!("/properties/{}/images", id))
        .multipart(image_form(small_png()))
        .await;

    let uploads = app.image_host.as_ref().unwrap().uploads().await;
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].file_name, "front.png");
    assert_eq!(uploads[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(uploads[0].bytes.len(), 2048);
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let app = TestApp::new();
    let id = create_skyview(&app).await;

    let response = app
        .server
        .post(&format!("/properties/{}/images", id))
        .multipart(image_form(vec![0u8; 15 * 1024 * 1024]))
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(app.uploads().await, 0);

    let properties: Vec<Value> = app.server.get("/properties").await.json();
    assert_eq!(properties[0]["Images"], json!([]));
}

#[tokio::test]
async fn test_image_just_over_the_cap_is_rejected() {
    let app = TestApp::new();
    let id = create_skyview(&app).await;

    let response = app
        .server
        .post(&format!("/properties/{}/images", id))
        .multipart(image_form(vec![0u8; MAX_IMAGE_BYTES + 1]))
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(app.uploads().await, 0);
}

#[tokio::test]
async fn test_missing_image_field() {
    let app = TestApp::new();
    let id = create_skyview(&app).await;

    let form = MultipartForm::new().add_text("caption", "front door");
    let response = app
        .server
        .post(&format!("/properties/{}/images", id))
        .multipart(form)
        .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Unable to get the file from form data");
}

#[tokio::test]
async fn test_non_multipart_body() {
    let app = TestApp::new();
    let id = create_skyview(&app).await;

    let response = app
        .server
        .post(&format!("/properties/{}/images", id))
        .json(&json!({ "image": "front.png" }))
        .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Unable to parse form data");
}

#[tokio::test]
async fn test_malformed_property_id() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/properties/not-an-id/images")
        .multipart(image_form(small_png()))
        .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid property id format");
    assert_eq!(app.uploads().await, 0);
}

#[tokio::test]
async fn test_unknown_property() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/properties/65f0c0ffee0000000000abcd/images")
        .multipart(image_form(small_png()))
        .await;

    assert_error!(response, StatusCode::NOT_FOUND, "Property not found");
    assert_eq!(app.uploads().await, 0);
}

#[tokio::test]
async fn test_host_failure_message_is_passed_through() {
    let app = TestApp::with_image_host(StubBehavior::Fail("quota exceeded".to_string()));
    let id = create_skyview(&app).await;

    let response = app
        .server
        .post(&format!("/properties/{}/images", id))
        .multipart(image_form(small_png()))
        .await;

    assert_error!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to upload image: host responded 502: quota exceeded"
    );
    let properties: Vec<Value> = app.server.get("/properties").await.json();
    assert_eq!(properties[0]["Images"], json!([]));
}

#[tokio::test]
async fn test_empty_url_from_host() {
    let app = TestApp::with_image_host(StubBehavior::EmptyUrl);
    let id = create_skyview(&app).await;

    let response = app
        .server
        .post(&format!("/properties/{}/images", id))
        .multipart(image_form(small_png()))
        .await;

    assert_error!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Empty secure URL returned from image host"
    );
}

#[tokio::test]
async fn test_uploads_disabled() {
    let app = TestApp::without_image_host();
    let id = create_skyview(&app).await;

    let response = app
        .server
        .post(&format!("/properties/{}/images", id))
        .multipart(image_form(small_png()))
        .await;

    assert_error!(response, StatusCode::INTERNAL_SERVER_ERROR, "Image hosting is not configured");
}

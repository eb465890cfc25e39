//! Request payload fixtures

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::test_app::TestApp;

pub fn skyview_json() -> Value {
    json!({
        "Title": "Skyview",
        "Developer": "Acme",
        "MinPrice": 100000,
        "MaxPrice": 200000
    })
}

pub fn listing_json(property_id: &str) -> Value {
    json!({
        "property_id": property_id,
        "description": "Corner unit with sea view",
        "price": 1800.0,
        "minimum_contract": "12 months",
        "floor": 14,
        "size": 82.5,
        "bedroom": 2,
        "bathroom": 2,
        "furniture": "furnished",
        "status": "ready",
        "listing_type": "rent",
        "facing_direction": "south",
        "listing_status": "active"
    })
}

pub fn inquiry_json() -> Value {
    json!({
        "user_id": "65f0c0ffee0000000000aaaa",
        "property_id": "65f0c0ffee0000000000bbbb",
        "message": "Is parking included?"
    })
}

pub fn appointment_json() -> Value {
    json!({
        "User_id": "65f0c0ffee0000000000aaaa",
        "Property_id": "65f0c0ffee0000000000bbbb",
        "Listing_id": "65f0c0ffee0000000000cccc",
        "Appointment_date": "2026-11-02T10:30:00Z",
        "Status": "scheduled"
    })
}

pub fn user_json(email: &str) -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": email,
        "password": "correct horse battery staple",
        "phone": "+44 20 7946 0000",
        "role": "buyer"
    })
}

/// Create the Skyview property and return its id
pub async fn create_skyview(app: &TestApp) -> String {
    let response = app.server.post("/add/property").json(&skyview_json()).await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());
    let body: Value = response.json();
    body["property_id"].as_str().unwrap().to_string()
}

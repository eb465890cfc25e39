/**
 * Listing Handlers
 *
 * - `GET /listings` - list every listing
 * - `POST /add/listing` - create a listing for an existing property
 *
 * # Referential Validation
 *
 * A listing's `property_id` must name a stored property. The check runs
 * once, immediately before the insert; the store offers no transaction, so
 * a property removed in between is not detected.
 */
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::backend::common::{create_one, created, list_all, read_json};
use crate::backend::error::BackendError;
use crate::backend::store::Repository;
use crate::shared::records::{Listing, Property, RecordId};

/// List every listing
///
/// # Errors
///
/// * `500 Internal Server Error` - If the store fails or a stored listing does not decode
pub async fn list_listings(
    State(repository): State<Repository>,
) -> Result<Json<Vec<Listing>>, BackendError> {
    let listings = list_all::<Listing>(&repository, "Listings").await?;
    Ok(Json(listings))
}

/// Create a listing
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, `property_id` not 24 hex characters,
///   no property with that id, or a field fails validation
/// * `500 Internal Server Error` - If the property lookup or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /add/listing HTTP/1.1
/// Content-Type: application/json
///
/// {"property_id": "65f0c0ffee0000000000abcd", "price": 1800, "listing_type": "rent"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"listing_id": "65f0c0ffee0000000000abce"}
/// ```
pub async fn create_listing(
    State(repository): State<Repository>,
    payload: Result<Json<Listing>, JsonRejection>,
) -> Result<Json<Value>, BackendError> {
    let listing = read_json(payload)?;

    let property_id: RecordId = listing
        .property_id
        .parse()
        .map_err(|_| BackendError::bad_request("Invalid PropertyID format"))?;

    match repository.exists_by_id::<Property>(property_id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!("Listing references unknown property {}", property_id);
            return Err(BackendError::bad_request("PropertyID does not exist"));
        }
        Err(e) => return Err(BackendError::store("Failed to check PropertyID", e)),
    }

    let id = create_one(&repository, listing).await?;
    Ok(created::<Listing>(id))
}

/**
 * Property Handlers
 *
 * - `GET /properties` - list every property
 * - `POST /add/property` - create a property
 * - `POST /properties/{id}/images` - upload an image and append its URL
 *
 * # Image Attachment
 *
 * 1. Parse the path id
 * 2. Read the `image` field of the multipart body (at most 10 MiB)
 * 3. Check the property exists, so nothing is uploaded for an unknown id
 * 4. Upload to the image host
 * 5. `$push` the returned URL onto the property's `Images`
 *
 * The push is a single atomic update keyed by id, so concurrent uploads to
 * the same property never lose a URL. The relative order of concurrent
 * uploads is not defined.
 */
use std::sync::Arc;

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::backend::common::{create_one, created, list_all, read_json};
use crate::backend::error::BackendError;
use crate::backend::images::{ImageHost, ImageHostError, ImageUpload};
use crate::backend::store::Repository;
use crate::shared::records::{Property, RecordId};

/// Largest accepted image, in bytes
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

/// Response to a successful image upload
#[derive(Debug, Serialize)]
pub struct ImageAttached {
    pub message: String,
    pub url: String,
}

/// List every property
///
/// # Returns
///
/// JSON array of properties in store order; `[]` when there are none
///
/// # Errors
///
/// * `500 Internal Server Error` - If the store fails or a stored property does not decode
pub async fn list_properties(
    State(repository): State<Repository>,
) -> Result<Json<Vec<Property>>, BackendError> {
    let properties = list_all::<Property>(&repository, "Properties").await?;
    Ok(Json(properties))
}

/// Create a property
///
/// The server sets `Created_at`, empties `Images` and assigns the id; any
/// supplied values for those fields are discarded.
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not a property or fails validation
/// * `500 Internal Server Error` - If the insert fails
///
/// # Example Request
///
/// ```http
/// POST /add/property HTTP/1.1
/// Content-Type: application/json
///
/// {"Title": "Skyview", "Developer": "Acme", "MinPrice": 100000, "MaxPrice": 200000}
/// ```
///
/// # Example Response
///
/// ```json
/// {"property_id": "65f0c0ffee0000000000abcd"}
/// ```
pub async fn create_property(
    State(repository): State<Repository>,
    payload: Result<Json<Property>, JsonRejection>,
) -> Result<Json<Value>, BackendError> {
    let property = read_json(payload)?;
    let id = create_one(&repository, property).await?;
    Ok(created::<Property>(id))
}

/// Upload an image and append its hosted URL to a property
///
/// # Arguments
///
/// * `State(repository)` - Record access
/// * `State(image_host)` - Image host, `None` when uploads are not configured
/// * `Path(id)` - Property id, 24 hex characters
/// * `multipart` - Body with an `image` file field
///
/// # Errors
///
/// * `400 Bad Request` - Bad id, unreadable or oversized multipart, or no `image` field
/// * `404 Not Found` - If no property has this id
/// * `500 Internal Server Error` - If hosting is not configured, the upload fails,
///   the host returns no URL, or the update fails
///
/// # Example Response
///
/// ```json
/// {"message": "Image uploaded successfully", "url": "https://res.cloudinary.com/..."}
/// ```
pub async fn attach_image(
    State(repository): State<Repository>,
    State(image_host): State<Option<Arc<dyn ImageHost>>>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageAttached>, BackendError> {
    let property_id: RecordId = id
        .parse()
        .map_err(|_| BackendError::bad_request("Invalid property id format"))?;

    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!("Rejected multipart body: {}", rejection.body_text());
        BackendError::bad_request("Unable to parse form data")
    })?;
    let upload = read_image(&mut multipart).await?;

    match repository.exists_by_id::<Property>(property_id).await {
        Ok(true) => {}
        Ok(false) => return Err(BackendError::not_found("Property not found")),
        Err(e) => return Err(BackendError::store("Failed to check property", e)),
    }

    let image_host = image_host.ok_or(ImageHostError::NotConfigured)?;
    let hosted = image_host.upload(upload).await?;
    if hosted.secure_url.is_empty() {
        return Err(BackendError::handler(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Empty secure URL returned from image host",
        ));
    }

    let pushed = repository
        .push_to_list::<Property>(property_id, Property::IMAGES_FIELD, hosted.secure_url.clone())
        .await
        .map_err(|e| BackendError::store("Failed to update property with image URL", e))?;
    if !pushed {
        // removed between the existence check and the update
        return Err(BackendError::not_found("Property not found"));
    }

    tracing::info!("Attached image to property {}: {}", property_id, hosted.secure_url);

    Ok(Json(ImageAttached {
        message: "Image uploaded successfully".to_string(),
        url: hosted.secure_url,
    }))
}

/// Pull the `image` field out of a multipart body, enforcing the size cap
async fn read_image(multipart: &mut Multipart) -> Result<ImageUpload, BackendError> {
    loop {
        let field = multipart.next_field().await.map_err(|e| {
            tracing::warn!("Unable to parse form data: {}", e.body_text());
            BackendError::bad_request("Unable to parse form data")
        })?;
        let Some(field) = field else {
            return Err(BackendError::bad_request("Unable to get the file from form data"));
        };

        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("Unable to read image field: {}", e.body_text());
            BackendError::bad_request("Unable to parse form data")
        })?;

        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(BackendError::bad_request("Image exceeds the 10 MiB limit"));
        }
        if bytes.is_empty() {
            return Err(BackendError::bad_request("Unable to get the file from form data"));
        }

        return Ok(ImageUpload {
            file_name,
            content_type,
            bytes,
        });
    }
}

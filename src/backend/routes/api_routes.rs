/**
 * API Routes
 *
 * # Reads
 * - `GET /properties`
 * - `GET /listings`
 * - `GET /inquiries`
 * - `GET /appointments`
 * - `GET /users`
 * - `GET /check/user?email=...`
 * - `GET /health`
 *
 * # Writes
 * - `POST /add/property`
 * - `POST /add/listing`
 * - `POST /add/inquiry`
 * - `POST /add/appointment`
 * - `POST /add/user`
 * - `POST /properties/{id}/images` (multipart, 10 MiB image cap)
 */
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::backend::appointments::{create_appointment, list_appointments};
use crate::backend::inquiries::{create_inquiry, list_inquiries};
use crate::backend::listings::{create_listing, list_listings};
use crate::backend::properties::{attach_image, create_property, list_properties, MAX_IMAGE_BYTES};
use crate::backend::server::health::health;
use crate::backend::server::state::AppState;
use crate::backend::users::{check_user, create_user, list_users};

/// Room for multipart boundaries and part headers around the image
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Add every API route to `router`
///
/// The image route gets a body limit just above the image cap so that an
/// oversized upload is cut off while streaming instead of being buffered
/// in full. The cap itself is enforced on the decoded field.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/properties", get(list_properties))
        .route("/listings", get(list_listings))
        .route("/inquiries", get(list_inquiries))
        .route("/appointments", get(list_appointments))
        .route("/users", get(list_users))
        .route("/check/user", get(check_user))
        .route("/health", get(health))
        .route("/add/property", post(create_property))
        .route("/add/listing", post(create_listing))
        .route("/add/inquiry", post(create_inquiry))
        .route("/add/appointment", post(create_appointment))
        .route("/add/user", post(create_user))
        .route(
            "/properties/{id}/images",
            post(attach_image).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + MULTIPART_OVERHEAD)),
        )
}

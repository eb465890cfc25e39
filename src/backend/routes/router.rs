/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers:
 *
 * - **CORS**: any origin; `GET`, `POST`, `PUT`, `DELETE`, `OPTIONS`;
 *   `Content-Type` and `X-API-Key` request headers. The API key header is
 *   accepted for browser clients that send it but is not checked.
 * - **Tracing**: one span per request via `tower_http::trace::TraceLayer`
 */
use axum::http::{header, HeaderName, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Request header clients may send with an API key
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// CORS policy for browser clients
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, API_KEY_HEADER])
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Repository and image host shared by all handlers
///
/// # Returns
///
/// Configured Axum Router ready to serve requests. Unknown paths get the
/// default 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

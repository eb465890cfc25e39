/**
 * Error Conversion
 *
 * `IntoResponse` for [`BackendError`], so handlers can return it directly.
 *
 * # Response Format
 *
 * Error responses are plain text: the status code carries the category and
 * the body carries the client-facing message, e.g.
 *
 * ```text
 * HTTP/1.1 400 Bad Request
 * content-type: text/plain; charset=utf-8
 *
 * PropertyID does not exist
 * ```
 */
use axum::response::{IntoResponse, Response};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if self.is_infrastructure() {
            tracing::error!("{}: {:?}", message, self);
        } else {
            tracing::warn!("Rejected request ({}): {}", status.as_u16(), message);
        }

        (status, message).into_response()
    }
}

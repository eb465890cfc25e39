/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * Raised when the request itself is unusable:
 * - Malformed JSON or multipart bodies
 * - Ids that are not 24-character hex strings
 * - Records that fail field validation
 * - References to records that do not exist
 *
 * ## Infrastructure Errors
 *
 * Raised when a collaborator fails:
 * - The document store (unreachable, timed out, undecodable data)
 * - The image host (rejected or failed upload)
 *
 * Infrastructure errors carry a generic client-facing message; the cause is
 * logged, not returned. The one exception is the image host's message, which
 * is appended to upload failures.
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::images::ImageHostError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use homelist::backend::error::BackendError;
///
/// let err = BackendError::bad_request("Invalid PropertyID format");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.message(), "Invalid PropertyID format");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., unparsable body, unknown id)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Client-facing message
        message: String,
    },

    /// Record validation failure
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Document store failure
    #[error("{message}: {source}")]
    Store {
        /// Client-facing message
        message: String,
        #[source]
        source: StoreError,
    },

    /// Image host failure
    #[error(transparent)]
    ImageHost(#[from] ImageHostError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 400 with `message`
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// 404 with `message`
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Wrap a store failure behind a generic client-facing `message`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use homelist::backend::error::BackendError;
    /// use homelist::backend::store::StoreError;
    ///
    /// let err = BackendError::store("Failed to fetch properties", StoreError::Timeout(Duration::from_secs(5)));
    /// assert_eq!(err.message(), "Failed to fetch properties");
    /// ```
    pub fn store(message: impl Into<String>, source: StoreError) -> Self {
        Self::Store {
            message: message.into(),
            source,
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 Bad Request
    /// - `Store` - 500 Internal Server Error
    /// - `ImageHost` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Store { .. } | Self::ImageHost(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(SharedError::SerializationError { .. }) => {
                "Failed to parse request body".to_string()
            }
            Self::SharedError(err) => err.to_string(),
            Self::Store { message, .. } => message.clone(),
            Self::ImageHost(ImageHostError::NotConfigured) => {
                "Image hosting is not configured".to_string()
            }
            Self::ImageHost(err) => format!("Failed to upload image: {}", err),
        }
    }

    /// Whether this error was caused by a failing collaborator
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Store { .. } | Self::ImageHost(_))
    }
}

//! Shared Error Types
//!
//! This module defines error types produced by the record layer: decoding
//! failures and field validation failures. The backend maps them onto HTTP
//! status codes (see `backend::error`).
//!
//! # Error Categories
//!
//! - `SerializationError` - A request body that is not valid JSON for the record
//! - `ValidationError` - A record field holds a value the API does not accept
//!
//! # Usage
//!
//! ```rust
//! use homelist::shared::error::SharedError;
//!
//! let error = SharedError::validation("Title", "must not be empty");
//! assert!(error.to_string().contains("Title"));
//! ```
use thiserror::Error;

/// Errors raised while decoding or validating records
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// Request body could not be decoded
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Invalid {field}: {message}")]
    ValidationError {
        /// The wire name of the field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field name for validation errors, `None` otherwise
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }
}

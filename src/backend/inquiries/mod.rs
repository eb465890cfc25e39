//! Inquiry endpoints.

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_inquiry, list_inquiries};

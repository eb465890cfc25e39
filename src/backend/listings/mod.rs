//! Listing endpoints.

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_listing, list_listings};

//! User endpoints, including the email existence check.

/// HTTP handlers
pub mod handlers;

pub use handlers::{check_user, create_user, list_users, UserExists};

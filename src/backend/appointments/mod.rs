//! Appointment endpoints.

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_appointment, list_appointments};

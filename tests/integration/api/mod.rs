//! API integration tests
//!
//! Integration tests for all API endpoints, driven through the full router.

mod appointments_test;
mod health_test;
mod images_test;
mod inquiries_test;
mod properties_test;

//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router creation, CORS and tracing layers
//! └── api_routes.rs   - Resource endpoints
//! ```
//!
//! # Route Types
//!
//! ## Reads
//!
//! - `GET /properties`, `/listings`, `/inquiries`, `/appointments`, `/users`
//! - `GET /check/user?email=...`
//! - `GET /health`
//!
//! ## Writes
//!
//! - `POST /add/{property,listing,inquiry,appointment,user}`
//! - `POST /properties/{id}/images`
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use homelist::backend::routes::create_router;
//! use homelist::backend::server::AppState;
//! use homelist::backend::store::{MemoryStore, Repository};
//!
//! let repository = Repository::new(Arc::new(MemoryStore::new()), Duration::from_secs(5));
//! let router = create_router(AppState::new(repository, None));
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;

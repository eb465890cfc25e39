//! Backend Module
//!
//! This module contains all server-side code for the homelist API: an Axum
//! HTTP server over a MongoDB document store, with property images hosted
//! on Cloudinary.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Application state, service construction, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`store`** - Document store access (MongoDB, in-memory) and the typed repository
//! - **`images`** - Image host client
//! - **`properties`**, **`listings`**, **`inquiries`**, **`appointments`**,
//!   **`users`** - Per-resource handlers
//! - **`common`** - Handler steps shared by every resource
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - State, startup and health
//! ├── routes/         - Route configuration
//! ├── store/          - Document store and repository
//! ├── images/         - Image hosting
//! ├── properties/     - Property handlers (incl. image upload)
//! ├── listings/       - Listing handlers
//! ├── inquiries/      - Inquiry handlers
//! ├── appointments/   - Appointment handlers
//! ├── users/          - User handlers
//! ├── common.rs       - Shared list/create steps
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! client → router (CORS, tracing) → handler → repository / image host → JSON
//!
//! Every store call is bounded by the configured store timeout. Handlers do
//! not retry; a failure is translated to a status code where it occurs.
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, BackendError>`. Errors render as a
//! status code and a plain-text message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Document store access
pub mod store;

/// Image hosting
pub mod images;

/// Backend error types
pub mod error;

/// Shared handler steps
pub mod common;

/// Property handlers
pub mod properties;

/// Listing handlers
pub mod listings;

/// Inquiry handlers
pub mod inquiries;

/// Appointment handlers
pub mod appointments;

/// User handlers
pub mod users;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, create_app_from_config, AppState};

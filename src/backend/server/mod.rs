//! Server Module
//!
//! This module contains the code that assembles the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Building the store and image host from `ServerConfig`
//! - **`init`** - App creation
//! - **`health`** - Liveness endpoint
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Service construction (MongoDB, Cloudinary)
//! ├── init.rs         - App creation
//! └── health.rs       - GET /health
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig::from_env` (see `shared::config`)
//! 2. **Services**: connect and ping MongoDB, build the image host
//! 3. **Router Creation**: routes, CORS and request tracing

/// Application state management
pub mod state;

/// Service construction
pub mod config;

/// Server initialization
pub mod init;

/// Health endpoint
pub mod health;

// Re-export commonly used types
pub use config::StartupError;
pub use init::{create_app, create_app_from_config};
pub use state::AppState;

//! Homelist - Main Library
//!
//! Homelist is the HTTP backend of a real-estate listing service. It stores
//! properties, listings, inquiries, appointments and users in MongoDB and
//! hosts property images on Cloudinary.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types with no I/O
//!   - Record shapes and their validation
//!   - Error types
//!   - Server configuration
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and handlers
//!   - Document store access (MongoDB, in-memory)
//!   - Image host client
//!
//! # Usage
//!
//! ```rust,no_run
//! use homelist::backend::create_app_from_config;
//! use homelist::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app_from_config(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for record validation
//! - `backend::store::StoreError` and `backend::images::ImageHostError` for collaborators
//! - `backend::BackendError` for everything a handler can return
//!
//! # See Also
//!
//! - [DESIGN.md](../DESIGN.md) - Design decisions

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

//! Shared Module
//!
//! This module contains the record shapes, their validation errors and the
//! server configuration types. Nothing in here talks to the network; the
//! backend module builds the HTTP surface and store access on top of it.

/// Shared error types
pub mod error;

/// Domain records (properties, listings, inquiries, appointments, users)
pub mod records;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{ConfigError, ImageHostConfig, ServerConfig, ServerConfigBuilder, SignatureAlgorithm};
pub use records::{
    Appointment, AppointmentStatus, Coordinates, Inquiry, Listing, ListingStatus, ListingType,
    Property, Record, RecordId, User,
};

//! Image Hosting Module
//!
//! Uploads property images to an external hosting service and returns the
//! durable public URL to store on the property.
//!
//! # Architecture
//!
//! - **`ImageHost`** - upload seam held in `AppState`; tests substitute a stub
//! - **`cloudinary`** - Cloudinary upload API client

use async_trait::async_trait;
use bytes::Bytes;

/// Cloudinary client
pub mod cloudinary;

pub use cloudinary::CloudinaryHost;

/// A decoded image ready to send to the host
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// The host's record of an uploaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedImage {
    /// Public HTTPS URL; may be empty if the host misbehaves
    pub secure_url: String,
}

/// Errors returned by an image host
#[derive(Debug, thiserror::Error)]
pub enum ImageHostError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("host responded {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("image hosting is not configured")]
    NotConfigured,
}

/// Service that stores uploaded images
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, image: ImageUpload) -> Result<HostedImage, ImageHostError>;
}

//! Property endpoints: listing, creation and image attachment.

/// HTTP handlers
pub mod handlers;

pub use handlers::{attach_image, create_property, list_properties, MAX_IMAGE_BYTES};

/**
 * Service Construction
 *
 * Turns a [`ServerConfig`] into the services held by `AppState`: the
 * MongoDB-backed repository and, when credentials are present, the
 * Cloudinary image host.
 *
 * # Error Handling
 *
 * Unlike a missing image host, which only disables uploads, a store that
 * cannot be reached is fatal: the caller is expected to exit.
 */
use std::sync::Arc;

use crate::backend::images::{CloudinaryHost, ImageHost, ImageHostError};
use crate::backend::server::state::AppState;
use crate::backend::store::{MongoStore, Repository, StoreError};
use crate::shared::ServerConfig;

/// Errors that prevent the server from starting
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to connect to the document store: {0}")]
    Store(#[from] StoreError),

    #[error("failed to build the image host client: {0}")]
    ImageHost(#[from] ImageHostError),
}

/// Connect to MongoDB, ping it and wrap it in a repository
pub async fn load_repository(config: &ServerConfig) -> Result<Repository, StoreError> {
    tracing::info!(
        "Connecting to MongoDB database '{}' (timeout {:?})",
        config.database_name,
        config.connect_timeout
    );

    let store = MongoStore::connect(&config.mongodb_uri, &config.database_name, config.connect_timeout).await?;
    Ok(Repository::new(Arc::new(store), config.store_timeout))
}

/// Build the image host, if configured
pub fn load_image_host(config: &ServerConfig) -> Result<Option<Arc<dyn ImageHost>>, ImageHostError> {
    let Some(image_host) = &config.image_host else {
        tracing::warn!("Cloudinary credentials not set. Image uploads will be rejected.");
        return Ok(None);
    };

    tracing::info!("Image uploads go to Cloudinary cloud '{}'", image_host.cloud_name);
    let host = CloudinaryHost::new(image_host.clone())?;
    Ok(Some(Arc::new(host)))
}

/// Build the full application state from configuration
pub async fn load_state(config: &ServerConfig) -> Result<AppState, StartupError> {
    let repository = load_repository(config).await?;
    let image_host = load_image_host(config)?;
    Ok(AppState::new(repository, image_host))
}

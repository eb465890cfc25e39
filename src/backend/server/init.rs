/**
 * Server Initialization
 *
 * Builds the Axum application, either from ready-made state (tests, tools)
 * or straight from configuration (the server binary).
 *
 * # Initialization Process
 *
 * 1. Connect to MongoDB and ping it, bounded by the connect timeout
 * 2. Build the image host if credentials are configured
 * 3. Create the router with all routes and middleware
 */
use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_state, StartupError};
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Create the Axum application over existing state
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
/// use homelist::backend::server::{create_app, AppState};
/// use homelist::backend::store::{MemoryStore, Repository};
///
/// let repository = Repository::new(Arc::new(MemoryStore::new()), Duration::from_secs(5));
/// let app = create_app(AppState::new(repository, None));
/// ```
pub fn create_app(app_state: AppState) -> Router<()> {
    create_router(app_state)
}

/// Connect every service named in `config` and create the application
///
/// # Errors
///
/// Returns `StartupError` if the store cannot be reached within the connect
/// timeout or the image host client cannot be built.
pub async fn create_app_from_config(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing homelist backend server");

    let app_state = load_state(config).await?;
    let app = create_app(app_state);

    tracing::info!("Router configured");
    Ok(app)
}

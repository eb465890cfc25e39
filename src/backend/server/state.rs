/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds the two long-lived collaborators every
 * request may need:
 * - The record repository (document store handle plus per-call timeout)
 * - The image host, absent when uploads are not configured
 *
 * Both are cheap to clone and safe to share; no request mutates them.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use homelist::backend::store::Repository;
 *
 * async fn handler(State(repository): State<Repository>) {
 *     let _ = repository.ping().await;
 * }
 * ```
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::images::ImageHost;
use crate::backend::store::Repository;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub repository: Repository,
    pub image_host: Option<Arc<dyn ImageHost>>,
}

impl AppState {
    pub fn new(repository: Repository, image_host: Option<Arc<dyn ImageHost>>) -> Self {
        Self {
            repository,
            image_host,
        }
    }
}

impl FromRef<AppState> for Repository {
    fn from_ref(state: &AppState) -> Self {
        state.repository.clone()
    }
}

impl FromRef<AppState> for Option<Arc<dyn ImageHost>> {
    fn from_ref(state: &AppState) -> Self {
        state.image_host.clone()
    }
}

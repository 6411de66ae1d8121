//! Application state.

use std::sync::Arc;

use tutor_content::FileStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The content backend.
    pub store: Arc<FileStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<FileStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }
}

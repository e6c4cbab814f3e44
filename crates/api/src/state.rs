use std::sync::Arc;

use plotline_core::store::EntityStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Entity store the project services run against.
    pub store: Arc<dyn EntityStore>,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn store(&self) -> &dyn EntityStore {
        self.store.as_ref()
    }
}

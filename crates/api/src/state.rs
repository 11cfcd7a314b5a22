use std::sync::Arc;

use annolog_store::AnnotationStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The single annotation writer; its lock serializes every append.
    pub store: Arc<AnnotationStore>,
}

impl AppState {
    /// Build state with a fresh store for `config.csv_path`.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(AnnotationStore::new(config.csv_path.clone()));
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

//! Shared application state for the web server.

use std::sync::Arc;

use neuroexpr_data::Dataset;

/// Shared state injected into every Axum handler. The dataset is loaded
/// once at startup and read-only for the life of the process, so no
/// locking is needed.
#[derive(Debug)]
pub struct AppState {
    pub dataset: Dataset,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

pub type SharedState = Arc<AppState>;

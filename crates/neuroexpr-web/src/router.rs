//! Axum router — maps the two page paths to handlers.

use std::sync::Arc;

use axum::http::header::{self, HeaderValue};
use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::handlers::{form::input_form, result::result_page};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(input_form))
        .route("/result", get(result_page))
        // Middleware. Every result view recomputes; browsers must never
        // show a cached chart.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over an ingested dataset
//! - JSON error responses
//! - Shared application state

pub mod error;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::Router;
use los_core::aggregation::SortOrder;
use los_core::dataset::Dataset;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dataset ingested at startup. Read-only for the life of the process.
    pub dataset: Arc<Dataset>,
    /// Rows per table returned by the preview endpoint when none are requested.
    pub preview_rows: usize,
    /// Chart ordering used when a request does not choose one.
    pub default_sort: SortOrder,
}

impl AppState {
    /// Creates state over an ingested dataset.
    #[must_use]
    pub fn new(dataset: Dataset, preview_rows: usize, default_sort: SortOrder) -> Self {
        Self {
            dataset: Arc::new(dataset),
            preview_rows,
            default_sort,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

//! Dataset preview routes.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use los_core::dataset::DatasetPreview;
use los_shared::AppError;
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// Largest preview a client may request.
const MAX_PREVIEW_ROWS: usize = 100;

/// Creates the dataset routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dataset/preview", get(get_preview))
}

/// Query parameters for the preview.
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Rows per table. Defaults to the configured preview size.
    pub rows: Option<usize>,
}

/// GET /dataset/preview
async fn get_preview(
    State(state): State<AppState>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Json<DatasetPreview>, ApiError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let rows = query.rows.unwrap_or(state.preview_rows);

    if rows > MAX_PREVIEW_ROWS {
        return Err(AppError::Validation(format!(
            "rows must be at most {MAX_PREVIEW_ROWS}, got {rows}"
        ))
        .into());
    }

    Ok(Json(state.dataset.preview(rows)))
}

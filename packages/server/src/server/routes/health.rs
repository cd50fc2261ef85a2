use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    catalog_size: usize,
    datastore_configured: bool,
}

/// Health check endpoint
///
/// The catalog is in-process and immutable, so liveness is the only thing
/// to report; the datastore flag tells operators whether /api/test-db can
/// do anything useful.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            catalog_size: state.catalog.len(),
            datastore_configured: state.supabase.is_some(),
        }),
    )
}

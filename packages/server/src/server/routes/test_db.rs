//! Datastore connectivity check.
//!
//! Counts the `companies` table, then fetches the full listing. Each stage
//! reports its own failure so a connection problem is distinguishable from
//! a fetch problem. Any failure is a structured 500 body; there are no
//! retries or partial results.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::server::app::AppState;

const COMPANIES_TABLE: &str = "companies";

#[derive(Serialize)]
pub struct TestDbSuccess {
    success: bool,
    message: String,
    stats: TestDbStats,
    companies: Vec<Value>,
}

#[derive(Serialize)]
pub struct TestDbStats {
    total_companies: i64,
    companies_fetched: usize,
}

#[derive(Serialize)]
pub struct TestDbFailure {
    success: bool,
    error: String,
    details: String,
}

fn failure(error: &str, details: impl std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(TestDbFailure {
            success: false,
            error: error.to_string(),
            details: details.to_string(),
        }),
    )
        .into_response()
}

/// GET /api/test-db - datastore connectivity check
pub async fn test_db_handler(Extension(state): Extension<AppState>) -> Response {
    let Some(client) = &state.supabase else {
        return failure(
            "Unexpected error",
            "datastore client is not configured (SUPABASE_URL / SUPABASE_ANON_KEY unset)",
        );
    };

    let total_companies = match client.count_rows(COMPANIES_TABLE).await {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(error = %e, "Datastore count query failed");
            return failure("Failed to connect to database", e);
        }
    };

    let companies = match client.fetch_all(COMPANIES_TABLE).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "Datastore fetch query failed");
            return failure("Failed to fetch companies", e);
        }
    };

    (
        StatusCode::OK,
        Json(TestDbSuccess {
            success: true,
            message: "Database connection successful!".to_string(),
            stats: TestDbStats {
                total_companies,
                companies_fetched: companies.len(),
            },
            companies,
        }),
    )
        .into_response()
}

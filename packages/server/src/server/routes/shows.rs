//! The listing filter engine over HTTP.
//!
//! The handler owns everything the engine must not touch: it defaults the
//! reference date from the clock (overridable via `?today=` for
//! deterministic clients), parses the filter selections out of the query
//! string, and hands the engine pure values.

use std::collections::BTreeSet;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::catalog::{
    compute_visible_shows, derive_facets, select_views, DeviceClass, Facets, FilterState,
    ShowViews,
};
use crate::server::app::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ShowsQuery {
    /// Date window name: today | this_weekend | calendar (default).
    pub window: Option<String>,
    /// Comma-separated neighborhood multi-select.
    pub neighborhoods: Option<String>,
    /// Comma-separated tag multi-select.
    pub tags: Option<String>,
    /// mobile | desktop (default).
    pub device: Option<String>,
    /// ISO date overriding the reference date, for deterministic clients.
    pub today: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct ShowsResponse {
    pub today: NaiveDate,
    pub facets: Facets,
    pub filter: FilterState,
    pub counts: ViewCounts,
    pub views: ShowViews,
}

#[derive(Serialize)]
pub struct ViewCounts {
    pub snapshot: usize,
    pub featured: usize,
    pub full: usize,
    pub closing_soon: usize,
}

#[derive(Serialize)]
struct BadRequest {
    error: String,
}

fn bad_request(error: impl std::fmt::Display) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(BadRequest {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Split a comma-separated multi-select query value into a selection set.
/// Blank segments are dropped, so `?tags=` still means "no restriction".
fn parse_selection(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

/// GET /api/shows - filtered listing with facets and view projections
pub async fn shows_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<ShowsQuery>,
) -> Response {
    let window = match query.window.as_deref().map(str::parse).transpose() {
        Ok(window) => window.unwrap_or_default(),
        Err(e) => return bad_request(e),
    };
    let device: DeviceClass = match query.device.as_deref().map(str::parse).transpose() {
        Ok(device) => device.unwrap_or_default(),
        Err(e) => return bad_request(e),
    };

    let filter = FilterState {
        window,
        neighborhoods: parse_selection(query.neighborhoods.as_deref()),
        tags: parse_selection(query.tags.as_deref()),
    };
    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());

    let filtered = compute_visible_shows(&state.catalog, &filter, today);
    let views = select_views(&filtered, device);

    tracing::debug!(
        window = %filter.window,
        matched = views.full.len(),
        "Recomputed visible shows"
    );

    (
        StatusCode::OK,
        Json(ShowsResponse {
            today,
            facets: derive_facets(&state.catalog),
            counts: ViewCounts {
                snapshot: views.snapshot.len(),
                featured: views.featured.len(),
                full: views.full.len(),
                closing_soon: views.closing_soon.len(),
            },
            filter,
            views,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_parsing_handles_blanks() {
        assert!(parse_selection(None).is_empty());
        assert!(parse_selection(Some("")).is_empty());
        assert!(parse_selection(Some(" , ,")).is_empty());

        let set = parse_selection(Some("Pilsen, Logan Square"));
        assert!(set.contains("Pilsen"));
        assert!(set.contains("Logan Square"));
        assert_eq!(set.len(), 2);
    }
}

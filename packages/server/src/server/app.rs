//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::catalog::Show;
use crate::kernel::SupabaseClient;
use crate::server::routes::{
    echo_handler, health_handler, hello_handler, shows_handler, test_db_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only show catalog, fixed for the process lifetime.
    pub catalog: Arc<Vec<Show>>,
    /// Datastore client; `None` when the Supabase env values are unset.
    pub supabase: Option<Arc<SupabaseClient>>,
}

/// Build the Axum application router
pub fn build_app(catalog: Vec<Show>, supabase: Option<SupabaseClient>) -> Router {
    let app_state = AppState {
        catalog: Arc::new(catalog),
        supabase: supabase.map(Arc::new),
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/hello", get(hello_handler).post(echo_handler))
        .route("/api/test-db", get(test_db_handler))
        .route("/api/shows", get(shows_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

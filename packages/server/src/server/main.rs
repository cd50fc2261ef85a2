// Main entry point for API server

use anyhow::{Context, Result};
use tracker_core::{
    domains::catalog::data::demo_catalog, kernel::SupabaseClient, server::build_app, Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tracker_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Chicago Storefront Theatre Tracker API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Load the fixed show catalog
    let catalog = demo_catalog();
    tracing::info!("Catalog loaded with {} shows", catalog.len());

    // Datastore client is optional; missing env values disable it
    let supabase = SupabaseClient::from_config(
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
    );

    // Build application
    let app = build_app(catalog, supabase);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Listings: http://localhost:{}/api/shows", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// The two Supabase values are optional: if either is missing, the
    /// datastore client is simply not constructed and /api/test-db reports
    /// the client as unconfigured instead of the process failing to start.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            supabase_url: env::var("SUPABASE_URL").ok(),
            supabase_anon_key: env::var("SUPABASE_ANON_KEY").ok(),
        })
    }
}

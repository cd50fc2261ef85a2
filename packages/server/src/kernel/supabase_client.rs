//! Supabase REST (PostgREST) client.
//!
//! Thin wrapper used only by the connectivity-check route. The client talks
//! to the project's PostgREST endpoint (`{base}/rest/v1/{table}`) with the
//! anon key in both the `apikey` and `Authorization` headers, which is how
//! the hosted API expects unauthenticated reads.

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;

/// Datastore failure, split by stage so the connectivity route can report
/// which query failed.
#[derive(Debug, Error)]
pub enum DatastoreError {
    #[error("count query failed: {0}")]
    Count(anyhow::Error),
    #[error("fetch query failed: {0}")]
    Fetch(anyhow::Error),
}

pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, anon_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            client,
        })
    }

    /// Build the client from optional configuration values.
    ///
    /// Returns `None` when either value is absent: the datastore is an
    /// optional collaborator, so missing configuration disables the client
    /// rather than failing startup.
    pub fn from_config(base_url: Option<String>, anon_key: Option<String>) -> Option<Self> {
        let (base_url, anon_key) = match (base_url, anon_key) {
            (Some(url), Some(key)) => (url, key),
            _ => {
                tracing::info!("Supabase credentials not set, datastore client disabled");
                return None;
            }
        };

        match Self::new(base_url, anon_key) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!("Failed to create Supabase client: {}", e);
                None
            }
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Exact row count of a table, via a HEAD request with
    /// `Prefer: count=exact` (the count comes back in `content-range`).
    pub async fn count_rows(&self, table: &str) -> Result<i64, DatastoreError> {
        self.count_rows_inner(table).await.map_err(DatastoreError::Count)
    }

    async fn count_rows_inner(&self, table: &str) -> Result<i64> {
        let response = self
            .client
            .head(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "count=exact")
            .query(&[("select", "*")])
            .send()
            .await
            .context("Failed to send count request")?;

        if !response.status().is_success() {
            anyhow::bail!("Supabase API error {}", response.status());
        }

        let content_range = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .context("Missing content-range header in count response")?;

        parse_content_range_total(content_range)
            .with_context(|| format!("Unparseable content-range: {}", content_range))
    }

    /// Fetch every row of a table, newest first.
    pub async fn fetch_all(&self, table: &str) -> Result<Vec<Value>, DatastoreError> {
        self.fetch_all_inner(table).await.map_err(DatastoreError::Fetch)
    }

    async fn fetch_all_inner(&self, table: &str) -> Result<Vec<Value>> {
        let response = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .context("Failed to send fetch request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Supabase API error {}: {}", status, body);
        }

        response
            .json::<Vec<Value>>()
            .await
            .context("Failed to parse fetch response")
    }
}

/// Extract the total from a PostgREST `content-range` value, e.g.
/// `0-9/42` or `*/0`.
fn parse_content_range_total(value: &str) -> Option<i64> {
    value.rsplit('/').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_content_range_totals() {
        assert_eq!(parse_content_range_total("0-9/42"), Some(42));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("*/*"), None);
        assert_eq!(parse_content_range_total("nonsense"), None);
    }

    #[test]
    fn missing_config_disables_the_client() {
        assert!(SupabaseClient::from_config(None, None).is_none());
        assert!(
            SupabaseClient::from_config(Some("https://x.supabase.co".into()), None).is_none()
        );
        assert!(SupabaseClient::from_config(None, Some("anon".into())).is_none());
        assert!(SupabaseClient::from_config(
            Some("https://x.supabase.co/".into()),
            Some("anon".into())
        )
        .is_some());
    }
}

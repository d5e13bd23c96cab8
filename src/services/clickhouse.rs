//! ClickHouse HTTP interface client.
//!
//! Talks to the warehouse over the HTTP interface (default port 8123),
//! authenticating with the `X-ClickHouse-User` / `X-ClickHouse-Key` headers.
//! Queries are sent in the request body with `default_format=JSONCompact`,
//! so the SQL text itself stays untouched.

use crate::models::config::ClickHouseConfig;
use crate::models::table::{Column, QueryResult};
use crate::{Error, Result};
use serde::Deserialize;

/// ClickHouse HTTP client. One instance per report run; the underlying
/// connection is released when the client is dropped.
pub struct ClickHouseClient {
    config: ClickHouseConfig,
    client: reqwest::Client,
}

/// JSONCompact response payload: column metadata plus positional rows.
#[derive(Debug, Deserialize)]
struct JsonCompactResponse {
    meta: Vec<Column>,
    data: Vec<Vec<serde_json::Value>>,
}

impl ClickHouseClient {
    /// Create a new client for the given connection parameters.
    pub fn new(config: ClickHouseConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Base endpoint URL.
    fn endpoint(&self) -> String {
        format!("http://{}:{}/", self.config.host, self.config.port)
    }

    /// Query endpoint URL with database and output format parameters.
    fn query_url(&self) -> String {
        format!(
            "{}?database={}&default_format=JSONCompact",
            self.endpoint(),
            urlencoding::encode(&self.config.database),
        )
    }

    /// User this client authenticates as.
    pub fn user(&self) -> &str {
        &self.config.user
    }

    /// Check that the endpoint is reachable (`GET /ping`).
    pub async fn ping(&self) -> Result<()> {
        let url = format!("{}ping", self.endpoint());
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Error::Connection(format!(
                "ping returned HTTP {}",
                resp.status()
            )))
        }
    }

    /// Check that the configured credentials are accepted.
    pub async fn verify_credentials(&self) -> Result<()> {
        self.execute("SELECT 1").await.map(|_| ())
    }

    /// Execute a query and materialize the full result set in memory.
    /// Blocks until the backend returns the complete response.
    pub async fn execute(&self, query: &str) -> Result<QueryResult> {
        tracing::debug!("executing query against {}", self.endpoint());

        let resp = self
            .client
            .post(&self.query_url())
            .header("X-ClickHouse-User", &self.config.user)
            .header("X-ClickHouse-Key", &self.config.password)
            .body(query.to_string())
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(backend_error(status, &body));
        }

        parse_json_compact(&body)
    }
}

/// Classify a non-2xx backend response. Rejected credentials count as a
/// connection failure; everything else is a query failure.
fn backend_error(status: reqwest::StatusCode, body: &str) -> Error {
    let detail = body.trim();
    let detail = if detail.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, detail)
    };

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        Error::Connection(detail)
    } else {
        Error::Query(detail)
    }
}

/// Parse a JSONCompact response body into a result table.
pub fn parse_json_compact(body: &str) -> Result<QueryResult> {
    let resp: JsonCompactResponse = serde_json::from_str(body)
        .map_err(|e| Error::Query(format!("unexpected response payload: {}", e)))?;

    Ok(QueryResult {
        columns: resp.meta,
        rows: resp.data,
    })
}

//! reqwest-backed query client.
//!
//! One `POST {base_url}/query` per call, JSON in and JSON out. No auth,
//! no retries, no timeout.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use crate::query::{QueryClient, QueryError, QueryRequest, QueryResponse};

/// Path the query service listens on, relative to the base URL.
pub const QUERY_PATH: &str = "/query";

pub struct HttpQueryClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpQueryClient {
    pub fn new(base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), QUERY_PATH);
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QueryClient for HttpQueryClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn query(&self, query: &str) -> Result<QueryResponse, QueryError> {
        info!("POST {} (query_len={})", self.endpoint, query.len());

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Query service status: {}", status);
        if !status.is_success() {
            // Status is not acted on; the body decides. Recorded in the file log only.
            warn!("Query service returned HTTP {}", status.as_u16());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| QueryError::Parse(e.to_string()))?;

        if body.is_null() {
            return Err(QueryError::Parse("response body is null".to_string()));
        }

        debug!("Query service body: {} bytes", bytes.len());
        Ok(QueryResponse::new(body))
    }
}

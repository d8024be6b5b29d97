//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::route::Route;
use crate::core::state::App;
use crate::query::{QueryClient, QueryError, QueryResponse};

/// A collaborator that answers every query with the same canned outcome.
pub struct StubClient {
    outcome: Result<QueryResponse, QueryError>,
}

impl StubClient {
    pub fn answering(body: serde_json::Value) -> Self {
        Self {
            outcome: Ok(QueryResponse::new(body)),
        }
    }

    pub fn failing(err: QueryError) -> Self {
        Self { outcome: Err(err) }
    }
}

#[async_trait]
impl QueryClient for StubClient {
    fn endpoint(&self) -> &str {
        "stub://query"
    }

    async fn query(&self, _query: &str) -> Result<QueryResponse, QueryError> {
        self.outcome.clone()
    }
}

/// Creates a test App on the landing route with a stub that answers `{}`.
pub fn test_app() -> App {
    App::new(
        Arc::new(StubClient::answering(serde_json::json!({}))),
        Route::Landing,
    )
}

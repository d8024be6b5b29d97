use std::fmt;

use async_trait::async_trait;

use super::types::QueryResponse;

/// Errors that can occur while talking to the query service.
///
/// Every variant ends up as the same apology message in the transcript;
/// the distinction only matters for logs.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Connection refused, DNS failure, reset mid-body.
    Network(String),
    /// The body was not JSON, or was JSON `null`.
    Parse(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Network(msg) => write!(f, "network error: {msg}"),
            QueryError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for QueryError {}

#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Full URL requests are sent to (for the title bar and logs).
    fn endpoint(&self) -> &str;

    /// Sends one query and returns the parsed body.
    ///
    /// The HTTP status is not inspected: a 500 with a JSON body is still a
    /// parsed response.
    async fn query(&self, query: &str) -> Result<QueryResponse, QueryError>;
}

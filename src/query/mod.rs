//! # Remote Query Collaborator
//!
//! The one network boundary of the app: a text-query service that accepts
//! `{"query": ...}` and answers with a JSON body carrying a `response` field.
//!
//! [`QueryClient`] is the seam; [`HttpQueryClient`] is the reqwest-backed
//! implementation used at runtime.

pub mod client;
pub mod http;
pub mod types;

pub use client::{QueryClient, QueryError};
pub use http::HttpQueryClient;
pub use types::{QueryRequest, QueryResponse};

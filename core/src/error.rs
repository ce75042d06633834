//! Error types for the todo API client.
//!
//! # Design
//! Not-found and validation failures get their own variants because callers
//! act on them differently; every other unexpected status lands in `Http`
//! with the raw body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404: no todo with the requested id. `detail` is the server's message.
    #[error("not found: {detail}")]
    NotFound { detail: String },

    /// 422: the server rejected the request body or path.
    #[error("request rejected: {body}")]
    Validation { body: String },

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

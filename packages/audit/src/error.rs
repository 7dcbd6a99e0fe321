//! Typed errors for the audit library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during audit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Fetch operation failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Inference service unavailable or failed
    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (store directories, report files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while discovering or fetching articles.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-success HTTP status
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Page could not be retrieved at all
    #[error("unavailable: {url}")]
    Unavailable { url: String },
}

/// Errors from external classification, QA, or generation services.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Backing service call failed
    #[error("service error: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Service returned a response the caller cannot use
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// No backing service configured (null implementation)
    #[error("service disabled")]
    Disabled,
}

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for inference-service operations.
pub type InferenceResult<T> = std::result::Result<T, InferenceError>;

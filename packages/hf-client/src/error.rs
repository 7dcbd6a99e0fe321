//! Error types for the Hugging Face client.
//!
//! The Inference API has two transient failure modes worth telling
//! apart from hard errors: a cold model returns HTTP 503 with an
//! `estimated_time` until it is warm, and the free tier returns HTTP
//! 429 when the quota is exhausted. Callers that degrade to defaults
//! can log these distinctly from genuine request failures.

use thiserror::Error;

/// Result type for Hugging Face client operations.
pub type Result<T> = std::result::Result<T, HfError>;

/// Hugging Face Inference API errors.
#[derive(Debug, Error)]
pub enum HfError {
    /// Missing API token or invalid client settings
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never completed (connection refused, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// The model is cold and still loading on the inference backend
    /// (HTTP 503). Transient; the API reports an estimated wait.
    #[error("model {model} is loading, estimated {estimated_time:.0}s")]
    ModelLoading {
        /// Model that is warming up
        model: String,
        /// Seconds until the model is expected to be ready
        estimated_time: f32,
    },

    /// Inference quota exhausted (HTTP 429)
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success response from the API
    #[error("API error, HTTP {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Parse(String),
}

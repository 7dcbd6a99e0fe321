//! Pure Hugging Face Inference API client
//!
//! A clean, minimal client for the Hugging Face Inference API with no
//! domain-specific logic. Supports zero-shot classification, extractive
//! question answering, and text generation.
//!
//! # Example
//!
//! ```rust,ignore
//! use hf_client::HfClient;
//!
//! let client = HfClient::from_env()?;
//!
//! // Zero-shot classification over a caller-supplied label set
//! let result = client
//!     .zero_shot_classification("How to rotate an API token", &["api", "billing"])
//!     .await?;
//!
//! // Extractive QA
//! let answer = client
//!     .question_answering("What is required?", "Admins require an API token.")
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{HfError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Free-tier friendly default models.
const DEFAULT_ZERO_SHOT_MODEL: &str = "typeform/distilbert-base-uncased-mnli";
const DEFAULT_QA_MODEL: &str = "deepset/roberta-base-squad2";
const DEFAULT_GENERATION_MODEL: &str = "google/flan-t5-base";

/// Pure Hugging Face Inference API client.
#[derive(Clone)]
pub struct HfClient {
    http_client: Client,
    api_token: String,
    base_url: String,
    zero_shot_model: String,
    qa_model: String,
    generation_model: String,
}

impl HfClient {
    /// Create a new client with the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            zero_shot_model: DEFAULT_ZERO_SHOT_MODEL.to_string(),
            qa_model: DEFAULT_QA_MODEL.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
        }
    }

    /// Create from environment variable `HF_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var("HF_API_TOKEN")
            .map_err(|_| HfError::Config("HF_API_TOKEN not set".into()))?;
        Ok(Self::new(api_token))
    }

    /// Set a custom base URL (for proxies or self-hosted endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the zero-shot classification model.
    pub fn with_zero_shot_model(mut self, model: impl Into<String>) -> Self {
        self.zero_shot_model = model.into();
        self
    }

    /// Set the question answering model.
    pub fn with_qa_model(mut self, model: impl Into<String>) -> Self {
        self.qa_model = model.into();
        self
    }

    /// Set the text generation model.
    pub fn with_generation_model(mut self, model: impl Into<String>) -> Self {
        self.generation_model = model.into();
        self
    }

    /// Set a custom HTTP client (for timeouts, proxies).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Zero-shot multi-label classification over a caller-supplied label set.
    ///
    /// Returns labels ranked by descending score.
    pub async fn zero_shot_classification(
        &self,
        text: &str,
        labels: &[&str],
    ) -> Result<ZeroShotResponse> {
        let request = ZeroShotRequest {
            inputs: text.to_string(),
            parameters: ZeroShotParameters {
                candidate_labels: labels.iter().map(|l| l.to_string()).collect(),
                multi_label: true,
            },
        };

        debug!(model = %self.zero_shot_model, labels = labels.len(), "zero-shot classification");
        let body = self.post_model(&self.zero_shot_model, &request).await?;

        serde_json::from_str(&body).map_err(|e| HfError::Parse(e.to_string()))
    }

    /// Extractive question answering: answer span plus confidence score.
    pub async fn question_answering(
        &self,
        question: &str,
        context: &str,
    ) -> Result<QuestionAnsweringResponse> {
        let request = QuestionAnsweringRequest {
            inputs: QuestionAnsweringInputs {
                question: question.to_string(),
                context: context.to_string(),
            },
        };

        debug!(model = %self.qa_model, question = %question, "question answering");
        let body = self.post_model(&self.qa_model, &request).await?;

        serde_json::from_str(&body).map_err(|e| HfError::Parse(e.to_string()))
    }

    /// Text generation from a prompt. Returns the generated continuation.
    pub async fn text_generation(&self, prompt: &str) -> Result<String> {
        let request = TextGenerationRequest {
            inputs: prompt.to_string(),
            parameters: TextGenerationParameters::default(),
        };

        debug!(model = %self.generation_model, "text generation");
        let body = self.post_model(&self.generation_model, &request).await?;

        let responses: Vec<TextGenerationResponse> =
            serde_json::from_str(&body).map_err(|e| HfError::Parse(e.to_string()))?;

        responses
            .into_iter()
            .next()
            .map(|r| r.generated_text)
            .ok_or_else(|| HfError::Parse("empty generation response".into()))
    }

    /// POST a JSON body to a model endpoint and return the raw response body.
    async fn post_model<T: serde::Serialize>(&self, model: &str, request: &T) -> Result<String> {
        let url = format!("{}/models/{}", self.base_url, model);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(request)
            .send()
            .await
            .map_err(|e| HfError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HfError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(model = %model, status = %status, "inference API error");
            return Err(error_for_status(model, status.as_u16(), &body));
        }

        Ok(body)
    }
}

/// Classify a non-success response into the matching error variant.
///
/// 503 is a cold model warming up, 429 is the free-tier quota; both
/// are transient and reported as such. Everything else is a plain API
/// error carrying the body's message.
fn error_for_status(model: &str, status: u16, body: &str) -> HfError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.error.unwrap_or_else(|| body.to_string());

    match status {
        503 => HfError::ModelLoading {
            model: model.to_string(),
            estimated_time: parsed.estimated_time.unwrap_or(0.0),
        },
        429 => HfError::RateLimited(message),
        _ => HfError::Api { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let client = HfClient::new("token")
            .with_base_url("http://localhost:8080")
            .with_qa_model("custom/qa");

        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.qa_model, "custom/qa");
        assert_eq!(client.zero_shot_model, DEFAULT_ZERO_SHOT_MODEL);
    }

    #[test]
    fn test_zero_shot_response_ranked() {
        let response: ZeroShotResponse = serde_json::from_str(
            r#"{"sequence":"text","labels":["api","billing"],"scores":[0.9,0.1]}"#,
        )
        .unwrap();

        let ranked: Vec<_> = response.ranked().collect();
        assert_eq!(ranked, vec![("api", 0.9), ("billing", 0.1)]);
    }

    #[test]
    fn test_qa_response_parses() {
        let response: QuestionAnsweringResponse =
            serde_json::from_str(r#"{"score":0.42,"start":5,"end":10,"answer":"token"}"#).unwrap();

        assert!((response.score - 0.42).abs() < f32::EPSILON);
        assert_eq!(response.answer, "token");
    }

    #[test]
    fn test_503_maps_to_model_loading_with_wait() {
        let body = r#"{"error":"Model deepset/roberta-base-squad2 is currently loading","estimated_time":57.0}"#;

        match error_for_status("deepset/roberta-base-squad2", 503, body) {
            HfError::ModelLoading {
                model,
                estimated_time,
            } => {
                assert_eq!(model, "deepset/roberta-base-squad2");
                assert!((estimated_time - 57.0).abs() < f32::EPSILON);
            }
            other => panic!("expected ModelLoading, got {other:?}"),
        }
    }

    #[test]
    fn test_429_maps_to_rate_limited() {
        let body = r#"{"error":"Rate limit reached"}"#;

        match error_for_status("any/model", 429, body) {
            HfError::RateLimited(message) => assert_eq!(message, "Rate limit reached"),
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn test_other_statuses_keep_body_message() {
        // Non-JSON body falls back to the raw text
        match error_for_status("any/model", 500, "upstream exploded") {
            HfError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}

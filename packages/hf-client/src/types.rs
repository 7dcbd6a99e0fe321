//! Request and response types for the Hugging Face Inference API.

use serde::{Deserialize, Serialize};

/// Request body for zero-shot classification.
#[derive(Debug, Clone, Serialize)]
pub struct ZeroShotRequest {
    /// Text to classify
    pub inputs: String,

    /// Classification parameters
    pub parameters: ZeroShotParameters,
}

/// Parameters for zero-shot classification.
#[derive(Debug, Clone, Serialize)]
pub struct ZeroShotParameters {
    /// Caller-supplied label set
    pub candidate_labels: Vec<String>,

    /// Allow multiple labels to score independently
    pub multi_label: bool,
}

/// Response from zero-shot classification.
///
/// Labels and scores are parallel arrays, ranked by descending score.
#[derive(Debug, Clone, Deserialize)]
pub struct ZeroShotResponse {
    /// The classified input sequence
    #[serde(default)]
    pub sequence: String,

    /// Candidate labels ranked by score
    pub labels: Vec<String>,

    /// Scores aligned with `labels`
    pub scores: Vec<f32>,
}

impl ZeroShotResponse {
    /// Iterate ranked (label, score) pairs.
    pub fn ranked(&self) -> impl Iterator<Item = (&str, f32)> {
        self.labels
            .iter()
            .map(|l| l.as_str())
            .zip(self.scores.iter().copied())
    }
}

/// Request body for extractive question answering.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionAnsweringRequest {
    /// Question and context pair
    pub inputs: QuestionAnsweringInputs,
}

/// Question/context inputs for QA.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionAnsweringInputs {
    /// The question to answer
    pub question: String,

    /// The context to extract the answer from
    pub context: String,
}

/// Response from extractive question answering.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionAnsweringResponse {
    /// Confidence score (0.0 to 1.0)
    pub score: f32,

    /// Start offset of the answer span in the context
    #[serde(default)]
    pub start: usize,

    /// End offset of the answer span in the context
    #[serde(default)]
    pub end: usize,

    /// The extracted answer span
    pub answer: String,
}

/// Request body for text generation.
#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationRequest {
    /// The prompt
    pub inputs: String,

    /// Generation parameters
    pub parameters: TextGenerationParameters,
}

/// Parameters for text generation.
#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationParameters {
    /// Maximum tokens to generate
    pub max_new_tokens: u32,

    /// Return only the generated continuation, not the prompt
    pub return_full_text: bool,
}

impl Default for TextGenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 80,
            return_full_text: false,
        }
    }
}

/// One element of a text generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct TextGenerationResponse {
    /// The generated text
    pub generated_text: String,
}

/// Error body returned by the Inference API on failures.
///
/// A cold model's 503 carries `estimated_time`; other failures carry
/// only `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    #[serde(default)]
    pub error: Option<String>,

    /// Seconds until a loading model is expected to be ready
    #[serde(default)]
    pub estimated_time: Option<f32>,
}

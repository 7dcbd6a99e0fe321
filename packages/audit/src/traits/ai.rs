//! Narrow traits for the external inference services.
//!
//! One trait per service kind, so each can be backed, mocked, or
//! disabled independently:
//! - `Classifier`: zero/few-shot multi-label classification
//! - `QuestionAnswerer`: extractive QA with a confidence score
//! - `TextGenerator`: best-effort prose rewriting
//!
//! The `Null*` implementations report [`InferenceError::Disabled`],
//! which callers treat as a degradation signal rather than a failure.

use async_trait::async_trait;

use crate::error::{InferenceError, InferenceResult};

/// A label with its classification score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLabel {
    /// The label, drawn from the caller-supplied set
    pub label: String,

    /// Confidence score (0.0 to 1.0)
    pub score: f32,
}

impl ScoredLabel {
    /// Create a new scored label.
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// An extractive-QA answer span with its confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// The extracted span
    pub span: String,

    /// Confidence score (0.0 to 1.0)
    pub score: f32,
}

impl Answer {
    /// Create a new answer.
    pub fn new(span: impl Into<String>, score: f32) -> Self {
        Self {
            span: span.into(),
            score,
        }
    }
}

/// Zero/few-shot multi-label classification over a caller-supplied label set.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify `text` against `labels`, returning ranked scored labels
    /// (highest score first).
    async fn classify(&self, text: &str, labels: &[&str]) -> InferenceResult<Vec<ScoredLabel>>;
}

/// Extractive question answering.
#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    /// Answer `question` against `context`, returning the best span and
    /// its confidence.
    async fn answer(&self, question: &str, context: &str) -> InferenceResult<Answer>;
}

/// Best-effort text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a continuation for `prompt`.
    async fn generate(&self, prompt: &str) -> InferenceResult<String>;
}

/// Classifier with no backing service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClassifier;

#[async_trait]
impl Classifier for NullClassifier {
    async fn classify(&self, _text: &str, _labels: &[&str]) -> InferenceResult<Vec<ScoredLabel>> {
        Err(InferenceError::Disabled)
    }
}

/// Question answerer with no backing service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnswerer;

#[async_trait]
impl QuestionAnswerer for NullAnswerer {
    async fn answer(&self, _question: &str, _context: &str) -> InferenceResult<Answer> {
        Err(InferenceError::Disabled)
    }
}

/// Text generator with no backing service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

#[async_trait]
impl TextGenerator for NullGenerator {
    async fn generate(&self, _prompt: &str) -> InferenceResult<String> {
        Err(InferenceError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_implementations_report_disabled() {
        assert!(matches!(
            NullClassifier.classify("text", &["a"]).await,
            Err(InferenceError::Disabled)
        ));
        assert!(matches!(
            NullAnswerer.answer("q", "ctx").await,
            Err(InferenceError::Disabled)
        ));
        assert!(matches!(
            NullGenerator.generate("p").await,
            Err(InferenceError::Disabled)
        ));
    }
}

//! Hugging Face implementation of the inference-service traits.
//!
//! Adapts [`hf_client::HfClient`] to the `Classifier`,
//! `QuestionAnswerer`, and `TextGenerator` traits. Generation is
//! opt-in; without a generation model configured the adapter reports
//! disabled and the rationale baseline is used.

use async_trait::async_trait;

use crate::error::{InferenceError, InferenceResult};
use crate::traits::ai::{Answer, Classifier, QuestionAnswerer, ScoredLabel, TextGenerator};

/// Hugging Face backend for all three inference services.
#[derive(Clone)]
pub struct HuggingFace {
    client: hf_client::HfClient,
    generation_enabled: bool,
}

impl HuggingFace {
    /// Wrap a configured client. Generation starts disabled.
    pub fn new(client: hf_client::HfClient) -> Self {
        Self {
            client,
            generation_enabled: false,
        }
    }

    /// Enable text generation with the given model.
    pub fn with_generation_model(mut self, model: impl Into<String>) -> Self {
        self.client = self.client.with_generation_model(model);
        self.generation_enabled = true;
        self
    }
}

#[async_trait]
impl Classifier for HuggingFace {
    async fn classify(&self, text: &str, labels: &[&str]) -> InferenceResult<Vec<ScoredLabel>> {
        let response = self
            .client
            .zero_shot_classification(text, labels)
            .await
            .map_err(|e| InferenceError::Service(Box::new(e)))?;

        if response.labels.len() != response.scores.len() {
            return Err(InferenceError::MalformedResponse(
                "label/score arrays differ in length".into(),
            ));
        }

        Ok(response
            .ranked()
            .map(|(label, score)| ScoredLabel::new(label, score))
            .collect())
    }
}

#[async_trait]
impl QuestionAnswerer for HuggingFace {
    async fn answer(&self, question: &str, context: &str) -> InferenceResult<Answer> {
        let response = self
            .client
            .question_answering(question, context)
            .await
            .map_err(|e| InferenceError::Service(Box::new(e)))?;

        Ok(Answer::new(response.answer, response.score))
    }
}

#[async_trait]
impl TextGenerator for HuggingFace {
    async fn generate(&self, prompt: &str) -> InferenceResult<String> {
        if !self.generation_enabled {
            return Err(InferenceError::Disabled);
        }

        self.client
            .text_generation(prompt)
            .await
            .map_err(|e| InferenceError::Service(Box::new(e)))
    }
}

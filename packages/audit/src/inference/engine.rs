//! The per-article inference engine.

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::inference::heuristics::{
    self, DEFAULT_TOPIC, GAP_PROBES, TOPIC_VOCABULARY,
};
use crate::inference::ServiceOutcome;
use crate::traits::ai::{Classifier, QuestionAnswerer};
use crate::types::article::{RawArticle, Severity, StructuredArticle};
use crate::types::config::InferenceConfig;

/// Derives a [`StructuredArticle`] from a [`RawArticle`].
///
/// Category and content type come from deterministic heuristics; topics
/// and gaps additionally consult the external services. Service
/// failures degrade to defaults and never escape [`infer`].
///
/// [`infer`]: InferenceEngine::infer
pub struct InferenceEngine<C, Q> {
    classifier: C,
    answerer: Q,
    config: InferenceConfig,
}

impl<C: Classifier, Q: QuestionAnswerer> InferenceEngine<C, Q> {
    /// Create an engine over the given services.
    pub fn new(classifier: C, answerer: Q, config: InferenceConfig) -> Self {
        Self {
            classifier,
            answerer,
            config,
        }
    }

    /// Derive the structured record for one article. Never fails.
    pub async fn infer(&self, raw: &RawArticle) -> StructuredArticle {
        let category = heuristics::infer_category(&raw.title, &raw.body_text);
        let content_type = heuristics::infer_content_type(&raw.body_text);

        let topics = self.infer_topics(&raw.body_text).await;
        if topics.is_degraded() {
            debug!(article_id = %raw.article_id, "topic classifier degraded to keyword scan");
        }

        let gaps = self.infer_gaps(&raw.body_text).await;
        if gaps.is_degraded() {
            debug!(article_id = %raw.article_id, "gap probes degraded");
        }

        let raw_gaps = gaps.into_inner();
        let gap_severity = Severity::from_gap_count(raw_gaps.len());

        StructuredArticle {
            article_id: raw.article_id.clone(),
            title: raw.title.clone(),
            category,
            content_type,
            topics: topics.into_inner(),
            raw_gaps,
            gap_severity,
            content_hash: raw.content_hash.clone(),
            word_count: raw.word_count(),
            has_screenshots: raw.has_images,
            url: raw.url.clone(),
        }
    }

    /// Layered topic inference.
    ///
    /// Classifier labels above the threshold (top-1 fallback when none
    /// clear it) merged with the deterministic keyword scan, deduped
    /// with order preserved, capped, and never empty.
    pub async fn infer_topics(&self, text: &str) -> ServiceOutcome<Vec<String>> {
        let truncated = self.truncate(text);

        let (primary, degraded) = match self.classifier.classify(truncated, TOPIC_VOCABULARY).await
        {
            Ok(scored) => {
                let mut primary: Vec<String> = scored
                    .iter()
                    .filter(|s| s.score >= self.config.topic_threshold)
                    .take(self.config.max_classifier_topics)
                    .map(|s| s.label.clone())
                    .collect();

                // Hard fallback: keep the single best label rather than none
                if primary.is_empty() {
                    if let Some(top) = scored.first() {
                        primary.push(top.label.clone());
                    }
                }

                (primary, false)
            }
            Err(e) => {
                warn!(error = %e, "topic classification failed");
                (Vec::new(), true)
            }
        };

        let mut merged: IndexSet<String> = IndexSet::new();
        merged.extend(primary);
        merged.extend(heuristics::scan_topic_keywords(text));

        let mut topics: Vec<String> = merged.into_iter().take(self.config.max_topics).collect();
        if topics.is_empty() {
            topics.push(DEFAULT_TOPIC.to_string());
        }

        if degraded {
            ServiceOutcome::Degraded(topics)
        } else {
            ServiceOutcome::Live(topics)
        }
    }

    /// Probe-based gap inference.
    ///
    /// Each probe the QA service answers with low confidence becomes a
    /// raw gap phrase. A failing probe is skipped; if every probe
    /// fails, the deterministic structural checks take over.
    pub async fn infer_gaps(&self, text: &str) -> ServiceOutcome<Vec<String>> {
        let truncated = self.truncate(text);

        let mut gaps: Vec<String> = Vec::new();
        let mut failures = 0usize;

        for probe in GAP_PROBES {
            if gaps.len() >= self.config.max_gaps {
                break;
            }

            match self.answerer.answer(probe, truncated).await {
                Ok(answer) => {
                    if answer.score < self.config.gap_threshold {
                        gaps.push(heuristics::gap_phrase_for_probe(probe));
                    }
                }
                Err(e) => {
                    warn!(probe = %probe, error = %e, "gap probe failed");
                    failures += 1;
                }
            }
        }

        if failures == GAP_PROBES.len() {
            return ServiceOutcome::Degraded(heuristics::structural_gaps(
                text,
                self.config.max_gaps,
            ));
        }

        if failures > 0 {
            ServiceOutcome::Degraded(gaps)
        } else {
            ServiceOutcome::Live(gaps)
        }
    }

    /// Truncate text to the service input budget on a char boundary.
    fn truncate<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.config.max_input_chars) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }
}

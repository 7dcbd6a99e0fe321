//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the audit
//! library without making real inference or network calls.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

use crate::error::{FetchError, FetchResult, InferenceError, InferenceResult};
use crate::traits::ai::{Answer, Classifier, QuestionAnswerer, ScoredLabel, TextGenerator};
use crate::traits::source::ArticleSource;
use crate::types::article::RawArticle;

/// A mock classifier returning configured scored labels.
#[derive(Debug, Clone, Default)]
pub struct MockClassifier {
    labels: Vec<ScoredLabel>,
    fail: bool,
}

impl MockClassifier {
    /// Create a mock with no labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scored label to the response.
    pub fn with_label(mut self, label: impl Into<String>, score: f32) -> Self {
        self.labels.push(ScoredLabel::new(label, score));
        self
    }

    /// Make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, _text: &str, _labels: &[&str]) -> InferenceResult<Vec<ScoredLabel>> {
        if self.fail {
            return Err(InferenceError::Service("mock classifier down".into()));
        }

        let mut ranked = self.labels.clone();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        Ok(ranked)
    }
}

/// A mock question answerer with per-question scores.
#[derive(Debug, Clone)]
pub struct MockAnswerer {
    default_score: f32,
    scores: HashMap<String, f32>,
    fail: bool,
}

impl Default for MockAnswerer {
    fn default() -> Self {
        Self {
            default_score: 1.0,
            scores: HashMap::new(),
            fail: false,
        }
    }
}

impl MockAnswerer {
    /// Create a mock answering every question with full confidence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score returned for unconfigured questions.
    pub fn with_default_score(mut self, score: f32) -> Self {
        self.default_score = score;
        self
    }

    /// Set the score for one question.
    pub fn with_score(mut self, question: impl Into<String>, score: f32) -> Self {
        self.scores.insert(question.into(), score);
        self
    }

    /// Make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl QuestionAnswerer for MockAnswerer {
    async fn answer(&self, question: &str, _context: &str) -> InferenceResult<Answer> {
        if self.fail {
            return Err(InferenceError::Service("mock answerer down".into()));
        }

        let score = self
            .scores
            .get(question)
            .copied()
            .unwrap_or(self.default_score);
        Ok(Answer::new("mock span", score))
    }
}

/// A mock text generator returning a fixed response.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    response: Option<String>,
    fail: bool,
}

impl MockGenerator {
    /// Create a mock with no response configured (behaves as disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated response.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    /// Make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> InferenceResult<String> {
        if self.fail {
            return Err(InferenceError::Service("mock generator down".into()));
        }

        self.response.clone().ok_or(InferenceError::Disabled)
    }
}

/// A mock article source with preloaded pages.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    pages: Vec<RawArticle>,
    unavailable: HashSet<String>,
    fail_discovery: bool,
}

impl MockSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page. Discovery returns pages in insertion order.
    pub fn with_page(
        mut self,
        url: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let url = url.into();
        self.pages.push(RawArticle::new("", url, title, body));
        self
    }

    /// Add a URL that is discovered but fails to fetch.
    pub fn with_unavailable(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.unavailable.insert(url.clone());
        self.pages.push(RawArticle::new("", url, "", ""));
        self
    }

    /// Make discovery fail.
    pub fn failing_discovery(mut self) -> Self {
        self.fail_discovery = true;
        self
    }
}

#[async_trait]
impl ArticleSource for MockSource {
    async fn discover(&self) -> FetchResult<Vec<String>> {
        if self.fail_discovery {
            return Err(FetchError::Unavailable {
                url: "mock://root".into(),
            });
        }

        Ok(self.pages.iter().map(|p| p.url.clone()).collect())
    }

    async fn fetch(&self, url: &str, article_id: &str) -> FetchResult<RawArticle> {
        if self.unavailable.contains(url) {
            return Err(FetchError::Unavailable {
                url: url.to_string(),
            });
        }

        self.pages
            .iter()
            .find(|p| p.url == url)
            .map(|p| {
                let mut article = p.clone();
                article.article_id = article_id.to_string();
                article
            })
            .ok_or_else(|| FetchError::Unavailable {
                url: url.to_string(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

//! Configuration types for scraping, inference, and aggregation.

use serde::{Deserialize, Serialize};

/// Configuration for the help-center scraper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Help-center root URL
    pub base_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Courtesy delay between requests in milliseconds.
    ///
    /// Self-imposed pacing to avoid remote throttling; not a
    /// backoff or retry mechanism.
    pub request_delay_ms: u64,
}

impl ScrapeConfig {
    /// Create a config for a help-center root URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: "KbAuditBot/1.0".to_string(),
            timeout_secs: 15,
            request_delay_ms: 500,
        }
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the courtesy delay between requests.
    pub fn with_request_delay_ms(mut self, ms: u64) -> Self {
        self.request_delay_ms = ms;
        self
    }
}

/// Configuration for the per-article inference engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Hard cap on characters sent to external services
    pub max_input_chars: usize,

    /// Minimum classifier score for a topic to be accepted
    pub topic_threshold: f32,

    /// Maximum topics taken from the classifier
    pub max_classifier_topics: usize,

    /// Maximum topics after merging with the keyword scan
    pub max_topics: usize,

    /// QA probe scores below this count as gaps
    pub gap_threshold: f32,

    /// Maximum raw gaps per article
    pub max_gaps: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 2000,
            topic_threshold: 0.25,
            max_classifier_topics: 3,
            max_topics: 5,
            gap_threshold: 0.25,
            max_gaps: 3,
        }
    }
}

impl InferenceConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence threshold for both topics and gap probes.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.topic_threshold = threshold;
        self.gap_threshold = threshold;
        self
    }

    /// Set the service input character budget.
    pub fn with_max_input_chars(mut self, chars: usize) -> Self {
        self.max_input_chars = chars;
        self
    }

    /// Set the maximum raw gaps per article.
    pub fn with_max_gaps(mut self, max: usize) -> Self {
        self.max_gaps = max;
        self
    }
}

/// Configuration for gap aggregation and rationale generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum rows in the gap report
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

impl AnalysisConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report size cap.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Configuration for a full audit run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Cap on articles processed per run
    pub max_articles: usize,

    /// Delay between per-article pipeline steps in milliseconds
    pub article_delay_ms: u64,

    /// Aggregation settings
    pub analysis: AnalysisConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_articles: 25,
            article_delay_ms: 1000,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl RunConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-run article cap.
    pub fn with_max_articles(mut self, max: usize) -> Self {
        self.max_articles = max;
        self
    }

    /// Set the delay between articles.
    pub fn with_article_delay_ms(mut self, ms: u64) -> Self {
        self.article_delay_ms = ms;
        self
    }

    /// Set the report size cap.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.analysis.top_n = top_n;
        self
    }
}

//! Article types - raw fetch products and structured records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A raw article as fetched from the help center.
///
/// Produced once by the fetcher and immutable afterward. The content
/// hash lets the store log whether a re-fetch actually changed anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    /// Caller-assigned opaque identifier (e.g. "KB-001")
    pub article_id: String,

    /// Article title (first heading, or "Untitled")
    pub title: String,

    /// Canonical URL of the article
    pub url: String,

    /// Whitespace-normalized body text
    pub body_text: String,

    /// Whether the page markup contains any images
    pub has_images: bool,

    /// SHA-256 hash of the body text
    pub content_hash: String,

    /// When the article was fetched
    pub fetched_at: DateTime<Utc>,
}

impl RawArticle {
    /// Create a new raw article.
    pub fn new(
        article_id: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        let body_text = body_text.into();
        let content_hash = Self::hash_content(&body_text);

        Self {
            article_id: article_id.into(),
            title: title.into(),
            url: url.into(),
            body_text,
            has_images: false,
            content_hash,
            fetched_at: Utc::now(),
        }
    }

    /// Placeholder record for an article that could not be retrieved.
    ///
    /// The run continues with this record instead of aborting; it is
    /// structured and persisted like any other article.
    pub fn unavailable(article_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(article_id, url, "Unavailable", "")
    }

    /// Calculate SHA-256 hash of content.
    pub fn hash_content(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Set image presence.
    pub fn with_images(mut self, has_images: bool) -> Self {
        self.has_images = has_images;
        self
    }

    /// Set the fetched timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Approximate word count of the body.
    pub fn word_count(&self) -> usize {
        self.body_text.split_whitespace().count()
    }
}

/// Help-center category, inferred from ordered keyword rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "Integrations")]
    Integrations,
    #[serde(rename = "Roles & Permissions")]
    RolesPermissions,
    #[serde(rename = "Projects & Phases")]
    ProjectsPhases,
    #[serde(rename = "Troubleshooting")]
    Troubleshooting,
    #[serde(rename = "Account & Management")]
    AccountManagement,
    #[serde(rename = "General")]
    General,
}

impl Category {
    /// Human-readable label, matching the persisted serde form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::Integrations => "Integrations",
            Self::RolesPermissions => "Roles & Permissions",
            Self::ProjectsPhases => "Projects & Phases",
            Self::Troubleshooting => "Troubleshooting",
            Self::AccountManagement => "Account & Management",
            Self::General => "General",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::General
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Article content type, inferred from ordered keyword rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "How-to")]
    HowTo,
    #[serde(rename = "FAQ")]
    Faq,
    #[serde(rename = "Troubleshooting")]
    Troubleshooting,
    #[serde(rename = "Reference")]
    Reference,
    #[serde(rename = "Guide")]
    Guide,
}

impl ContentType {
    /// Human-readable label, matching the persisted serde form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HowTo => "How-to",
            Self::Faq => "FAQ",
            Self::Troubleshooting => "Troubleshooting",
            Self::Reference => "Reference",
            Self::Guide => "Guide",
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::Guide
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-article gap severity, a pure function of raw-gap count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// 0 gaps → Low, 1 → Medium, 2 or more → High.
    pub fn from_gap_count(count: usize) -> Self {
        match count {
            0 => Self::Low,
            1 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The structured record derived from a raw article.
///
/// One per article id; reprocessing the same id overwrites the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredArticle {
    /// Caller-assigned article id
    pub article_id: String,

    /// Article title
    pub title: String,

    /// Inferred category
    pub category: Category,

    /// Inferred content type
    pub content_type: ContentType,

    /// Covered topics (max 5, deduped, order preserved)
    pub topics: Vec<String>,

    /// Raw gap phrases (max 3)
    pub raw_gaps: Vec<String>,

    /// Severity derived from the raw gap count
    pub gap_severity: Severity,

    /// SHA-256 hash of the source body, for change detection on re-runs
    pub content_hash: String,

    /// Approximate word count of the body
    pub word_count: usize,

    /// Whether the article carries screenshots
    pub has_screenshots: bool,

    /// Canonical URL
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash() {
        let article = RawArticle::new("KB-001", "https://help.example.com/a", "Title", "body");
        assert_eq!(article.content_hash.len(), 64); // SHA-256 hex
        assert_eq!(article.content_hash, RawArticle::hash_content("body"));
    }

    #[test]
    fn test_word_count() {
        let article = RawArticle::new("KB-001", "https://x", "T", "one  two\nthree");
        assert_eq!(article.word_count(), 3);
    }

    #[test]
    fn test_unavailable_placeholder() {
        let article = RawArticle::unavailable("KB-007", "https://help.example.com/gone");
        assert_eq!(article.title, "Unavailable");
        assert!(article.body_text.is_empty());
        assert!(!article.has_images);
    }

    #[test]
    fn test_severity_is_pure_in_gap_count() {
        assert_eq!(Severity::from_gap_count(0), Severity::Low);
        assert_eq!(Severity::from_gap_count(1), Severity::Medium);
        assert_eq!(Severity::from_gap_count(2), Severity::High);
        assert_eq!(Severity::from_gap_count(3), Severity::High);
        assert_eq!(Severity::from_gap_count(100), Severity::High);
    }

    #[test]
    fn test_category_serde_labels() {
        let json = serde_json::to_string(&Category::RolesPermissions).unwrap();
        assert_eq!(json, "\"Roles & Permissions\"");

        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::RolesPermissions);
    }

    #[test]
    fn test_structured_article_roundtrip() {
        let article = StructuredArticle {
            article_id: "KB-001".into(),
            title: "API tokens".into(),
            category: Category::Api,
            content_type: ContentType::HowTo,
            topics: vec!["api".into(), "token".into()],
            raw_gaps: vec!["explain limitations".into()],
            gap_severity: Severity::Medium,
            content_hash: RawArticle::hash_content("body"),
            word_count: 240,
            has_screenshots: true,
            url: "https://help.example.com/article/api-tokens".into(),
        };

        let json = serde_json::to_string(&article).unwrap();
        let back: StructuredArticle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }
}

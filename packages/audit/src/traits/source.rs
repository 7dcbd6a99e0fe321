//! Article source trait for pluggable discovery and fetching.
//!
//! The trait boundary keeps the pipeline testable: production uses the
//! HTTP scraper, tests use a preloaded mock source.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::types::article::RawArticle;

/// A source of help-center articles.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Discover article URLs, sorted and deduplicated.
    async fn discover(&self) -> FetchResult<Vec<String>>;

    /// Fetch one article by URL, tagging it with the given id.
    async fn fetch(&self, url: &str, article_id: &str) -> FetchResult<RawArticle>;

    /// Implementation name for logging.
    fn name(&self) -> &str;
}

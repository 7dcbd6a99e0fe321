//! Storage traits for structured articles and the gap report.
//!
//! The storage layer is split into focused traits:
//! - `ArticleStore`: per-article structured records, keyed by article id
//! - `ReportSink`: the aggregated gap report, replaced wholesale each run

use async_trait::async_trait;

use crate::error::Result;
use crate::types::article::StructuredArticle;
use crate::types::report::GapReportRow;

/// Store for per-article structured records.
///
/// Records are individually addressable by article id with
/// update-in-place semantics; a record is always written as a whole
/// document, never partially.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Insert or overwrite the record for an article id.
    async fn upsert(&self, article: &StructuredArticle) -> Result<()>;

    /// Get the record for an article id.
    async fn get(&self, article_id: &str) -> Result<Option<StructuredArticle>>;

    /// Load every stored record (full corpus scan).
    ///
    /// Unreadable or malformed documents are skipped, not fatal.
    async fn load_corpus(&self) -> Result<Vec<StructuredArticle>>;

    /// Count stored records.
    async fn count(&self) -> Result<usize> {
        Ok(self.load_corpus().await?.len())
    }
}

/// Sink for the aggregated gap report.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Replace the report with the given rows.
    ///
    /// Prior rows are discarded; an empty slice leaves only the header.
    async fn replace_report(&self, rows: &[GapReportRow]) -> Result<()>;
}

//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::store::{ArticleStore, ReportSink};
use crate::types::article::StructuredArticle;
use crate::types::report::GapReportRow;

/// In-memory store for structured articles and the gap report.
///
/// Useful for tests and development. Data is lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    articles: RwLock<IndexMap<String, StructuredArticle>>,
    report: RwLock<Vec<GapReportRow>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored articles.
    pub fn article_count(&self) -> usize {
        self.articles.read().unwrap().len()
    }

    /// Snapshot of the current report rows.
    pub fn report_rows(&self) -> Vec<GapReportRow> {
        self.report.read().unwrap().clone()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.articles.write().unwrap().clear();
        self.report.write().unwrap().clear();
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn upsert(&self, article: &StructuredArticle) -> Result<()> {
        self.articles
            .write()
            .unwrap()
            .insert(article.article_id.clone(), article.clone());
        Ok(())
    }

    async fn get(&self, article_id: &str) -> Result<Option<StructuredArticle>> {
        Ok(self.articles.read().unwrap().get(article_id).cloned())
    }

    async fn load_corpus(&self) -> Result<Vec<StructuredArticle>> {
        Ok(self.articles.read().unwrap().values().cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.articles.read().unwrap().len())
    }
}

#[async_trait]
impl ReportSink for MemoryStore {
    async fn replace_report(&self, rows: &[GapReportRow]) -> Result<()> {
        *self.report.write().unwrap() = rows.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::article::{Category, ContentType, Severity};
    use crate::types::report::Priority;

    fn article(id: &str) -> StructuredArticle {
        StructuredArticle {
            article_id: id.to_string(),
            title: "T".into(),
            category: Category::General,
            content_type: ContentType::Guide,
            topics: vec!["onboarding".into()],
            raw_gaps: vec![],
            gap_severity: Severity::Low,
            content_hash: String::new(),
            word_count: 1,
            has_screenshots: false,
            url: "https://x".into(),
        }
    }

    #[tokio::test]
    async fn test_upsert_overwrites_by_id() {
        let store = MemoryStore::new();

        store.upsert(&article("KB-001")).await.unwrap();
        let mut updated = article("KB-001");
        updated.title = "Updated".into();
        store.upsert(&updated).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(
            store.get("KB-001").await.unwrap().unwrap().title,
            "Updated"
        );
    }

    #[tokio::test]
    async fn test_report_replace_on_write() {
        let store = MemoryStore::new();

        let row = GapReportRow {
            gap_id: "GAP-001".into(),
            category: Category::Api,
            description: "d".into(),
            priority: Priority::Low,
            suggested_title: "t".into(),
            rationale: "r".into(),
        };

        store.replace_report(&[row.clone(), row]).await.unwrap();
        assert_eq!(store.report_rows().len(), 2);

        store.replace_report(&[]).await.unwrap();
        assert!(store.report_rows().is_empty());
    }
}

//! Directory-of-JSON-documents article store.
//!
//! One pretty-printed JSON document per article id. Writes go through
//! a temp file and a rename, so a record is always on disk whole or
//! not at all.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;
use crate::traits::store::ArticleStore;
use crate::types::article::StructuredArticle;

/// File-backed store keyed by article id.
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Open a store at `dir`, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, article_id: &str) -> PathBuf {
        self.dir.join(format!("{article_id}.json"))
    }
}

#[async_trait]
impl ArticleStore for JsonDirStore {
    async fn upsert(&self, article: &StructuredArticle) -> Result<()> {
        // None on first write, Some(changed) when replacing a record
        let content_changed = match self.get(&article.article_id).await {
            Ok(Some(existing)) => Some(existing.content_hash != article.content_hash),
            _ => None,
        };

        let json = serde_json::to_vec_pretty(article)?;

        let path = self.document_path(&article.article_id);
        let tmp_path = self.dir.join(format!("{}.json.tmp", article.article_id));
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        debug!(
            article_id = %article.article_id,
            content_changed = ?content_changed,
            "structured record written"
        );
        Ok(())
    }

    async fn get(&self, article_id: &str) -> Result<Option<StructuredArticle>> {
        let path = self.document_path(article_id);

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Full corpus scan over `*.json` documents.
    ///
    /// Unreadable or malformed documents are skipped with a warning so
    /// one bad file cannot block aggregation.
    async fn load_corpus(&self) -> Result<Vec<StructuredArticle>> {
        let mut articles = Vec::new();

        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(articles),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match tokio::fs::read(&path).await {
                Ok(bytes) => match serde_json::from_slice::<StructuredArticle>(&bytes) {
                    Ok(article) => articles.push(article),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "skipping malformed record");
                    }
                },
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable record");
                }
            }
        }

        // read_dir order is platform-dependent; stabilize the corpus
        articles.sort_by(|a, b| a.article_id.cmp(&b.article_id));

        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::article::{Category, ContentType, Severity};

    fn article(id: &str) -> StructuredArticle {
        StructuredArticle {
            article_id: id.to_string(),
            title: "T".into(),
            category: Category::Api,
            content_type: ContentType::Guide,
            topics: vec!["api".into()],
            raw_gaps: vec!["explain limitations".into()],
            gap_severity: Severity::Medium,
            content_hash: String::new(),
            word_count: 10,
            has_screenshots: false,
            url: format!("https://help.example.com/article/{id}"),
        }
    }

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("audit-store-{}-{}", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_upsert_get_roundtrip() {
        let dir = temp_dir("roundtrip");
        let store = JsonDirStore::open(&dir).await.unwrap();

        let original = article("KB-001");
        store.upsert(&original).await.unwrap();

        let loaded = store.get("KB-001").await.unwrap().unwrap();
        assert_eq!(loaded, original);
        assert!(store.get("KB-999").await.unwrap().is_none());

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_upsert_overwrites_whole_document() {
        let dir = temp_dir("overwrite");
        let store = JsonDirStore::open(&dir).await.unwrap();

        store.upsert(&article("KB-001")).await.unwrap();
        let mut updated = article("KB-001");
        updated.title = "Updated".into();
        store.upsert(&updated).await.unwrap();

        let corpus = store.load_corpus().await.unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus[0].title, "Updated");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_corpus_scan_skips_malformed_documents() {
        let dir = temp_dir("malformed");
        let store = JsonDirStore::open(&dir).await.unwrap();

        store.upsert(&article("KB-001")).await.unwrap();
        store.upsert(&article("KB-002")).await.unwrap();
        tokio::fs::write(dir.join("KB-003.json"), b"{ not json")
            .await
            .unwrap();
        tokio::fs::write(dir.join("notes.txt"), b"ignored")
            .await
            .unwrap();

        let corpus = store.load_corpus().await.unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].article_id, "KB-001");
        assert_eq!(corpus[1].article_id, "KB-002");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_directory_yields_empty_corpus() {
        let dir = temp_dir("empty");
        let store = JsonDirStore::open(&dir).await.unwrap();

        assert!(store.load_corpus().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}

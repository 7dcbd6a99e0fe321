//! HTTP scraper for a help-center site.
//!
//! Two responsibilities, nothing else:
//! 1. Discover article URLs via the site's collection pages
//! 2. Fetch one article at a time into a [`RawArticle`]

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::scrape::html;
use crate::scrape::text::clean_text;
use crate::traits::source::ArticleSource;
use crate::types::article::RawArticle;
use crate::types::config::ScrapeConfig;

/// URL path marker for collection index pages.
const COLLECTION_PATTERN: &str = "/collection/";

/// URL path marker for article pages.
const ARTICLE_PATTERN: &str = "/article/";

/// Scraper for a single help-center site.
pub struct HelpCenterScraper {
    client: reqwest::Client,
    config: ScrapeConfig,
}

impl HelpCenterScraper {
    /// Create a scraper for the configured site.
    pub fn new(config: ScrapeConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self { client, config })
    }

    /// Base URL of the site.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch a page and return its HTML body.
    async fn get_html(&self, url: &str) -> FetchResult<String> {
        debug!(url = %url, "HTTP fetch starting");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                FetchError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))
    }

    /// Courtesy delay between requests. Pacing only, not a retry backoff.
    async fn pace(&self) {
        if self.config.request_delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.request_delay_ms))
                .await;
        }
    }
}

#[async_trait]
impl ArticleSource for HelpCenterScraper {
    /// Two-level discovery: root page → collection pages → article URLs.
    ///
    /// A collection that fails to fetch is skipped; discovery continues
    /// with the remaining collections.
    async fn discover(&self) -> FetchResult<Vec<String>> {
        let base_url =
            Url::parse(&self.config.base_url).map_err(|_| FetchError::InvalidUrl {
                url: self.config.base_url.clone(),
            })?;

        info!(url = %base_url, "discovering help-center collections");
        let homepage = self.get_html(base_url.as_str()).await?;

        let collection_links: BTreeSet<String> = html::extract_links(&base_url, &homepage)
            .into_iter()
            .filter(|href| href.contains(COLLECTION_PATTERN))
            .collect();

        info!(collections = collection_links.len(), "collections found");

        let mut article_links: BTreeSet<String> = BTreeSet::new();

        for collection_url in &collection_links {
            self.pace().await;

            let collection_html = match self.get_html(collection_url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(url = %collection_url, error = %e, "skipping collection");
                    continue;
                }
            };

            let before = article_links.len();
            article_links.extend(
                html::extract_links(&base_url, &collection_html)
                    .into_iter()
                    .filter(|href| href.contains(ARTICLE_PATTERN)),
            );
            debug!(
                url = %collection_url,
                new_articles = article_links.len() - before,
                "collection crawled"
            );
        }

        info!(articles = article_links.len(), "article URLs discovered");
        Ok(article_links.into_iter().collect())
    }

    /// Fetch one article and extract its title, body, and image presence.
    async fn fetch(&self, url: &str, article_id: &str) -> FetchResult<RawArticle> {
        self.pace().await;

        let page = self.get_html(url).await?;

        let title = html::extract_heading(&page).unwrap_or_else(|| "Untitled".to_string());
        let body_text = clean_text(&html::extract_paragraphs(&page).join(" "));
        let has_images = html::has_images(&page);

        debug!(
            article_id = %article_id,
            url = %url,
            body_chars = body_text.len(),
            has_images = has_images,
            "article fetched"
        );

        Ok(RawArticle::new(article_id, url, title, body_text)
            .with_images(has_images)
            .with_fetched_at(Utc::now()))
    }

    fn name(&self) -> &str {
        "help-center-http"
    }
}

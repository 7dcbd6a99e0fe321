//! Orchestration of a full audit run.
//!
//! Strictly sequential: discover, then fetch → infer → persist one
//! article at a time, then aggregate the stored corpus into the gap
//! report. Per-article faults are isolated; nothing short of a corpus
//! load or report write error ends the run early.

use tracing::{info, warn};

use crate::error::Result;
use crate::gaps::GapAnalyzer;
use crate::inference::InferenceEngine;
use crate::traits::ai::{Classifier, QuestionAnswerer, TextGenerator};
use crate::traits::source::ArticleSource;
use crate::traits::store::{ArticleStore, ReportSink};
use crate::types::article::RawArticle;
use crate::types::config::RunConfig;

/// Counters for one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Article URLs discovered on the site
    pub discovered: usize,

    /// Articles scheduled after applying the per-run cap
    pub scheduled: usize,

    /// Articles structured and persisted (placeholders included)
    pub processed: usize,

    /// Articles whose fetch failed, persisted as placeholders
    pub unavailable: usize,

    /// Articles whose persistence failed
    pub failed: usize,

    /// Rows in the final gap report
    pub report_rows: usize,
}

/// Run a full audit: discovery, per-article processing, aggregation.
pub async fn run_audit<A, C, Q, G, S, K>(
    source: &A,
    engine: &InferenceEngine<C, Q>,
    analyzer: &GapAnalyzer<G>,
    store: &S,
    sink: &K,
    config: &RunConfig,
) -> Result<RunSummary>
where
    A: ArticleSource,
    C: Classifier,
    Q: QuestionAnswerer,
    G: TextGenerator,
    S: ArticleStore,
    K: ReportSink,
{
    info!(source = source.name(), "starting knowledge-base audit run");

    let urls = match source.discover().await {
        Ok(urls) => urls,
        Err(e) => {
            warn!(error = %e, "discovery failed, no articles this run");
            Vec::new()
        }
    };

    let discovered = urls.len();
    let scheduled: Vec<String> = urls.into_iter().take(config.max_articles).collect();
    info!(
        discovered = discovered,
        scheduled = scheduled.len(),
        "articles scheduled this run"
    );

    let mut summary = RunSummary {
        discovered,
        scheduled: scheduled.len(),
        ..Default::default()
    };

    for (idx, url) in scheduled.iter().enumerate() {
        let article_id = format!("KB-{:03}", idx + 1);

        if idx > 0 && config.article_delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(config.article_delay_ms)).await;
        }

        let raw = match source.fetch(url, &article_id).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    article_id = %article_id,
                    url = %url,
                    error = %e,
                    "article unavailable, substituting placeholder"
                );
                summary.unavailable += 1;
                RawArticle::unavailable(&article_id, url)
            }
        };

        let structured = engine.infer(&raw).await;

        match store.upsert(&structured).await {
            Ok(()) => {
                summary.processed += 1;
                info!(
                    article_id = %article_id,
                    status = "processed",
                    category = %structured.category,
                    gaps = structured.raw_gaps.len(),
                    severity = %structured.gap_severity,
                    "article processed"
                );
            }
            Err(e) => {
                summary.failed += 1;
                warn!(
                    article_id = %article_id,
                    status = "failed",
                    error = %e,
                    "article persistence failed, continuing"
                );
            }
        }
    }

    info!(
        processed = summary.processed,
        unavailable = summary.unavailable,
        failed = summary.failed,
        "article processing complete"
    );

    let corpus = store.load_corpus().await?;
    let rows = analyzer.analyze(&corpus).await;
    sink.replace_report(&rows).await?;

    summary.report_rows = rows.len();
    info!(report_rows = rows.len(), "audit run complete");

    Ok(summary)
}

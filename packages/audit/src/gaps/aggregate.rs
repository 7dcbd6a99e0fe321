//! Corpus-wide gap aggregation and ranking.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info};

use crate::gaps::rationale;
use crate::traits::ai::TextGenerator;
use crate::types::article::{Category, Severity, StructuredArticle};
use crate::types::config::AnalysisConfig;
use crate::types::report::{CanonicalGap, GapOccurrence, GapReportRow, Priority};

/// A canonical gap must appear in at least this many distinct articles
/// to be considered systemic.
pub const SYSTEMIC_THRESHOLD: usize = 2;

/// Occurrence ratio at or above which a gap is High priority.
pub const HIGH_RATIO: f32 = 0.4;

/// Occurrence ratio at or above which a gap is Medium priority.
pub const MEDIUM_RATIO: f32 = 0.2;

/// A systemic gap ranked for the report.
#[derive(Debug, Clone)]
pub struct RankedGap {
    /// The canonical gap
    pub gap: CanonicalGap,

    /// Total (article, raw gap) occurrences
    pub occurrence_count: usize,

    /// Distinct contributing articles
    pub article_count: usize,

    /// Mode of the contributing articles' categories
    pub category: Category,

    /// Derived priority tier
    pub priority: Priority,
}

#[derive(Default)]
struct Bucket {
    occurrences: Vec<GapOccurrence>,
    articles: IndexSet<String>,
}

/// Canonicalize and rank the systemic gaps of a corpus.
///
/// Buckets keep first-seen order; the descending-count sort is stable,
/// so equal-count gaps rank in the order the corpus first produced
/// them. Gaps below the systemic threshold are dropped; an empty
/// result is a valid outcome, not a fault.
pub fn rank_gaps(corpus: &[StructuredArticle], top_n: usize) -> Vec<RankedGap> {
    if corpus.is_empty() {
        return Vec::new();
    }

    let total_articles = corpus.len();
    let mut buckets: IndexMap<CanonicalGap, Bucket> = IndexMap::new();

    for article in corpus {
        for raw_gap in &article.raw_gaps {
            let canonical = CanonicalGap::canonicalize(raw_gap);
            let bucket = buckets.entry(canonical).or_default();
            bucket.occurrences.push(GapOccurrence {
                category: article.category,
                severity: article.gap_severity,
            });
            bucket.articles.insert(article.article_id.clone());
        }
    }

    let before = buckets.len();
    buckets.retain(|_, bucket| bucket.articles.len() >= SYSTEMIC_THRESHOLD);
    debug!(
        systemic = buckets.len(),
        dropped = before - buckets.len(),
        "systemic gap filter applied"
    );

    let mut ranked: Vec<(CanonicalGap, Bucket)> = buckets.into_iter().collect();
    ranked.sort_by(|a, b| b.1.occurrences.len().cmp(&a.1.occurrences.len()));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(gap, bucket)| RankedGap {
            gap,
            occurrence_count: bucket.occurrences.len(),
            article_count: bucket.articles.len(),
            category: dominant_category(&bucket.occurrences),
            priority: calculate_priority(&bucket.occurrences, total_articles),
        })
        .collect()
}

/// Aggregate a corpus into final report rows with baseline rationales.
///
/// Pure and deterministic: re-running on an unchanged corpus produces
/// byte-identical rows.
pub fn aggregate(corpus: &[StructuredArticle], top_n: usize) -> Vec<GapReportRow> {
    let total_articles = corpus.len();

    rank_gaps(corpus, top_n)
        .into_iter()
        .enumerate()
        .map(|(idx, ranked)| {
            build_row(
                idx,
                &ranked,
                rationale::baseline(ranked.gap, ranked.occurrence_count, total_articles),
            )
        })
        .collect()
}

/// Priority policy, applied uniformly (see DESIGN.md):
/// High when ratio >= 0.4 or at least 3 High-severity occurrences;
/// Medium when ratio >= 0.2 or at least 2 Medium-severity occurrences.
pub fn calculate_priority(occurrences: &[GapOccurrence], total_articles: usize) -> Priority {
    let ratio = occurrences.len() as f32 / total_articles.max(1) as f32;

    let high_severity = occurrences
        .iter()
        .filter(|o| o.severity == Severity::High)
        .count();
    let medium_severity = occurrences
        .iter()
        .filter(|o| o.severity == Severity::Medium)
        .count();

    if ratio >= HIGH_RATIO || high_severity >= 3 {
        return Priority::High;
    }
    if ratio >= MEDIUM_RATIO || medium_severity >= 2 {
        return Priority::Medium;
    }
    Priority::Low
}

/// Most frequent category among occurrences, ties broken by
/// first-encountered (standard mode semantics).
fn dominant_category(occurrences: &[GapOccurrence]) -> Category {
    let mut counts: IndexMap<Category, usize> = IndexMap::new();
    for occurrence in occurrences {
        *counts.entry(occurrence.category).or_insert(0) += 1;
    }

    let mut dominant = Category::General;
    let mut best = 0usize;
    for (category, count) in counts {
        if count > best {
            dominant = category;
            best = count;
        }
    }
    dominant
}

fn build_row(idx: usize, ranked: &RankedGap, rationale: String) -> GapReportRow {
    GapReportRow {
        gap_id: format!("GAP-{:03}", idx + 1),
        category: ranked.category,
        description: ranked.gap.label().to_string(),
        priority: ranked.priority,
        suggested_title: ranked.gap.suggested_title(),
        rationale,
    }
}

/// Gap analysis over a corpus, with optional rationale generation.
///
/// Wraps the pure [`aggregate`] path; the generator only ever rewrites
/// rationale text, never the ranking.
pub struct GapAnalyzer<G> {
    generator: G,
    config: AnalysisConfig,
}

impl<G: TextGenerator> GapAnalyzer<G> {
    /// Create an analyzer over the given generator.
    pub fn new(generator: G, config: AnalysisConfig) -> Self {
        Self { generator, config }
    }

    /// Produce the final ranked report for a corpus.
    pub async fn analyze(&self, corpus: &[StructuredArticle]) -> Vec<GapReportRow> {
        let total_articles = corpus.len();
        let ranked = rank_gaps(corpus, self.config.top_n);

        info!(
            articles = total_articles,
            systemic_gaps = ranked.len(),
            "gap aggregation complete"
        );

        let mut rows = Vec::with_capacity(ranked.len());
        for (idx, gap) in ranked.iter().enumerate() {
            let rationale = rationale::compose(
                &self.generator,
                gap.category,
                gap.gap,
                gap.occurrence_count,
                total_articles,
            )
            .await;

            rows.push(build_row(idx, gap, rationale.into_inner()));
        }

        rows
    }
}

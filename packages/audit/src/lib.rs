//! Help-Center Knowledge-Base Audit Library
//!
//! Audits a help center's knowledge base: discovers article URLs,
//! scrapes their text, infers semantic metadata (category, topics,
//! content type, documentation gaps) via heuristics and external
//! inference services, persists structured records, and aggregates
//! gaps across the corpus into a prioritized remediation report.
//!
//! # Design
//!
//! - Strictly sequential: one article at a time, a courtesy delay
//!   between network operations, no parallel fan-out
//! - External services behind narrow traits, each with a null and a
//!   mock implementation, so the core is testable offline
//! - Service failures degrade to defaults and stay visible through
//!   [`inference::ServiceOutcome`]; they never abort a run
//! - Canonicalization is total: every raw gap phrase maps to a
//!   canonical category, the catch-all included
//!
//! # Usage
//!
//! ```rust,ignore
//! use audit::gaps::GapAnalyzer;
//! use audit::inference::InferenceEngine;
//! use audit::pipeline::run_audit;
//! use audit::scrape::HelpCenterScraper;
//! use audit::stores::{CsvReportSink, JsonDirStore};
//! use audit::traits::NullGenerator;
//! use audit::types::{AnalysisConfig, InferenceConfig, RunConfig, ScrapeConfig};
//!
//! let scraper = HelpCenterScraper::new(ScrapeConfig::new("https://help.example.com"))?;
//! let engine = InferenceEngine::new(classifier, answerer, InferenceConfig::default());
//! let analyzer = GapAnalyzer::new(NullGenerator, AnalysisConfig::default());
//! let store = JsonDirStore::open("data/processed").await?;
//! let sink = CsvReportSink::new("data/gap_analysis.csv");
//!
//! let summary = run_audit(&scraper, &engine, &analyzer, &store, &sink, &RunConfig::default()).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (services, source, storage)
//! - [`types`] - Domain types and configuration
//! - [`scrape`] - Help-center discovery and article fetching
//! - [`inference`] - Per-article semantic inference
//! - [`gaps`] - Gap canonicalization, aggregation, and rationale
//! - [`stores`] - Storage implementations
//! - [`pipeline`] - Sequential run orchestration
//! - [`testing`] - Mock implementations for tests

pub mod error;
pub mod gaps;
pub mod inference;
pub mod pipeline;
pub mod scrape;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "huggingface")]
pub mod ai;

// Re-export core types at crate root
pub use error::{AuditError, FetchError, InferenceError};
pub use traits::{
    ai::{Answer, Classifier, NullAnswerer, NullClassifier, NullGenerator, QuestionAnswerer,
        ScoredLabel, TextGenerator},
    source::ArticleSource,
    store::{ArticleStore, ReportSink},
};
pub use types::{
    article::{Category, ContentType, RawArticle, Severity, StructuredArticle},
    config::{AnalysisConfig, InferenceConfig, RunConfig, ScrapeConfig},
    report::{CanonicalGap, GapOccurrence, GapReportRow, Priority},
};

// Re-export the analytical core
pub use gaps::{aggregate, calculate_priority, rank_gaps, GapAnalyzer, RankedGap};

// Re-export pipeline entry points
pub use inference::{InferenceEngine, ServiceOutcome};
pub use pipeline::{run_audit, RunSummary};
pub use scrape::{clean_text, HelpCenterScraper};

// Re-export stores
pub use stores::{CsvReportSink, JsonDirStore, MemoryStore};

#[cfg(feature = "huggingface")]
pub use ai::HuggingFace;

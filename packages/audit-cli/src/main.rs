// Main entry point for the knowledge-base audit runner

mod config;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audit::gaps::GapAnalyzer;
use audit::inference::InferenceEngine;
use audit::pipeline::run_audit;
use audit::scrape::HelpCenterScraper;
use audit::stores::{CsvReportSink, JsonDirStore};
use audit::types::{AnalysisConfig, InferenceConfig, RunConfig, ScrapeConfig};
use audit::HuggingFace;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,audit=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting knowledge-base audit");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(site = %config.base_url, "Configuration loaded");

    // Inference backend
    let hf = hf_client::HfClient::new(config.hf_api_token.clone());
    let mut backend = HuggingFace::new(hf);
    if let Some(model) = &config.generation_model {
        tracing::info!(model = %model, "Rationale generation enabled");
        backend = backend.with_generation_model(model.clone());
    }

    // Components
    let scraper = HelpCenterScraper::new(ScrapeConfig::new(config.base_url.clone()))
        .context("Failed to build scraper")?;

    let engine = InferenceEngine::new(
        backend.clone(),
        backend.clone(),
        InferenceConfig::default().with_confidence_threshold(config.confidence_threshold),
    );

    let analyzer = GapAnalyzer::new(
        backend,
        AnalysisConfig::default().with_top_n(config.top_n),
    );

    let store = JsonDirStore::open(&config.data_dir)
        .await
        .context("Failed to open article store")?;
    let sink = CsvReportSink::new(&config.report_path);

    // Run one full audit
    let run_config = RunConfig::default().with_max_articles(config.max_articles);
    let summary = run_audit(&scraper, &engine, &analyzer, &store, &sink, &run_config)
        .await
        .context("Audit run failed")?;

    tracing::info!(
        discovered = summary.discovered,
        processed = summary.processed,
        unavailable = summary.unavailable,
        failed = summary.failed,
        report_rows = summary.report_rows,
        "Knowledge-base audit completed"
    );

    Ok(())
}

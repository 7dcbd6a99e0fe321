use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_api_token: String,
    pub base_url: String,
    pub data_dir: String,
    pub report_path: String,
    pub max_articles: usize,
    pub confidence_threshold: f32,
    pub top_n: usize,
    pub generation_model: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            hf_api_token: env::var("HF_API_TOKEN")
                .context("HF_API_TOKEN must be set")?,
            base_url: env::var("KB_BASE_URL")
                .context("KB_BASE_URL must be set")?,
            data_dir: env::var("KB_DATA_DIR")
                .unwrap_or_else(|_| "data/processed".to_string()),
            report_path: env::var("KB_REPORT_PATH")
                .unwrap_or_else(|_| "data/gap_analysis.csv".to_string()),
            max_articles: env::var("MAX_ARTICLES_PER_RUN")
                .unwrap_or_else(|_| "25".to_string())
                .parse()
                .context("MAX_ARTICLES_PER_RUN must be a valid number")?,
            confidence_threshold: env::var("CONFIDENCE_THRESHOLD")
                .unwrap_or_else(|_| "0.25".to_string())
                .parse()
                .context("CONFIDENCE_THRESHOLD must be a valid number")?,
            top_n: env::var("TOP_N_GAPS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("TOP_N_GAPS must be a valid number")?,
            generation_model: env::var("HF_GENERATION_MODEL").ok(),
        })
    }
}

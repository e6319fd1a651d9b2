use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::matching::scoring::ScoreWeights;

/// Application configuration loaded from environment variables.
/// Azure Text Analytics credentials are required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub azure_text_endpoint: String,
    pub azure_text_key: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub opportunity_dir: PathBuf,
    /// Minimum final score for an opportunity to appear in match results (inclusive).
    pub match_threshold: f64,
    /// Sequence-similarity ratio above which two skill strings fuzzy-match.
    pub fuzzy_cutoff: f64,
    pub score_weights: ScoreWeights,
    pub embedding_dimension: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            azure_text_endpoint: require_env("AZURE_TEXT_ANALYTICS_ENDPOINT")?,
            azure_text_key: require_env("AZURE_TEXT_ANALYTICS_KEY")?,
            ollama_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            opportunity_dir: std::env::var("OPPORTUNITY_DIR")
                .unwrap_or_else(|_| "data/json/opportunities".to_string())
                .into(),
            match_threshold: parse_env("MATCH_THRESHOLD", 0.60)?,
            fuzzy_cutoff: parse_env("FUZZY_MATCH_CUTOFF", 0.8)?,
            // The 0.6/0.3/0.1 split has no documented tuning basis, so it stays
            // env-adjustable rather than baked into the scorer.
            score_weights: ScoreWeights {
                overlap: parse_env("WEIGHT_OVERLAP", ScoreWeights::default().overlap)?,
                fuzzy: parse_env("WEIGHT_FUZZY", ScoreWeights::default().fuzzy)?,
                cert: parse_env("WEIGHT_CERT", ScoreWeights::default().cert)?,
            },
            embedding_dimension: parse_env("EMBEDDING_DIMENSION", 256)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}

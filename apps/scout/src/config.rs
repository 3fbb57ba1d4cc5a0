use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::sourcing::batch::DEFAULT_FIT_SCORE_THRESHOLD;

/// Application configuration loaded from environment variables.
///
/// Every API key is optional: a missing key disables that integration with a
/// warning at startup. Only malformed numeric values are errors.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub search_engine_id: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub smartlead_api_key: Option<String>,
    pub email_from: String,
    pub port: u16,
    pub rust_log: String,
    pub fit_score_threshold: f64,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google_api_key: None,
            search_engine_id: None,
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            smartlead_api_key: None,
            email_from: String::new(),
            port: 8080,
            rust_log: "info".to_string(),
            fit_score_threshold: DEFAULT_FIT_SCORE_THRESHOLD,
            output_dir: PathBuf::from("./documents"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        Ok(Config {
            google_api_key: get("GOOGLE_API_KEY"),
            search_engine_id: get("SEARCH_ENGINE_ID").or_else(|| get("GOOGLE_SEARCH_ENGINE_ID")),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            smartlead_api_key: get("SMARTLEAD_API_KEY"),
            email_from: get("EMAIL_FROM")
                .or_else(|| get("EMAIL_ID"))
                .unwrap_or_default(),
            port: match get("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
            fit_score_threshold: match get("FIT_SCORE_THRESHOLD") {
                Some(raw) => raw
                    .parse::<f64>()
                    .context("FIT_SCORE_THRESHOLD must be a number")?,
                None => defaults.fit_score_threshold,
            },
            output_dir: get("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        })
    }
}

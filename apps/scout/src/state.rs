use std::sync::Arc;

use tracing::warn;

use crate::config::Config;
use crate::evaluation::{FitScorer, RubricFitScorer, SmartFitScorer};
use crate::llm_client::LlmClient;
use crate::outreach::{Mailer, SmartleadMailer};
use crate::search::{GoogleSearchClient, SearchProvider};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    pub search: Arc<dyn SearchProvider>,
    /// Default scorer for the pipeline. Context-aware, LLM JSON based.
    pub fit_scorer: Arc<dyn FitScorer>,
    /// Free-text rubric scorer used by the batch runner.
    pub rubric_scorer: Arc<dyn FitScorer>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Wires the production clients from config, warning about every
    /// integration that is disabled for lack of a key.
    pub fn from_config(config: Config) -> Self {
        let llm = LlmClient::new(
            config.openai_api_key.clone(),
            &config.openai_base_url,
            &config.openai_model,
        );
        if !llm.is_configured() {
            warn!("OPENAI_API_KEY not set: every evaluation will use the neutral fallback score");
        }

        let search = GoogleSearchClient::new(
            config.google_api_key.clone(),
            config.search_engine_id.clone(),
        );
        if !search.is_configured() {
            warn!("GOOGLE_API_KEY or SEARCH_ENGINE_ID not set: searches will return no results");
        }

        if config.smartlead_api_key.is_none() {
            warn!("SMARTLEAD_API_KEY not set: outreach emails will not be sent");
        }
        let mailer = SmartleadMailer::new(
            config.smartlead_api_key.clone(),
            config.email_from.clone(),
        );

        Self {
            fit_scorer: Arc::new(SmartFitScorer::new(llm.clone())),
            rubric_scorer: Arc::new(RubricFitScorer::new(llm.clone())),
            search: Arc::new(search),
            mailer: Arc::new(mailer),
            llm,
            config,
        }
    }
}

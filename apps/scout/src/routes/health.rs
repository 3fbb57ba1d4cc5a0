use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus which outbound integrations are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "scout",
        "integrations": {
            "search": state.config.google_api_key.is_some() && state.config.search_engine_id.is_some(),
            "llm": state.llm.is_configured(),
            "llm_model": state.llm.model(),
            "mail": state.config.smartlead_api_key.is_some(),
        }
    }))
}

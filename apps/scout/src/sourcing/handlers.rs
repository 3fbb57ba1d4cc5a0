//! Axum route handlers for the Sourcing API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::{analyze_job, detect_context, HiringContext, JobAnalysis};
use crate::errors::AppError;
use crate::evaluation::Assessment;
use crate::models::{CandidateRecord, JobPosting};
use crate::outreach::{draft_outreach_message, EmailResult};
use crate::query::{generate_queries, SearchQuery, DEFAULT_MAX_QUERIES};
use crate::sourcing::pipeline::{search_candidates, SearchReport, DEFAULT_NUM_CANDIDATES};
use crate::state::AppState;

/// Range of the UI slider; API requests are clamped to it.
pub const MIN_CANDIDATES: usize = 3;
pub const MAX_CANDIDATES: usize = 15;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub job_analysis: JobAnalysis,
    pub hiring_context: HiringContext,
}

#[derive(Debug, Deserialize)]
pub struct QueriesRequest {
    pub job_description: String,
    pub max_queries: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QueriesResponse {
    pub job_analysis: JobAnalysis,
    pub queries: Vec<SearchQuery>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub job_description: String,
    pub num_candidates: Option<usize>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerBackend {
    #[default]
    Smart,
    Rubric,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub job_description: String,
    /// Free text, a search hit (`title` + `snippet`), or any candidate object.
    pub candidate: Value,
    #[serde(default)]
    pub scorer: ScorerBackend,
}

#[derive(Debug, Deserialize)]
pub struct OutreachRequest {
    pub candidate: CandidateRecord,
    pub job: JobPosting,
    #[serde(default)]
    pub send: bool,
}

#[derive(Debug, Serialize)]
pub struct OutreachResponse {
    pub message: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_result: Option<EmailResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    require_job_description(&request.job_description)?;

    Ok(Json(AnalyzeResponse {
        job_analysis: analyze_job(&request.job_description),
        hiring_context: detect_context(&request.job_description),
    }))
}

/// POST /api/v1/queries
///
/// Classification plus the generated search strings. No outbound calls.
pub async fn handle_queries(
    Json(request): Json<QueriesRequest>,
) -> Result<Json<QueriesResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let job_analysis = analyze_job(&request.job_description);
    let queries = generate_queries(
        &job_analysis,
        &request.job_description,
        request.max_queries.unwrap_or(DEFAULT_MAX_QUERIES),
    );

    Ok(Json(QueriesResponse {
        job_analysis,
        queries,
    }))
}

/// POST /api/v1/search
///
/// Full sourcing run. Search or LLM outages degrade to empty results and
/// fallback scores rather than errors.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchReport>, AppError> {
    require_job_description(&request.job_description)?;

    let num_candidates = request
        .num_candidates
        .unwrap_or(DEFAULT_NUM_CANDIDATES)
        .clamp(MIN_CANDIDATES, MAX_CANDIDATES);

    let report = search_candidates(
        state.search.as_ref(),
        state.fit_scorer.as_ref(),
        &request.job_description,
        num_candidates,
    )
    .await;

    Ok(Json(report))
}

/// POST /api/v1/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<Assessment>, AppError> {
    require_job_description(&request.job_description)?;

    let candidate = candidate_text(&request.candidate);
    if candidate.trim().is_empty() {
        return Err(AppError::Validation("candidate cannot be empty".to_string()));
    }

    let scorer = match request.scorer {
        ScorerBackend::Smart => state.fit_scorer.as_ref(),
        ScorerBackend::Rubric => state.rubric_scorer.as_ref(),
    };
    let assessment = scorer.evaluate(&candidate, &request.job_description).await;

    Ok(Json(assessment))
}

/// POST /api/v1/outreach
///
/// Drafts a message; sends it only when `send` is true.
pub async fn handle_outreach(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<OutreachResponse>, AppError> {
    require_job_description(&request.job.description)?;

    let message = draft_outreach_message(&state.llm, &request.candidate, &request.job).await;
    let subject = request.job.email_subject();

    let email_result = if request.send {
        let to = request.candidate.email.as_deref().unwrap_or_default();
        Some(state.mailer.send(to, &subject, &message).await)
    } else {
        None
    };

    Ok(Json(OutreachResponse {
        message,
        subject,
        email_result,
    }))
}

fn require_job_description(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn candidate_text(candidate: &Value) -> String {
    match candidate {
        Value::String(text) => text.clone(),
        Value::Object(fields) if fields.contains_key("title") || fields.contains_key("snippet") => {
            let field = |key: &str| fields.get(key).and_then(Value::as_str).unwrap_or_default();
            format!("{} {}", field("title"), field("snippet")).trim().to_string()
        }
        Value::Null => String::new(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_text_variants() {
        assert_eq!(candidate_text(&json!("Jane, SRE")), "Jane, SRE");
        assert_eq!(
            candidate_text(&json!({"title": "Jane - SRE", "snippet": "Austin", "link": "x"})),
            "Jane - SRE Austin"
        );
        assert!(candidate_text(&json!({"name": "Bo"})).contains("\"name\": \"Bo\""));
        assert_eq!(candidate_text(&Value::Null), "");
    }

    #[test]
    fn test_require_job_description() {
        assert!(matches!(
            require_job_description("   "),
            Err(AppError::Validation(_))
        ));
        assert!(require_job_description("SRE").is_ok());
    }
}

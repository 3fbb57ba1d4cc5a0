pub mod health;
pub mod ui;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::sourcing::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Sourcing API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/queries", post(handlers::handle_queries))
        .route("/api/v1/search", post(handlers::handle_search))
        .route("/api/v1/evaluate", post(handlers::handle_evaluate))
        .route("/api/v1/outreach", post(handlers::handle_outreach))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    // Every client is built without keys, so nothing here touches the network.
    fn app() -> Router {
        build_router(AppState::from_config(Config::default()))
    }

    async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const DEVOPS_JD: &str = "Senior DevOps Engineer, San Francisco. Series A startup. \
        Experience with Pulumi, Azure, GCP, Kubernetes, JavaScript. 5+ years experience.";

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["integrations"]["llm"], false);
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_analyze() {
        let (status, body) =
            post_json("/api/v1/analyze", json!({ "job_description": DEVOPS_JD })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job_analysis"]["job_family"], "engineering");
        assert_eq!(body["job_analysis"]["seniority"], "senior");
        assert_eq!(body["hiring_context"]["role_type"], "DevOps Engineer");
    }

    #[tokio::test]
    async fn test_empty_job_description_is_rejected() {
        let (status, body) = post_json("/api/v1/search", json!({ "job_description": "  " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_queries_respects_max() {
        let (status, body) = post_json(
            "/api/v1/queries",
            json!({ "job_description": DEVOPS_JD, "max_queries": 2 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["queries"].as_array().unwrap().len(), 2);
        assert_eq!(body["queries"][0]["strategy"], "primary");
    }

    #[tokio::test]
    async fn test_search_without_keys_is_empty_report() {
        let (status, body) = post_json(
            "/api/v1/search",
            json!({ "job_description": DEVOPS_JD, "num_candidates": 50 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_found"], 0);
        assert_eq!(body["queries"].as_array().unwrap().len(), 3);
        assert_eq!(body["performance_summary"]["total_queries"], 3);
    }

    #[tokio::test]
    async fn test_evaluate_without_key_falls_back() {
        let (status, body) = post_json(
            "/api/v1/evaluate",
            json!({
                "job_description": DEVOPS_JD,
                "candidate": { "title": "Jane Doe - SRE - Acme", "snippet": "Kubernetes" },
                "scorer": "rubric"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fit_score"], 6.0);
        assert_eq!(body["fallback"], true);
        assert_eq!(body["scorer_backend"], "rubric");
    }

    #[tokio::test]
    async fn test_outreach_send_without_key_reports_error() {
        let (status, body) = post_json(
            "/api/v1/outreach",
            json!({
                "candidate": { "name": "Jane Doe", "email": "jane@example.com" },
                "job": { "organization": "Acme", "role": "SRE", "description": "Kubernetes" },
                "send": true
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subject"], "Opportunity: SRE at Acme");
        assert!(body["message"].as_str().unwrap().starts_with("Hi Jane Doe,"));
        assert_eq!(body["email_result"]["status"], "error");
        assert_eq!(body["email_result"]["message"], "SMARTLEAD_API_KEY not set");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = post_json("/api/v1/nope", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

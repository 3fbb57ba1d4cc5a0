//! End-to-end sourcing run: analyze → queries → search → dedup → evaluate → rank.
//!
//! Strictly sequential: one outbound call at a time.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::{analyze_job, detect_context, HiringContext, JobAnalysis};
use crate::evaluation::{Assessment, FitScorer, Recommendation};
use crate::query::{generate_queries, SearchQuery, DEFAULT_MAX_QUERIES};
use crate::search::{
    run_queries, CandidateProfile, PerformanceSummary, QueryPerformance, SearchProvider,
};

pub const DEFAULT_NUM_CANDIDATES: usize = 10;

/// A deduplicated profile with its assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub fit_score: f64,
    pub recommendation: Recommendation,
    pub assessment: Assessment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub job_analysis: JobAnalysis,
    pub hiring_context: HiringContext,
    pub queries: Vec<SearchQuery>,
    /// Top candidates, best first.
    pub candidates: Vec<RankedCandidate>,
    pub query_performance: Vec<QueryPerformance>,
    pub performance_summary: PerformanceSummary,
    /// Unique profiles found before evaluation.
    pub total_found: usize,
    pub elapsed_secs: f64,
}

pub async fn search_candidates(
    search: &dyn SearchProvider,
    scorer: &dyn FitScorer,
    job_description: &str,
    num_candidates: usize,
) -> SearchReport {
    let started = Instant::now();
    info!("Starting candidate search for {} candidates", num_candidates);

    let job_analysis = analyze_job(job_description);
    info!(
        "Analysis complete: {:?} role, {:?} level",
        job_analysis.job_family, job_analysis.seniority
    );

    let queries = generate_queries(&job_analysis, job_description, DEFAULT_MAX_QUERIES);
    info!("Generated {} queries", queries.len());

    let outcome = run_queries(search, &queries, num_candidates).await;
    let total_found = outcome.candidates.len();

    let to_evaluate = (num_candidates * 2).min(total_found);
    let mut ranked = Vec::with_capacity(to_evaluate);
    for (i, profile) in outcome.candidates.into_iter().take(to_evaluate).enumerate() {
        info!("Evaluating candidate {}/{}", i + 1, to_evaluate);
        let assessment = scorer.evaluate(&profile.summary(), job_description).await;
        ranked.push(RankedCandidate {
            profile,
            fit_score: assessment.fit_score,
            recommendation: assessment.recommendation,
            assessment,
        });
    }

    rank(&mut ranked);
    ranked.truncate(num_candidates);

    let elapsed_secs = started.elapsed().as_secs_f64();
    info!(
        "Search completed in {:.2}s, returning {} of {} candidates",
        elapsed_secs,
        ranked.len(),
        total_found
    );

    SearchReport {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        hiring_context: detect_context(job_description),
        job_analysis,
        queries,
        candidates: ranked,
        performance_summary: PerformanceSummary::from_records(&outcome.performance),
        query_performance: outcome.performance,
        total_found,
        elapsed_secs,
    }
}

/// Descending by fit score. Stable, so equal scores keep discovery order.
fn rank(candidates: &mut [RankedCandidate]) {
    candidates.sort_by(|a, b| b.fit_score.total_cmp(&a.fit_score));
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::query::{QueryStrategy, SearchQuery};
use crate::search::{filter_profiles, CandidateProfile, SearchProvider};

const PERFORMANCE_QUERY_CHARS: usize = 80;

/// Result counts for one executed query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPerformance {
    /// First 80 characters, with `...` appended when cut.
    pub query: String,
    pub strategy: QueryStrategy,
    pub total_results: usize,
    pub profile_results: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub total_queries: usize,
    pub avg_profile_results: f64,
    /// Percentage of queries that produced at least one profile.
    pub success_rate: f64,
}

impl PerformanceSummary {
    pub fn from_records(records: &[QueryPerformance]) -> Self {
        if records.is_empty() {
            return Self {
                total_queries: 0,
                avg_profile_results: 0.0,
                success_rate: 0.0,
            };
        }

        let total = records.len() as f64;
        let profiles: usize = records.iter().map(|r| r.profile_results).sum();
        let successes = records.iter().filter(|r| r.profile_results > 0).count();

        Self {
            total_queries: records.len(),
            avg_profile_results: profiles as f64 / total,
            success_rate: successes as f64 / total * 100.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Unique profiles in first-seen order.
    pub candidates: Vec<CandidateProfile>,
    pub performance: Vec<QueryPerformance>,
}

/// Runs every query in order, one at a time, requesting `num_results` each.
/// Profiles are deduplicated by exact URL across the whole run.
pub async fn run_queries(
    provider: &dyn SearchProvider,
    queries: &[SearchQuery],
    num_results: usize,
) -> SearchOutcome {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();
    let mut performance = Vec::with_capacity(queries.len());

    for (i, query) in queries.iter().enumerate() {
        info!(
            "Executing query {}/{} ({})",
            i + 1,
            queries.len(),
            query.strategy.as_str()
        );

        let items = provider.search(&query.query, num_results).await;
        let profiles = filter_profiles(&items);

        info!(
            "Query returned {} results, {} profiles",
            items.len(),
            profiles.len()
        );

        performance.push(QueryPerformance {
            query: truncate_query(&query.query),
            strategy: query.strategy,
            total_results: items.len(),
            profile_results: profiles.len(),
        });

        for profile in profiles {
            if seen.insert(profile.link.clone()) {
                candidates.push(profile);
            }
        }
    }

    info!("Found {} unique profiles after deduplication", candidates.len());

    SearchOutcome {
        candidates,
        performance,
    }
}

fn truncate_query(query: &str) -> String {
    if query.chars().count() > PERFORMANCE_QUERY_CHARS {
        let head: String = query.chars().take(PERFORMANCE_QUERY_CHARS).collect();
        format!("{head}...")
    } else {
        query.to_string()
    }
}

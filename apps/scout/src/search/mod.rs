//! Search Orchestrator: runs generated queries through a `SearchProvider`,
//! keeps public-profile URLs, and dedups them across one run.
//!
//! `AppState` holds an `Arc<dyn SearchProvider>`; tests swap in a fake.

pub mod google;
pub mod orchestrator;
pub mod profile;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use google::GoogleSearchClient;
pub use orchestrator::{run_queries, PerformanceSummary, QueryPerformance};

/// URL substring that identifies a public profile page.
pub const PROFILE_URL_MARKER: &str = "linkedin.com/in/";
pub const PROFILE_SOURCE: &str = "linkedin";

/// One raw search hit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// A search hit that passed the profile filter, plus best-effort fields split
/// out of its title and snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub title: String,
    pub snippet: String,
    pub link: String,
    pub source: String,
    pub name: String,
    pub headline: String,
    pub company: String,
    pub location: String,
}

impl CandidateProfile {
    /// Text handed to the fit scorer.
    pub fn summary(&self) -> String {
        format!("{} {}", self.title, self.snippet)
    }
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Never fails: provider errors are logged and yield an empty list.
    async fn search(&self, query: &str, num_results: usize) -> Vec<SearchItem>;
}

/// Keeps items whose link points at a profile page, in input order.
pub fn filter_profiles(items: &[SearchItem]) -> Vec<CandidateProfile> {
    items
        .iter()
        .filter(|item| item.link.contains(PROFILE_URL_MARKER))
        .map(profile::parse_profile)
        .collect()
}

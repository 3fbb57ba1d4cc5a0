//! Google Custom Search client.
//!
//! One GET per page, at most 10 results per page. A request for more than 10
//! results makes exactly one follow-up call at `start=11`, after a fixed
//! one-second pause. No retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::search::{SearchItem, SearchProvider};

pub const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
const PAGE_SIZE: usize = 10;
const PAGE_DELAY: Duration = Duration::from_secs(1);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("GOOGLE_API_KEY or SEARCH_ENGINE_ID is not configured")]
    MissingCredentials,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    // Absent when the query has no hits.
    #[serde(default)]
    items: Vec<SearchItem>,
}

/// `(start, num)` pairs for a request of `num_results`. `start` is 1-based.
fn page_requests(num_results: usize) -> Vec<(usize, usize)> {
    let mut pages = vec![(1, num_results.min(PAGE_SIZE))];
    if num_results > PAGE_SIZE {
        pages.push((PAGE_SIZE + 1, (num_results - PAGE_SIZE).min(PAGE_SIZE)));
    }
    pages
}

#[derive(Clone)]
pub struct GoogleSearchClient {
    client: Client,
    api_key: Option<String>,
    engine_id: Option<String>,
    base_url: String,
}

impl GoogleSearchClient {
    pub fn new(api_key: Option<String>, engine_id: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            engine_id,
            base_url: SEARCH_URL.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.engine_id.is_some()
    }

    /// Fetches up to `num_results` items, propagating the first page's error.
    pub async fn try_search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchItem>, SearchError> {
        let (Some(key), Some(cx)) = (self.api_key.as_deref(), self.engine_id.as_deref()) else {
            return Err(SearchError::MissingCredentials);
        };

        let mut items = Vec::new();
        for (index, (start, num)) in page_requests(num_results).into_iter().enumerate() {
            if num == 0 {
                break;
            }
            if index > 0 {
                tokio::time::sleep(PAGE_DELAY).await;
                match self.fetch_page(key, cx, query, start, num).await {
                    Ok(page) => items.extend(page),
                    Err(err) => {
                        warn!("Follow-up search page at start={} failed: {}", start, err);
                        break;
                    }
                }
            } else {
                items.extend(self.fetch_page(key, cx, query, start, num).await?);
            }
        }

        items.truncate(num_results);
        Ok(items)
    }

    async fn fetch_page(
        &self,
        key: &str,
        cx: &str,
        query: &str,
        start: usize,
        num: usize,
    ) -> Result<Vec<SearchItem>, SearchError> {
        let mut params = vec![
            ("key", key.to_string()),
            ("cx", cx.to_string()),
            ("q", query.to_string()),
            ("num", num.to_string()),
        ];
        if start > 1 {
            params.push(("start", start.to_string()));
        }

        debug!("Search request: start={} num={} q={}", start, num, query);

        let response = self.client.get(&self.base_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.items)
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchClient {
    async fn search(&self, query: &str, num_results: usize) -> Vec<SearchItem> {
        match self.try_search(query, num_results).await {
            Ok(items) => items,
            Err(SearchError::MissingCredentials) => {
                warn!("Search disabled: GOOGLE_API_KEY or SEARCH_ENGINE_ID not set");
                Vec::new()
            }
            Err(err) => {
                warn!("Search failed, treating as zero results: {}", err);
                Vec::new()
            }
        }
    }
}

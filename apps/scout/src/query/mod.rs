//! Query Template Engine: turns a `JobAnalysis` into up to three X-Ray search strings.
//!
//! The output is not validated against the search engine's length or syntax limits.
//! When nothing matched, a query can degrade to little more than the `site:` prefix.

pub mod placeholders;
pub mod templates;

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::analysis::JobAnalysis;
use crate::query::templates::{QueryTemplate, RoleKey};

pub const DEFAULT_MAX_QUERIES: usize = 3;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static EMPTY_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStrategy {
    Primary,
    Specialized,
    IndustrySpecific,
}

impl QueryStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryStrategy::Primary => "primary",
            QueryStrategy::Specialized => "specialized",
            QueryStrategy::IndustrySpecific => "industry_specific",
        }
    }

    fn description(self) -> &'static str {
        match self {
            QueryStrategy::Primary => "Broad role-based search with core requirements",
            QueryStrategy::Specialized => {
                "Targeted search with specific tech stack and company context"
            }
            QueryStrategy::IndustrySpecific => "Industry or domain-specific search",
        }
    }
}

/// A fully resolved search string plus the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub strategy: QueryStrategy,
    pub role_key: RoleKey,
    /// Key of the template inside its family (e.g. `fullstack`, `research_focused`).
    pub template_key: String,
    pub description: String,
}

/// Builds up to `max_queries` queries: primary, specialized, then the family's third template.
pub fn generate_queries(
    analysis: &JobAnalysis,
    job_description: &str,
    max_queries: usize,
) -> Vec<SearchQuery> {
    let role_key = RoleKey::select(analysis.job_family, job_description);
    let text = job_description.to_lowercase();

    let strategies = [
        QueryStrategy::Primary,
        QueryStrategy::Specialized,
        QueryStrategy::IndustrySpecific,
    ];

    role_key
        .templates()
        .iter()
        .zip(strategies)
        .take(max_queries)
        .map(|(template, strategy)| SearchQuery {
            query: build_query(template, analysis, &text),
            strategy,
            role_key,
            template_key: template.key.to_string(),
            description: strategy.description().to_string(),
        })
        .collect()
}

fn build_query(template: &QueryTemplate, analysis: &JobAnalysis, text: &str) -> String {
    let filled = PLACEHOLDER_RE.replace_all(template.template, |caps: &Captures| {
        placeholders::resolve(&caps[1], analysis, text)
    });
    clean_query(&filled)
}

/// Collapses whitespace and drops `( )` groups left behind by empty placeholders.
pub fn clean_query(query: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(query, " ");
    let without_groups = EMPTY_GROUP_RE.replace_all(&collapsed, "");
    WHITESPACE_RE
        .replace_all(&without_groups, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_job;

    const DEVOPS_JD: &str = "Senior DevOps Engineer, San Francisco. Series A startup. \
        Experience with Pulumi, Azure, GCP, Kubernetes, JavaScript. 5+ years experience.";

    #[test]
    fn test_devops_queries() {
        let analysis = analyze_job(DEVOPS_JD);
        let queries = generate_queries(&analysis, DEVOPS_JD, DEFAULT_MAX_QUERIES);

        assert_eq!(queries.len(), 3);
        assert!(queries.iter().all(|q| q.role_key == RoleKey::DevopsEngineer));
        assert_eq!(queries[0].strategy, QueryStrategy::Primary);
        assert_eq!(queries[1].strategy, QueryStrategy::Specialized);
        assert_eq!(queries[2].strategy, QueryStrategy::IndustrySpecific);

        assert!(queries[0].query.contains("\"San Francisco\""));
        assert!(queries[0].query.contains("\"5+ years\""));
        assert!(queries[1].query.contains("(startup OR early stage OR series)"));
        assert!(queries[1].query.contains("(Azure OR Microsoft Azure)"));
        assert!(queries[1].query.ends_with("\"Pulumi\""));
    }

    #[test]
    fn test_query_generation_is_idempotent() {
        let analysis = analyze_job(DEVOPS_JD);
        let first = generate_queries(&analysis, DEVOPS_JD, 3);
        let second = generate_queries(&analysis, DEVOPS_JD, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_max_queries_truncates() {
        let analysis = analyze_job(DEVOPS_JD);
        let queries = generate_queries(&analysis, DEVOPS_JD, 1);
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].strategy, QueryStrategy::Primary);
    }

    #[test]
    fn test_no_placeholders_or_double_spaces_survive() {
        let analysis = analyze_job(DEVOPS_JD);
        for q in generate_queries(&analysis, DEVOPS_JD, 3) {
            assert!(!q.query.contains('{'), "unresolved placeholder in {}", q.query);
            assert!(!q.query.contains("  "), "double space in {}", q.query);
            assert!(!q.query.contains("()"), "empty group in {}", q.query);
        }
    }

    #[test]
    fn test_third_template_key_is_reported() {
        let jd = "Software engineer, backend";
        let analysis = analyze_job(jd);
        let queries = generate_queries(&analysis, jd, 3);
        assert_eq!(queries[2].template_key, "fullstack");
        assert_eq!(queries[2].strategy, QueryStrategy::IndustrySpecific);
    }

    #[test]
    fn test_degenerate_query_is_still_returned() {
        let jd = "Account executive";
        let analysis = analyze_job(jd);
        let queries = generate_queries(&analysis, jd, 3);
        assert_eq!(
            queries[2].query,
            r#"site:linkedin.com/in/ ("Full Stack Engineer" OR "Full Stack Developer")"#
        );
    }

    #[test]
    fn test_clean_query_removes_empty_groups() {
        assert_eq!(clean_query("a  (  )   b ( ) c"), "a b c");
        assert_eq!(clean_query("  (x)  "), "(x)");
    }
}

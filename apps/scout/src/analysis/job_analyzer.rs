use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::tables::{
    INDUSTRIES, JOB_FAMILIES, LEADERSHIP_TERMS, LOCATION_PATTERNS, REMOTE_TERMS,
    SENIORITY_LEVELS, SKILL_PATTERNS,
};
use crate::analysis::{Industry, JobAnalysis, JobFamily, Seniority, SkillCategory};

static SKILL_REGEXES: LazyLock<Vec<(SkillCategory, Regex)>> = LazyLock::new(|| {
    SKILL_PATTERNS
        .iter()
        .map(|(category, pattern)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("valid skill regex");
            (*category, re)
        })
        .collect()
});

static LOCATION_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    LOCATION_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid location regex"))
        .collect()
});

/// Classifies a job description.
///
/// Family, seniority and industry all use `classify_by_keywords` (count-and-argmax).
/// Skills are matched on the lower-cased text, locations on the original casing.
pub fn analyze_job(job_description: &str) -> JobAnalysis {
    let text = job_description.to_lowercase();

    let job_family = classify_by_keywords(&text, JOB_FAMILIES, JobFamily::Operations);
    let seniority = classify_by_keywords(&text, SENIORITY_LEVELS, Seniority::Mid);
    let industry = classify_by_keywords(&text, INDUSTRIES, Industry::Tech);

    let skills = extract_skills(&text);
    let locations = extract_locations(job_description);

    let any_skill = skills.values().any(|set| !set.is_empty());
    let is_technical = matches!(job_family, JobFamily::Engineering | JobFamily::Data) || any_skill;
    let is_leadership = matches!(seniority, Seniority::Senior | Seniority::Executive)
        || contains_any(&text, LEADERSHIP_TERMS);
    let remote_eligible = contains_any(&text, REMOTE_TERMS);
    let total_skills = skills.values().map(BTreeSet::len).sum();

    JobAnalysis {
        job_family,
        seniority,
        industry,
        skills,
        locations,
        is_technical,
        is_leadership,
        remote_eligible,
        total_skills,
    }
}

/// Scores each category by how many of its keywords occur in `text` (a keyword
/// counts once however often it appears) and returns the highest scorer.
/// Ties go to the category declared first; no hits at all returns `default`.
pub fn classify_by_keywords<T: Copy>(text: &str, table: &[(T, &[&str])], default: T) -> T {
    let mut best: Option<(T, usize)> = None;

    for (category, keywords) in table {
        let score = keywords.iter().filter(|kw| text.contains(**kw)).count();
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((*category, score)),
        }
    }

    best.map(|(category, _)| category).unwrap_or(default)
}

pub(crate) fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

fn extract_skills(text: &str) -> BTreeMap<SkillCategory, BTreeSet<String>> {
    SKILL_REGEXES
        .iter()
        .map(|(category, re)| {
            let matches = re
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect::<BTreeSet<_>>();
            (*category, matches)
        })
        .collect()
}

fn extract_locations(text: &str) -> BTreeSet<String> {
    LOCATION_REGEXES
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVOPS_JD: &str = r#"
        Senior DevOps Engineer
        San Francisco, California
        Engineering / On-site

        Ivo AI is building tools to help every company in the world make sense of their contracts.
        We're looking for a seasoned DevOps engineer to own and shape the future of our environment.
        * Manage dozens, hundreds, thousands of customer deployments
        * Get our CI/CD system running super quickly
        * Experience with Pulumi, Azure, GCP, Kubernetes, JavaScript
        * 5+ years experience with Infrastructure as Code
    "#;

    const TAX_JD: &str = r#"
        Tax Director, Los Angeles, CA
        SingerLewak is a Top 100 accounting and consulting firm seeking a Tax Director.
        CPA license required. Experience with GAAP and audit defense.
    "#;

    #[test]
    fn test_devops_scenario_classification() {
        let analysis = analyze_job(DEVOPS_JD);
        assert_eq!(analysis.job_family, JobFamily::Engineering);
        assert_eq!(analysis.seniority, Seniority::Senior);

        let cloud: Vec<&str> = analysis.skills_in(SkillCategory::Cloud).collect();
        assert!(cloud.contains(&"pulumi"), "cloud skills were {cloud:?}");
        assert!(cloud.contains(&"azure"), "cloud skills were {cloud:?}");
        assert!(cloud.contains(&"kubernetes"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let first = analyze_job(DEVOPS_JD);
        for _ in 0..5 {
            assert_eq!(analyze_job(DEVOPS_JD), first);
        }
    }

    #[test]
    fn test_empty_text_falls_back_to_defaults() {
        let analysis = analyze_job("");
        assert_eq!(analysis.job_family, JobFamily::Operations);
        assert_eq!(analysis.seniority, Seniority::Mid);
        assert_eq!(analysis.industry, Industry::Tech);
        assert_eq!(analysis.total_skills, 0);
        assert!(analysis.locations.is_empty());
        assert!(!analysis.is_technical);
        assert!(!analysis.remote_eligible);
    }

    #[test]
    fn test_every_skill_category_present_even_when_empty() {
        let analysis = analyze_job("nothing relevant here");
        assert_eq!(analysis.skills.len(), SKILL_PATTERNS.len());
        assert!(analysis.skills.values().all(BTreeSet::is_empty));
    }

    #[test]
    fn test_skill_matches_are_distinct() {
        let analysis = analyze_job("Python, python and PYTHON with Docker");
        let programming: Vec<&str> = analysis.skills_in(SkillCategory::Programming).collect();
        assert_eq!(programming, vec!["python"]);
        // docker sits in both cloud and devops tables
        assert!(analysis.skills_in(SkillCategory::Cloud).any(|s| s == "docker"));
        assert!(analysis.skills_in(SkillCategory::Devops).any(|s| s == "docker"));
        assert_eq!(analysis.total_skills, 3);
    }

    #[test]
    fn test_tax_director_is_finance() {
        let analysis = analyze_job(TAX_JD);
        assert_eq!(analysis.job_family, JobFamily::Finance);
        assert!(analysis.skills_in(SkillCategory::Finance).any(|s| s == "cpa"));
        assert!(analysis.locations.contains("Los Angeles"));
        assert!(analysis.locations.contains("Angeles, CA"));
    }

    #[test]
    fn test_location_allowlist_and_remote() {
        let analysis = analyze_job("Backend engineer, New York or Remote (US)");
        assert!(analysis.locations.contains("New York"));
        assert!(analysis.locations.contains("Remote"));
        assert!(analysis.remote_eligible);
    }

    #[test]
    fn test_city_state_patterns_need_capitals() {
        let analysis = analyze_job("Stack: python, go and rust");
        assert!(analysis.locations.is_empty());

        let analysis = analyze_job("Based in Halifax, NS");
        assert!(analysis.locations.contains("Halifax, NS"));
    }

    #[test]
    fn test_locations_not_normalized() {
        let analysis = analyze_job("Offices in NYC and New York");
        assert!(analysis.locations.contains("New York"));
        assert!(!analysis.locations.contains("NYC"));
    }

    #[test]
    fn test_leadership_from_text_terms() {
        let analysis = analyze_job("junior engineer reporting to the engineering manager");
        assert_eq!(analysis.seniority, Seniority::Entry);
        assert!(analysis.is_leadership);
    }

    #[test]
    fn test_argmax_tie_goes_to_first_declared() {
        let table: &[(&str, &[&str])] = &[("first", &["alpha"]), ("second", &["beta"])];
        assert_eq!(classify_by_keywords("alpha beta", table, "none"), "first");
        assert_eq!(classify_by_keywords("beta", table, "none"), "second");
        assert_eq!(classify_by_keywords("gamma", table, "none"), "none");
    }

    #[test]
    fn test_keyword_counts_once_per_keyword() {
        let table: &[(&str, &[&str])] = &[("a", &["x"]), ("b", &["y", "z"])];
        // "x" repeated does not outweigh two distinct keywords
        assert_eq!(classify_by_keywords("x x x x y z", table, "none"), "b");
    }
}

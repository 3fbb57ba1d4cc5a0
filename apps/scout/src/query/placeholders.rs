//! Placeholder resolvers. Each one returns either an empty string or a ready-to-splice
//! boolean fragment; unknown placeholders resolve to the empty string.

use crate::analysis::{Industry, JobAnalysis, Seniority};

/// Resolves one `{name}` placeholder. `text` is the lower-cased job description.
pub fn resolve(name: &str, analysis: &JobAnalysis, text: &str) -> String {
    match name {
        "location" => location(analysis),
        "experience" => experience(analysis),
        "tech_stack" => tech_stack(analysis),
        "cloud_platforms" => cloud_platforms(text).to_string(),
        "iac_tools" => iac_tools(text).to_string(),
        "ml_frameworks" => ml_frameworks(text),
        "company_context" => company_context(text).to_string(),
        "programming_languages" => programming_languages(text),
        "tax_credentials" => r#""CPA" OR "Certified Public Accountant""#.to_string(),
        "industry_context" => industry_context(analysis).to_string(),
        _ => String::new(),
    }
}

fn location(analysis: &JobAnalysis) -> String {
    analysis
        .locations
        .iter()
        .next()
        .map(|loc| format!("\"{loc}\""))
        .unwrap_or_default()
}

fn experience(analysis: &JobAnalysis) -> String {
    match analysis.seniority {
        Seniority::Senior => r#""5+ years" OR "6+ years" OR "senior""#.to_string(),
        Seniority::Mid => r#""3+ years" OR "4+ years" OR "mid""#.to_string(),
        Seniority::Entry | Seniority::Executive => String::new(),
    }
}

/// Up to two skills per category, capped at four terms overall.
fn tech_stack(analysis: &JobAnalysis) -> String {
    let terms: Vec<String> = analysis
        .skills
        .keys()
        .flat_map(|category| analysis.skills_in(*category).take(2))
        .take(4)
        .map(|term| format!("\"{term}\""))
        .collect();

    or_group(&terms)
}

fn cloud_platforms(text: &str) -> &'static str {
    if contains_any(text, &["aws", "amazon web services"]) {
        "AWS OR Amazon Web Services"
    } else if contains_any(text, &["azure", "microsoft azure"]) {
        "Azure OR Microsoft Azure"
    } else if contains_any(text, &["gcp", "google cloud"]) {
        "GCP OR Google Cloud"
    } else {
        "AWS OR Azure OR GCP"
    }
}

fn iac_tools(text: &str) -> &'static str {
    if text.contains("pulumi") {
        r#""Pulumi""#
    } else if text.contains("terraform") {
        r#""Terraform""#
    } else {
        r#""Infrastructure as Code" OR "IaC""#
    }
}

fn ml_frameworks(text: &str) -> String {
    let frameworks: Vec<String> = [("tensorflow", "TensorFlow"), ("pytorch", "PyTorch")]
        .into_iter()
        .filter(|(needle, _)| text.contains(needle))
        .map(|(_, label)| label.to_string())
        .collect();

    if frameworks.is_empty() {
        "(TensorFlow OR PyTorch OR scikit-learn)".to_string()
    } else {
        or_group(&frameworks)
    }
}

fn company_context(text: &str) -> &'static str {
    if contains_any(text, &["startup", "series"]) {
        "(startup OR early stage OR series)"
    } else if contains_any(text, &["enterprise", "large"]) {
        "(enterprise OR large company)"
    } else {
        ""
    }
}

fn programming_languages(text: &str) -> String {
    let languages: Vec<String> = ["python", "javascript", "java", "golang", "typescript"]
        .into_iter()
        .filter(|lang| text.contains(lang))
        .map(capitalize)
        .collect();

    or_group(&languages)
}

fn industry_context(analysis: &JobAnalysis) -> &'static str {
    match analysis.industry {
        Industry::Tech => "(startup OR early stage OR seed OR series)",
        Industry::Finance => "(financial services OR banking OR fintech)",
        _ => "",
    }
}

fn or_group(terms: &[String]) -> String {
    if terms.is_empty() {
        String::new()
    } else {
        format!("({})", terms.join(" OR "))
    }
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Fit Scoring: pluggable, trait-based scorers that rate a candidate snippet
//! against a job description on a 0–10 scale.
//!
//! `SmartFitScorer`: hiring context → LLM criteria → LLM JSON evaluation.
//! `RubricFitScorer`: single free-text rubric completion, score parsed from the
//! `Final Fit Score: X / 10` line.
//!
//! Neither scorer ever returns an error. Any HTTP or parse failure yields the
//! neutral fallback (`FALLBACK_FIT_SCORE`) with `fallback = true`.
//! `AppState` holds an `Arc<dyn FitScorer>`.

pub mod prompts;
pub mod rubric;
pub mod smart;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::analysis::HiringContext;

pub use rubric::RubricFitScorer;
pub use smart::SmartFitScorer;

/// Score substituted whenever the LLM call or its parsing fails.
pub const FALLBACK_FIT_SCORE: f64 = 6.0;
pub const MAX_FIT_SCORE: f64 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// Per-category rubric scores. Categories are 0–10 except bonus (0–5) and red flags (−5–0).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(default, deserialize_with = "de_number")]
    pub education: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub career_trajectory: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub company_relevance: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub tenure_stability: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub core_skills: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub bonus_signals: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub red_flags: f64,
}

/// Parsed LLM evaluation. Only `final_score` is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default)]
    pub scores: CategoryScores,
    #[serde(deserialize_with = "de_number")]
    pub final_score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub rationale: String,
    #[serde(default, deserialize_with = "de_flag")]
    pub override_signal: bool,
}

/// Elite hiring criteria generated per job context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringCriteria {
    pub education_requirements: String,
    pub core_skills: Vec<String>,
    pub domain_expertise: Vec<String>,
    pub experience_markers: Vec<String>,
    pub company_preferences: Vec<String>,
    pub red_flags: Vec<String>,
    pub bonus_signals: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongHire,
    Consider,
    Weak,
    NoHire,
}

impl Recommendation {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            Recommendation::StrongHire
        } else if score >= 7.0 {
            Recommendation::Consider
        } else if score >= 5.5 {
            Recommendation::Weak
        } else {
            Recommendation::NoHire
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Recommendation::StrongHire => {
                "STRONG HIRE - Exceptional candidate meeting elite standards"
            }
            Recommendation::Consider => "CONSIDER - Good candidate, requires additional evaluation",
            Recommendation::Weak => "WEAK - Below standards, significant concerns",
            Recommendation::NoHire => "NO HIRE - Does not meet minimum requirements",
        }
    }
}

/// Full assessment returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub context: HiringContext,
    pub criteria: Option<HiringCriteria>,
    pub evaluation: Evaluation,
    /// 0 – 10
    pub fit_score: f64,
    pub recommendation: Recommendation,
    pub recommendation_label: String,
    /// Raw completion text, kept by backends whose output is free text.
    pub raw_response: Option<String>,
    /// True when the neutral fallback replaced a failed call or parse.
    pub fallback: bool,
    pub scorer_backend: String, // "smart" | "rubric"
}

impl Assessment {
    pub(crate) fn new(
        context: HiringContext,
        criteria: Option<HiringCriteria>,
        evaluation: Evaluation,
        raw_response: Option<String>,
        fallback: bool,
        scorer_backend: &str,
    ) -> Self {
        let fit_score = clamp_score(evaluation.final_score);
        let recommendation = Recommendation::from_score(fit_score);
        Self {
            context,
            criteria,
            evaluation,
            fit_score,
            recommendation,
            recommendation_label: recommendation.label().to_string(),
            raw_response,
            fallback,
            scorer_backend: scorer_backend.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The fit scorer trait. Implement this to swap backends without touching
/// the pipeline, handler, or batch code.
#[async_trait]
pub trait FitScorer: Send + Sync {
    /// `candidate` is a plain-text rendering of whatever is known about the candidate.
    async fn evaluate(&self, candidate: &str, job_description: &str) -> Assessment;
}

/// Evaluation used whenever the LLM cannot produce one.
pub fn fallback_evaluation() -> Evaluation {
    Evaluation {
        scores: CategoryScores {
            education: 6.0,
            career_trajectory: 6.0,
            company_relevance: 6.0,
            tenure_stability: 6.0,
            core_skills: 6.0,
            bonus_signals: 2.0,
            red_flags: 0.0,
        },
        final_score: FALLBACK_FIT_SCORE,
        strengths: vec!["Professional experience visible".to_string()],
        weaknesses: vec!["Limited profile information".to_string()],
        rationale: "Assessment based on limited profile data. Full evaluation requires detailed resume."
            .to_string(),
        override_signal: false,
    }
}

pub fn clamp_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, MAX_FIT_SCORE)
    } else {
        FALLBACK_FIT_SCORE
    }
}

/// Accepts `7.5`, `"7.5"` or `"7.5 / 10"`.
fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("score out of range")),
        Value::String(s) => leading_number(s)
            .ok_or_else(|| serde::de::Error::custom(format!("not a score: {s}"))),
        other => Err(serde::de::Error::custom(format!("not a score: {other}"))),
    }
}

fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => {
            let s = s.trim().to_lowercase();
            s.starts_with("true") || s.starts_with("yes")
        }
        _ => false,
    })
}

/// Number at the very start of `s` (after whitespace), with an optional sign.
/// Text that does not open with a number, or opens with a range such as
/// `0-10`, yields `None`.
pub(crate) fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let end = unsigned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(unsigned.len());
    if unsigned[end..].starts_with('-') {
        return None;
    }
    let sign_len = s.len() - unsigned.len();
    s[..sign_len + end].trim_end_matches('.').parse().ok()
}

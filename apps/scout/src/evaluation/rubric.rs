//! Single-call rubric scorer. The model answers in free text and the score is
//! read back from the `Final Fit Score: X.X / 10.0` line.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::analysis::detect_context;
use crate::evaluation::prompts::RUBRIC_PROMPT_TEMPLATE;
use crate::evaluation::{
    fallback_evaluation, leading_number, Assessment, CategoryScores, Evaluation, FitScorer,
};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{Completion, LlmClient};

const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 600;

static FINAL_SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)final\s+fit\s+score[^:\n]*:[\s*]*([0-9]+(?:\.[0-9]+)?)").expect("valid regex")
});

pub struct RubricFitScorer {
    llm: LlmClient,
}

impl RubricFitScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl FitScorer for RubricFitScorer {
    async fn evaluate(&self, candidate: &str, job_description: &str) -> Assessment {
        let context = detect_context(job_description);
        let prompt = fill_template(
            RUBRIC_PROMPT_TEMPLATE,
            &[("job_description", job_description), ("candidate", candidate)],
        );

        let completion = Completion::new(&prompt)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS);

        let text = match self.llm.complete(completion).await {
            Ok(text) => text,
            Err(err) => {
                warn!("Rubric evaluation failed, using neutral fallback: {}", err);
                return Assessment::new(context, None, fallback_evaluation(), None, true, "rubric");
            }
        };

        match parse_rubric_response(&text) {
            Some(evaluation) => {
                debug!("Rubric evaluation parsed: score={}", evaluation.final_score);
                Assessment::new(context, None, evaluation, Some(text), false, "rubric")
            }
            None => {
                warn!("No 'Final Fit Score' line in rubric response, using neutral fallback");
                Assessment::new(
                    context,
                    None,
                    fallback_evaluation(),
                    Some(text),
                    true,
                    "rubric",
                )
            }
        }
    }
}

/// Score right after the colon of the first `Final Fit Score` line, tolerating
/// markdown emphasis and a parenthesised scale before the colon.
pub fn parse_final_fit_score(text: &str) -> Option<f64> {
    FINAL_SCORE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Builds an `Evaluation` from the rubric's free-text layout. `None` when no
/// final score can be found; every other field is best-effort.
pub fn parse_rubric_response(text: &str) -> Option<Evaluation> {
    let final_score = parse_final_fit_score(text)?;

    let mut scores = CategoryScores::default();
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut rationale = String::new();
    let mut override_signal = false;

    for line in text.lines() {
        let line = line.trim().trim_start_matches(['*', '-']).trim();
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let label = label.trim_matches('*').trim().to_lowercase();
        let value = value.trim_matches('*').trim();

        match label.as_str() {
            "education" => scores.education = leading_number(value).unwrap_or_default(),
            "career trajectory" => {
                scores.career_trajectory = leading_number(value).unwrap_or_default()
            }
            "company relevance" => {
                scores.company_relevance = leading_number(value).unwrap_or_default()
            }
            "tenure & stability" => {
                scores.tenure_stability = leading_number(value).unwrap_or_default()
            }
            "most important skills" | "core skills" => {
                scores.core_skills = leading_number(value).unwrap_or_default()
            }
            "bonus signals" => scores.bonus_signals = leading_number(value).unwrap_or_default(),
            "red flags" => {
                // Rubric writes "−x" with a unicode minus. Stored as non-positive.
                let magnitude = leading_number(&value.replace('−', "-")).unwrap_or_default();
                scores.red_flags = -magnitude.abs();
            }
            "strengths" => strengths.push(value.to_string()),
            "weaknesses" => weaknesses.push(value.to_string()),
            "rationale" => rationale = value.to_string(),
            "override signal" => override_signal = value.to_lowercase().starts_with("yes"),
            _ => {}
        }
    }

    Some(Evaluation {
        scores,
        final_score,
        strengths,
        weaknesses,
        rationale,
        override_signal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::FALLBACK_FIT_SCORE;
    use crate::llm_client::testing::fake_llm;

    const RESPONSE: &str = "\
Final Fit Score: 7.8 / 10.0
Breakdown:
* Education: 8/10
* Career trajectory: 7.5/10
* Company relevance: 9/10
* Tenure & stability: 6/10
* Most important skills: 8/10
* Bonus signals: 3/5
* Red flags: −1
Summary (3-5 lines):
Strengths: Deep Kubernetes and Azure experience
Weaknesses: No Pulumi exposure
Rationale: Strong infrastructure owner at scale.
Override Signal: no";

    #[test]
    fn test_parse_final_fit_score_plain() {
        assert_eq!(parse_final_fit_score("Final Fit Score: 8.2 / 10.0"), Some(8.2));
    }

    #[test]
    fn test_parse_final_fit_score_markdown() {
        assert_eq!(
            parse_final_fit_score("Intro\n**Final Fit Score:** 6 / 10\nmore"),
            Some(6.0)
        );
    }

    #[test]
    fn test_parse_final_fit_score_skips_scale_in_label() {
        assert_eq!(
            parse_final_fit_score("Final Fit Score (out of 10): 7.5"),
            Some(7.5)
        );
    }

    #[test]
    fn test_parse_final_fit_score_missing() {
        assert_eq!(parse_final_fit_score("Overall a decent candidate."), None);
        assert_eq!(parse_final_fit_score("Final Fit Score: N/A"), None);
    }

    #[test]
    fn test_parse_rubric_response_breakdown() {
        let evaluation = parse_rubric_response(RESPONSE).unwrap();
        assert_eq!(evaluation.final_score, 7.8);
        assert_eq!(evaluation.scores.education, 8.0);
        assert_eq!(evaluation.scores.career_trajectory, 7.5);
        assert_eq!(evaluation.scores.bonus_signals, 3.0);
        assert_eq!(evaluation.scores.red_flags, -1.0);
        assert_eq!(evaluation.strengths, vec!["Deep Kubernetes and Azure experience"]);
        assert_eq!(evaluation.rationale, "Strong infrastructure owner at scale.");
        assert!(!evaluation.override_signal);
    }

    #[tokio::test]
    async fn test_missing_key_yields_neutral_fallback() {
        let scorer = RubricFitScorer::new(LlmClient::disabled());
        let assessment = scorer.evaluate("{\"name\": \"Jane\"}", "DevOps developer").await;
        assert!(assessment.fallback);
        assert_eq!(assessment.fit_score, FALLBACK_FIT_SCORE);
        assert_eq!(assessment.scorer_backend, "rubric");
        assert!(assessment.criteria.is_none());
    }

    #[tokio::test]
    async fn test_response_without_score_line_yields_neutral_fallback() {
        let llm = fake_llm("Solid engineer, maybe an 8? Hard to say.").await;
        let assessment = RubricFitScorer::new(llm)
            .evaluate("{\"name\": \"Jane\"}", "DevOps developer")
            .await;
        assert!(assessment.fallback);
        assert_eq!(assessment.fit_score, FALLBACK_FIT_SCORE);
        assert_eq!(
            assessment.raw_response.as_deref(),
            Some("Solid engineer, maybe an 8? Hard to say.")
        );
    }

    #[tokio::test]
    async fn test_scored_response_is_not_a_fallback() {
        let assessment = RubricFitScorer::new(fake_llm(RESPONSE).await)
            .evaluate("{\"name\": \"Jane\"}", "DevOps developer")
            .await;
        assert!(!assessment.fallback);
        assert_eq!(assessment.fit_score, 7.8);
    }
}

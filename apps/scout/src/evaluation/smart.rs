//! Context-aware scorer: hiring context, then LLM-generated criteria, then an
//! LLM JSON evaluation against those criteria.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::analysis::{detect_context, HiringContext};
use crate::evaluation::prompts::{CRITERIA_PROMPT_TEMPLATE, EVALUATION_PROMPT_TEMPLATE};
use crate::evaluation::{fallback_evaluation, Assessment, Evaluation, FitScorer, HiringCriteria};
use crate::llm_client::prompts::{fill_template, CONSERVATIVE_SCORING, JSON_ONLY_SYSTEM};
use crate::llm_client::{Completion, LlmClient, LlmError};

const TEMPERATURE: f32 = 0.1;

pub struct SmartFitScorer {
    llm: LlmClient,
}

impl SmartFitScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// LLM criteria for this context, or the fixed fallback set on any error.
    pub async fn generate_criteria(
        &self,
        context: &HiringContext,
        job_description: &str,
    ) -> HiringCriteria {
        let prompt = fill_context(
            CRITERIA_PROMPT_TEMPLATE,
            context,
            &[("job_description", job_description)],
        );

        match self.request_json::<HiringCriteria>(&prompt).await {
            Ok(criteria) => criteria,
            Err(err) => {
                warn!("Criteria generation failed, using fallback criteria: {}", err);
                fallback_criteria()
            }
        }
    }

    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        prompt: &str,
    ) -> Result<T, LlmError> {
        self.llm
            .complete_json(
                Completion::new(prompt)
                    .system(JSON_ONLY_SYSTEM)
                    .temperature(TEMPERATURE),
            )
            .await
    }
}

#[async_trait]
impl FitScorer for SmartFitScorer {
    async fn evaluate(&self, candidate: &str, job_description: &str) -> Assessment {
        let context = detect_context(job_description);
        let criteria = self.generate_criteria(&context, job_description).await;

        let prompt = build_evaluation_prompt(&context, &criteria, candidate);
        let (evaluation, fallback) = match self.request_json::<Evaluation>(&prompt).await {
            Ok(evaluation) => (evaluation, false),
            Err(err) => {
                warn!("Candidate evaluation failed, using neutral fallback: {}", err);
                (fallback_evaluation(), true)
            }
        };

        debug!(
            "Smart evaluation: score={} fallback={}",
            evaluation.final_score, fallback
        );

        Assessment::new(context, Some(criteria), evaluation, None, fallback, "smart")
    }
}

/// Fills the hiring-context placeholders together with `extra` in one pass.
fn fill_context(template: &str, context: &HiringContext, extra: &[(&str, &str)]) -> String {
    let mut values = vec![
        ("industry", context.industry.as_str()),
        ("company_type", context.company_type.as_str()),
        ("role_type", context.role_type.as_str()),
        ("role_subtype", context.role_subtype.as_str()),
    ];
    values.extend_from_slice(extra);
    fill_template(template, &values)
}

fn build_evaluation_prompt(
    context: &HiringContext,
    criteria: &HiringCriteria,
    candidate: &str,
) -> String {
    let criteria = render_criteria(criteria);
    fill_context(
        EVALUATION_PROMPT_TEMPLATE,
        context,
        &[
            ("criteria", criteria.as_str()),
            ("candidate", candidate),
            ("conservative_scoring", CONSERVATIVE_SCORING),
        ],
    )
}

fn render_criteria(criteria: &HiringCriteria) -> String {
    let list = |items: &[String]| items.join("; ");
    format!(
        "Education: {}\nCore Skills: {}\nDomain Expertise: {}\nExperience Markers: {}\n\
         Company Preferences: {}\nRed Flags: {}\nBonus Signals: {}",
        criteria.education_requirements,
        list(&criteria.core_skills),
        list(&criteria.domain_expertise),
        list(&criteria.experience_markers),
        list(&criteria.company_preferences),
        list(&criteria.red_flags),
        list(&criteria.bonus_signals),
    )
}

pub fn fallback_criteria() -> HiringCriteria {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    HiringCriteria {
        education_requirements:
            "Bachelor's+ from top-tier university or equivalent excellence".to_string(),
        core_skills: owned(&[
            "System design",
            "Production ownership",
            "Technical leadership",
            "Problem solving",
        ]),
        domain_expertise: owned(&[
            "Cloud platforms",
            "Scalability",
            "Best practices",
            "Modern tools",
        ]),
        experience_markers: owned(&[
            "Ownership of outcomes",
            "Scale challenges",
            "Technical impact",
        ]),
        company_preferences: owned(&["High-growth companies", "Technical excellence culture"]),
        red_flags: owned(&["Job hopping", "No ownership", "Buzzword resumes"]),
        bonus_signals: owned(&["Open source", "Technical writing", "Speaking", "Awards"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{Recommendation, FALLBACK_FIT_SCORE};
    use crate::llm_client::testing::fake_llm;

    const DEVOPS_JD: &str = "Senior DevOps Engineer. Kubernetes, Pulumi, Azure. Series A startup.";

    #[tokio::test]
    async fn test_missing_key_yields_neutral_fallback() {
        let scorer = SmartFitScorer::new(LlmClient::disabled());
        let assessment = scorer
            .evaluate("Senior DevOps Engineer at Google Cloud", DEVOPS_JD)
            .await;

        assert!(assessment.fallback);
        assert_eq!(assessment.fit_score, FALLBACK_FIT_SCORE);
        assert_eq!(assessment.recommendation, Recommendation::Weak);
        assert_eq!(assessment.criteria, Some(fallback_criteria()));
        assert_eq!(assessment.scorer_backend, "smart");
        assert_eq!(assessment.context.role_type, "DevOps Engineer");
    }

    #[test]
    fn test_evaluation_prompt_is_fully_filled() {
        let context = detect_context(DEVOPS_JD);
        let prompt = build_evaluation_prompt(&context, &fallback_criteria(), "Jane Doe - SRE");

        assert!(prompt.contains("Role: DevOps Engineer"));
        assert!(prompt.contains("Core Skills: System design; Production ownership"));
        assert!(prompt.contains("Jane Doe - SRE"));
        assert!(prompt.contains(CONSERVATIVE_SCORING));
        for placeholder in ["{industry}", "{criteria}", "{candidate}", "{conservative_scoring}"] {
            assert!(!prompt.contains(placeholder), "left {placeholder} in prompt");
        }
    }

    #[test]
    fn test_criteria_prompt_embeds_job_description() {
        let context = detect_context(DEVOPS_JD);
        let prompt = fill_context(
            CRITERIA_PROMPT_TEMPLATE,
            &context,
            &[("job_description", DEVOPS_JD)],
        );
        assert!(prompt.contains(DEVOPS_JD));
        assert!(!prompt.contains("{role_subtype}"));
    }

    #[test]
    fn test_candidate_text_is_not_filled_again() {
        let context = detect_context(DEVOPS_JD);
        let prompt =
            build_evaluation_prompt(&context, &fallback_criteria(), "Bio mentions {industry}");
        assert!(prompt.contains("Bio mentions {industry}"));
    }

    #[tokio::test]
    async fn test_prose_completion_yields_neutral_fallback() {
        let scorer = SmartFitScorer::new(fake_llm("Looks strong, maybe an 8?").await);
        let assessment = scorer.evaluate("Jane Doe - SRE at Acme", DEVOPS_JD).await;

        assert!(assessment.fallback);
        assert_eq!(assessment.fit_score, FALLBACK_FIT_SCORE);
        assert_eq!(assessment.criteria, Some(fallback_criteria()));
    }

    #[tokio::test]
    async fn test_echoed_placeholder_score_yields_neutral_fallback() {
        let llm = fake_llm(r#"{"final_score": "calculated weighted score 0-10"}"#).await;
        let assessment = SmartFitScorer::new(llm)
            .evaluate("Jane Doe - SRE at Acme", DEVOPS_JD)
            .await;

        assert!(assessment.fallback);
        assert_eq!(assessment.fit_score, FALLBACK_FIT_SCORE);
    }

    #[tokio::test]
    async fn test_numeric_completion_is_scored() {
        let llm = fake_llm(r#"{"final_score": "8.1 / 10", "rationale": "Owns k8s at scale"}"#).await;
        let assessment = SmartFitScorer::new(llm)
            .evaluate("Jane Doe - SRE at Acme", DEVOPS_JD)
            .await;

        assert!(!assessment.fallback);
        assert_eq!(assessment.fit_score, 8.1);
        assert_eq!(assessment.recommendation, Recommendation::Consider);
    }
}

//! Outreach: LLM-drafted connection messages and mail dispatch.

pub mod mailer;
pub mod prompts;

use tracing::warn;

use crate::llm_client::prompts::fill_template;
use crate::llm_client::{Completion, LlmClient};
use crate::models::{CandidateRecord, JobPosting};
use crate::outreach::prompts::{
    FALLBACK_MESSAGE_TEMPLATE, OUTREACH_PROMPT_TEMPLATE, OUTREACH_SYSTEM,
};

pub use mailer::{EmailResult, Mailer, SmartleadMailer};

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 200;

/// Drafts a short personalized message. Falls back to a fixed template when
/// the LLM call fails or returns nothing.
pub async fn draft_outreach_message(
    llm: &LlmClient,
    candidate: &CandidateRecord,
    job: &JobPosting,
) -> String {
    let prompt = build_outreach_prompt(candidate, job);
    let completion = Completion::new(&prompt)
        .system(OUTREACH_SYSTEM)
        .temperature(TEMPERATURE)
        .max_tokens(MAX_TOKENS);

    match llm.complete(completion).await {
        Ok(message) if !message.trim().is_empty() => message.trim().to_string(),
        Ok(_) => {
            warn!("Outreach draft for {} was empty, using template", candidate.name);
            fallback_message(candidate, job)
        }
        Err(err) => {
            warn!("Outreach draft for {} failed, using template: {}", candidate.name, err);
            fallback_message(candidate, job)
        }
    }
}

fn build_outreach_prompt(candidate: &CandidateRecord, job: &JobPosting) -> String {
    fill_template(
        OUTREACH_PROMPT_TEMPLATE,
        &[
            ("role", job.role.as_str()),
            ("organization", job.organization.as_str()),
            ("description", job.description.as_str()),
            ("name", candidate.name.as_str()),
            (
                "current_role",
                candidate.current_role.as_deref().unwrap_or("Professional"),
            ),
            ("experience", candidate.experience.as_deref().unwrap_or("")),
            ("commonalities", job.commonalities.as_deref().unwrap_or("")),
        ],
    )
}

pub fn fallback_message(candidate: &CandidateRecord, job: &JobPosting) -> String {
    let name = if candidate.name.trim().is_empty() {
        "there"
    } else {
        candidate.name.trim()
    };
    fill_template(
        FALLBACK_MESSAGE_TEMPLATE,
        &[
            ("name", name),
            ("role", job.role.as_str()),
            ("organization", job.organization.as_str()),
        ],
    )
}

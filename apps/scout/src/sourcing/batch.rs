//! Batch runner: score a candidate file against each job posting, keep those at
//! or above the threshold, draft and send outreach, and write one JSON file per job.
//!
//! Jobs run concurrently; everything inside one job is sequential.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::evaluation::FitScorer;
use crate::llm_client::LlmClient;
use crate::models::{CandidateRecord, JobPosting};
use crate::outreach::{draft_outreach_message, Mailer};

pub const DEFAULT_FIT_SCORE_THRESHOLD: f64 = 7.0;

/// Collaborators shared by every job in a batch.
#[derive(Clone)]
pub struct BatchContext {
    pub llm: LlmClient,
    pub scorer: Arc<dyn FitScorer>,
    pub mailer: Arc<dyn Mailer>,
    pub threshold: f64,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobReport {
    pub role: String,
    pub organization: String,
    pub evaluated: usize,
    pub kept: usize,
    pub output_path: PathBuf,
}

pub async fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    read_json(path).await
}

pub async fn load_candidates(path: &Path) -> Result<Vec<CandidateRecord>> {
    read_json(path).await
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Processes one job end to end. Read and write failures end this job only.
pub async fn process_job(
    job: &JobPosting,
    candidates_path: &Path,
    ctx: &BatchContext,
) -> Result<JobReport> {
    info!("Processing job: {} at {}", job.role, job.organization);

    let candidates = load_candidates(candidates_path).await?;
    let evaluated = candidates.len();
    let mut top_candidates = Vec::new();

    for mut candidate in candidates {
        info!("Evaluating candidate: {}", candidate.name);
        let assessment = ctx.scorer.evaluate(&candidate.summary(), &job.description).await;

        // A fallback score was never produced by the model; never email on it.
        if assessment.fallback {
            warn!("Skipping {}: evaluation failed", candidate.name);
            continue;
        }
        if assessment.fit_score < ctx.threshold {
            continue;
        }

        let evaluation_text = assessment
            .raw_response
            .clone()
            .unwrap_or_else(|| assessment.evaluation.rationale.clone());
        candidate.fit_score = Some(assessment.fit_score);
        candidate.evaluation = Some(evaluation_text);

        let message = draft_outreach_message(&ctx.llm, &candidate, job).await;
        let to = candidate.email.clone().unwrap_or_default();
        let email_result = ctx.mailer.send(&to, &job.email_subject(), &message).await;
        if !email_result.is_sent() {
            warn!(
                "Outreach to {} not sent: {}",
                candidate.name,
                email_result.message.as_deref().unwrap_or("unknown error")
            );
        }

        candidate.outreach_message = Some(message);
        candidate.email_result = Some(email_result);
        top_candidates.push(candidate);
    }

    let output_path = ctx.output_dir.join(job.output_file_name());
    write_candidates(&output_path, &top_candidates).await?;
    info!(
        "Saved {} top candidates for {} to {}",
        top_candidates.len(),
        job.role,
        output_path.display()
    );

    Ok(JobReport {
        role: job.role.clone(),
        organization: job.organization.clone(),
        evaluated,
        kept: top_candidates.len(),
        output_path,
    })
}

async fn write_candidates(path: &Path, candidates: &[CandidateRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(candidates)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Runs every job concurrently. Failed jobs are logged and left out of the result.
pub async fn process_jobs(
    jobs: Vec<JobPosting>,
    candidates_path: PathBuf,
    ctx: BatchContext,
) -> Vec<JobReport> {
    let mut set = JoinSet::new();
    for job in jobs {
        let ctx = ctx.clone();
        let candidates_path = candidates_path.clone();
        set.spawn(async move {
            let outcome = process_job(&job, &candidates_path, &ctx).await;
            (job.role, outcome)
        });
    }

    let mut reports = Vec::new();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((_, Ok(report))) => reports.push(report),
            Ok((role, Err(err))) => error!("Job {} failed: {:#}", role, err),
            Err(err) => error!("Job task panicked: {}", err),
        }
    }

    // Completion order is nondeterministic.
    reports.sort_by(|a, b| a.role.cmp(&b.role));
    reports
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::evaluation::RubricFitScorer;
    use crate::outreach::EmailResult;
    use crate::sourcing::pipeline::tests::FakeScorer;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, _body: &str) -> EmailResult {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            EmailResult {
                status: "sent".to_string(),
                message: None,
                response: None,
            }
        }
    }

    fn job(role: &str) -> JobPosting {
        JobPosting {
            organization: "Acme".to_string(),
            website: None,
            role: role.to_string(),
            description: "DevOps developer, CI/CD, Python".to_string(),
            location: "Halifax".to_string(),
            start_date: None,
            category: None,
            commonalities: None,
        }
    }

    const CANDIDATES: &str = r#"[
        {"name": "Strong Sam", "email": "sam@example.com", "github": "sam"},
        {"name": "Borderline Bo", "email": "bo@example.com"},
        {"name": "Weak Wes", "email": "wes@example.com"}
    ]"#;

    fn context(output_dir: &Path, mailer: Arc<RecordingMailer>) -> BatchContext {
        BatchContext {
            llm: LlmClient::disabled(),
            scorer: Arc::new(FakeScorer {
                scores: vec![("Strong Sam", 8.4), ("Borderline Bo", 7.0), ("Weak Wes", 6.9)],
            }),
            mailer,
            threshold: DEFAULT_FIT_SCORE_THRESHOLD,
            output_dir: output_dir.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn test_process_job_applies_threshold_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let candidates_path = dir.path().join("candidate_profiles.json");
        std::fs::write(&candidates_path, CANDIDATES).unwrap();
        let mailer = Arc::new(RecordingMailer::default());
        let out_dir = dir.path().join("out");

        let ctx = context(&out_dir, mailer.clone());

        let report = process_job(&job("DevOps Developer"), &candidates_path, &ctx)
            .await
            .unwrap();

        assert_eq!(report.evaluated, 3);
        assert_eq!(report.kept, 2);
        assert_eq!(report.output_path, out_dir.join("top_candidates_DevOps_Developer.json"));

        let written: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&report.output_path).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0]["name"], "Strong Sam");
        assert_eq!(written[0]["fit_score"], 8.4);
        assert_eq!(written[0]["github"], "sam");
        assert_eq!(written[0]["email_result"]["status"], "sent");
        assert!(written[0]["outreach_message"]
            .as_str()
            .unwrap()
            .starts_with("Hi Strong Sam,"));
        assert_eq!(written[1]["name"], "Borderline Bo");

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(
            *sent,
            vec![
                ("sam@example.com".to_string(), "Opportunity: DevOps Developer at Acme".to_string()),
                ("bo@example.com".to_string(), "Opportunity: DevOps Developer at Acme".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_evaluations_are_skipped_below_any_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let candidates_path = dir.path().join("candidate_profiles.json");
        std::fs::write(&candidates_path, CANDIDATES).unwrap();
        let mailer = Arc::new(RecordingMailer::default());

        let ctx = BatchContext {
            scorer: Arc::new(RubricFitScorer::new(LlmClient::disabled())),
            threshold: 5.0,
            ..context(dir.path(), mailer.clone())
        };

        let report = process_job(&job("DevOps Developer"), &candidates_path, &ctx)
            .await
            .unwrap();

        assert_eq!(report.evaluated, 3);
        assert_eq!(report.kept, 0);
        assert!(mailer.sent.lock().unwrap().is_empty());
        let written: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&report.output_path).unwrap()).unwrap();
        assert!(written.is_empty());
    }

    #[tokio::test]
    async fn test_missing_candidates_file_fails_only_that_job() {
        let dir = tempfile::tempdir().unwrap();
        let mailer = Arc::new(RecordingMailer::default());
        let ctx = context(dir.path(), mailer);

        let err = process_job(&job("SRE"), &dir.path().join("missing.json"), &ctx)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read"));
        assert!(!dir.path().join("top_candidates_SRE.json").exists());
    }

    #[tokio::test]
    async fn test_process_jobs_runs_all_jobs() {
        let dir = tempfile::tempdir().unwrap();
        let candidates_path = dir.path().join("candidates.json");
        std::fs::write(&candidates_path, CANDIDATES).unwrap();
        let mailer = Arc::new(RecordingMailer::default());

        let reports = process_jobs(
            vec![job("Site Reliability Engineer"), job("DevOps Developer")],
            candidates_path,
            context(dir.path(), mailer.clone()),
        )
        .await;

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].role, "DevOps Developer");
        assert!(dir.path().join("top_candidates_Site_Reliability_Engineer.json").exists());
        assert_eq!(mailer.sent.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_load_jobs_parses_postings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(
            &path,
            r#"[{"organization": "Acme", "role": "SRE", "description": "k8s", "category": "Full-Time"}]"#,
        )
        .unwrap();
        let jobs = load_jobs(&path).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].category.as_deref(), Some("Full-Time"));
    }
}

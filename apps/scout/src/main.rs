mod analysis;
mod config;
mod errors;
mod evaluation;
mod llm_client;
mod models;
mod outreach;
mod query;
mod routes;
mod search;
mod sourcing;
mod state;

use std::io::Read;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{analyze_job, detect_context};
use crate::config::Config;
use crate::query::generate_queries;
use crate::routes::build_router;
use crate::sourcing::batch::{load_jobs, process_jobs, BatchContext};
use crate::sourcing::pipeline::{search_candidates, DEFAULT_NUM_CANDIDATES};
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "scout", version, about = "Job-description driven candidate sourcing")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API and web UI (default).
    Serve {
        /// Overrides PORT.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Classify a job description and print the analysis as JSON.
    Analyze {
        /// File with the job description, or `-` for stdin.
        input: String,
    },
    /// Print the generated search queries as JSON.
    Queries {
        /// File with the job description, or `-` for stdin.
        input: String,
        #[arg(long, default_value_t = query::DEFAULT_MAX_QUERIES)]
        max: usize,
    },
    /// Run a full sourcing pass and print the report as JSON.
    Search {
        /// File with the job description, or `-` for stdin.
        input: String,
        #[arg(long, default_value_t = DEFAULT_NUM_CANDIDATES)]
        num: usize,
        /// Also write the report to this path.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Score a candidate file against every job posting and send outreach.
    Batch {
        /// JSON array of job postings.
        #[arg(long)]
        jobs: PathBuf,
        /// JSON array of candidate records.
        #[arg(long, default_value = "./documents/candidate_profiles.json")]
        candidates: PathBuf,
        /// Overrides OUTPUT_DIR.
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Overrides FIT_SCORE_THRESHOLD.
        #[arg(long)]
        threshold: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed numeric values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => serve(config, port).await,
        Command::Analyze { input } => {
            let text = read_input(&input)?;
            print_json(&serde_json::json!({
                "job_analysis": analyze_job(&text),
                "hiring_context": detect_context(&text),
            }))
        }
        Command::Queries { input, max } => {
            let text = read_input(&input)?;
            let analysis = analyze_job(&text);
            print_json(&generate_queries(&analysis, &text, max))
        }
        Command::Search { input, num, out } => {
            let text = read_input(&input)?;
            let state = AppState::from_config(config);
            let report = search_candidates(
                state.search.as_ref(),
                state.fit_scorer.as_ref(),
                &text,
                num,
            )
            .await;
            if let Some(path) = out {
                let json = serde_json::to_string_pretty(&report)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Report written to {}", path.display());
            }
            print_json(&report)
        }
        Command::Batch {
            jobs,
            candidates,
            out_dir,
            threshold,
        } => {
            let postings = load_jobs(&jobs).await?;
            let output_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
            let threshold = threshold.unwrap_or(config.fit_score_threshold);
            let state = AppState::from_config(config);

            info!(
                "Batch: {} jobs, threshold {}, output {}",
                postings.len(),
                threshold,
                output_dir.display()
            );

            let ctx = BatchContext {
                llm: state.llm.clone(),
                scorer: state.rubric_scorer.clone(),
                mailer: state.mailer.clone(),
                threshold,
                output_dir,
            };
            let reports = process_jobs(postings, candidates, ctx).await;
            print_json(&reports)
        }
    }
}

async fn serve(config: Config, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(config.port);
    info!("Starting Scout v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(config);
    info!("LLM client initialized (model: {})", state.llm.model());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Reads a job description from a file, or from stdin when `input` is `-`.
fn read_input(input: &str) -> Result<String> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(input))
            .with_context(|| format!("Failed to read {input}"))?
    };

    if text.trim().is_empty() {
        anyhow::bail!("job description is empty");
    }
    Ok(text)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! Shoreline Analyzer - Main Entry Point
//!
//! Scores hazard reports and triages report images from the command line.
//!
//! Usage:
//!     shoreline-analyzer report report.json
//!     shoreline-analyzer --seed 7 image photo.jpg
//!     shoreline-analyzer batch reports.jsonl
//!     shoreline-analyzer route POST /analyze report.json

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use shoreline::tracing::prefix;
use shoreline::{AnalyzerConfig, Error, Result};
use shoreline_analyzer::{HttpRequest, ReportAnalysisService, Router};
use shoreline_core::{ReportInput, SocialFeedRequest};
use tokio::io::AsyncReadExt;
use tokio::signal;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "shoreline-analyzer")]
#[command(about = "Credibility scoring and image triage for coastal hazard reports")]
#[command(version)]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Seed for the disaster-scene draw (overrides config and environment)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one report (JSON file, or `-` for stdin)
    Report { input: PathBuf },
    /// Assess one image file
    Image { input: PathBuf },
    /// Analyze a JSONL file of reports concurrently
    Batch { input: PathBuf },
    /// Query the social media feed (JSON file, or `-` for stdin)
    Social { input: PathBuf },
    /// Send a request through the router and print the response
    Route {
        method: String,
        path: String,
        body: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    shoreline::tracing::init_with_filter(&args.log_level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = AnalyzerConfig::load(args.config.as_deref())?;
    if args.seed.is_some() {
        config.rng_seed = args.seed;
    }

    info!(
        "{} Starting Shoreline analyzer v{} (seeded: {})",
        prefix::OPEN,
        env!("CARGO_PKG_VERSION"),
        config.rng_seed.is_some()
    );

    let service = Arc::new(ReportAnalysisService::new(&config));

    match args.command {
        Command::Report { input } => {
            let report: ReportInput = serde_json::from_slice(&read_input(&input).await?)?;
            let result = service.analyze_report(&report)?;
            print_json(&result)
        }
        Command::Image { input } => {
            let bytes = read_input(&input).await?;
            let assessment = service.analyze_image(&bytes)?;
            print_json(&assessment)
        }
        Command::Social { input } => {
            let request: SocialFeedRequest = serde_json::from_slice(&read_input(&input).await?)?;
            let result = service.social_feed(&request)?;
            print_json(&result)
        }
        Command::Batch { input } => {
            let raw = read_input(&input).await?;
            let text = String::from_utf8(raw)
                .map_err(|e| Error::Config(format!("batch file is not UTF-8: {}", e)))?;

            tokio::select! {
                outcome = run_batch(service, &text) => outcome,
                _ = shutdown_signal() => {
                    warn!("{} Batch cancelled, in-flight results discarded", prefix::CLOSE);
                    Err(Error::Internal("batch cancelled".to_string()))
                }
            }
        }
        Command::Route { method, path, body } => {
            let body = match body {
                Some(path) => read_input(&path).await?,
                None => Vec::new(),
            };
            let router = Router::new(service);
            let response = router.handle(&HttpRequest::new(method.to_uppercase(), path, body));

            println!("{}", response.status_code);
            println!("{}", String::from_utf8_lossy(&response.body));
            if response.status_code >= 400 {
                return Err(Error::Internal(format!(
                    "request failed with status {}",
                    response.status_code
                )));
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct BatchFailure {
    line: usize,
    error: String,
}

/// One blocking task per report; output follows input order.
async fn run_batch(service: Arc<ReportAnalysisService>, text: &str) -> Result<()> {
    let mut tasks = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let service = Arc::clone(&service);
        let line = line.to_string();
        let task = tokio::task::spawn_blocking(move || -> Result<serde_json::Value> {
            let report: ReportInput = serde_json::from_str(&line)?;
            let result = service.analyze_report(&report)?;
            Ok(serde_json::to_value(result)?)
        });
        tasks.push((index + 1, task));
    }

    let total = tasks.len();
    let mut failed = 0;
    for (line, task) in tasks {
        let outcome = task
            .await
            .map_err(|e| Error::Internal(format!("analysis task failed: {}", e)))?;
        match outcome {
            Ok(value) => println!("{}", value),
            Err(e) => {
                failed += 1;
                error!("Line {}: {}", line, e);
                let failure = BatchFailure {
                    line,
                    error: e.to_string(),
                };
                println!("{}", serde_json::to_string(&failure)?);
            }
        }
    }

    info!("{} Batch complete: {} reports, {} failed", prefix::CLOSE, total, failed);
    if failed > 0 {
        return Err(Error::Internal(format!("{} of {} reports failed", failed, total)));
    }
    Ok(())
}

async fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        return Ok(buf);
    }
    Ok(tokio::fs::read(path).await?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("{} Received Ctrl+C", prefix::CLOSE),
        _ = terminate => info!("{} Received terminate signal", prefix::CLOSE),
    }
}

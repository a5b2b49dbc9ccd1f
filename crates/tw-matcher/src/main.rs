use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use tw_common::api::{
    job_from_payload, profile_from_payload, JobPayload, MatchResultDto, ProfilePayload,
};
use tw_common::logging::init_tracing;
use tw_common::matching::pipeline::{MatcherConfig, MatcherEngine};
use tw_common::matching::MatchResult;
use tw_common::normalize::ConvertError;

/// 求人リストとプロフィールのJSONを読み込み、単独・ペアのマッチを表示する
#[derive(Debug, Parser)]
#[command(name = "tw-matcher", about = "Rank single jobs and workable job pairs for a profile")]
struct Args {
    /// Path to a JSON array of job payloads
    #[arg(long)]
    jobs: PathBuf,

    /// Path to a user profile JSON object
    #[arg(long)]
    profile: PathBuf,

    /// Override the single-match limit
    #[arg(long)]
    singles: Option<usize>,

    /// Override the pair-match limit
    #[arg(long)]
    pairs: Option<usize>,

    /// Emit results as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid input in {path}: {source}")]
    Convert { path: String, source: ConvertError },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing("tw-matcher");

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tw-matcher: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let job_payloads: Vec<JobPayload> = read_json(&args.jobs)?;
    let profile_payload: ProfilePayload = read_json(&args.profile)?;

    let mut jobs = Vec::with_capacity(job_payloads.len());
    for payload in job_payloads {
        jobs.push(job_from_payload(payload).map_err(|source| CliError::Convert {
            path: args.jobs.display().to_string(),
            source,
        })?);
    }
    let user = profile_from_payload(profile_payload).map_err(|source| CliError::Convert {
        path: args.profile.display().to_string(),
        source,
    })?;

    let mut config = MatcherConfig::from_env();
    if let Some(singles) = args.singles {
        config.single_limit = singles;
    }
    if let Some(pairs) = args.pairs {
        config.pair_limit = pairs;
    }

    let engine = MatcherEngine::new(config);
    let singles = engine.match_single_jobs(&jobs, &user);
    let pairs = engine.match_job_pairs(&jobs, &user);
    info!(
        jobs = jobs.len(),
        singles = singles.len(),
        pairs = pairs.len(),
        "match run complete"
    );

    if args.json {
        let report = serde_json::json!({
            "single_matches": singles.iter().map(MatchResultDto::from).collect::<Vec<_>>(),
            "pair_matches": pairs.iter().map(MatchResultDto::from).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report).expect("report is serializable"));
        return Ok(());
    }

    print_section("Single matches", &singles);
    print_section("Pair matches", &pairs);
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.display().to_string(),
        source,
    })
}

fn print_section(heading: &str, results: &[MatchResult]) {
    println!("{heading} ({}):", results.len());
    if results.is_empty() {
        println!("  none");
    }
    for (rank, result) in results.iter().enumerate() {
        println!("  #{} score {:.1}", rank + 1, result.score);
        for job in &result.jobs {
            println!("    {}", job.summary());
        }
        for insight in &result.insights {
            println!("    - {}: {}", insight.title, insight.detail);
        }
    }
    println!();
}

//! Scan command: run the engine, render, apply the score threshold

use crate::cli::resolve_format;
use anyhow::{Context, Result};
use console::style;
use repo_scorecard::config::load_project_config;
use repo_scorecard::reporters::{self, OutputFormat};
use repo_scorecard::{ScanEngine, ScorecardReport};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Flags relevant to a scan, before project defaults are applied
#[derive(Debug, Default)]
pub(super) struct ScanArgs {
    pub path: PathBuf,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub min_score: Option<u32>,
}

pub(super) fn run(args: &ScanArgs) -> Result<ExitCode> {
    let project_config = load_project_config(&args.path);
    let format = resolve_format(args.format.as_deref(), project_config.default_format())?;
    let min_score = args.min_score.or(project_config.defaults.min_score);
    let output = args.output.clone().or_else(|| project_config.defaults.output.clone());

    let report = ScanEngine::new().scan(&args.path)?;
    let rendered = render(&report, format, output.is_some())?;

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write scorecard to {}", path.display()))?;
            eprintln!("Scorecard written to {}", path.display());
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(threshold_exit_code(report.score, min_score))
}

/// Render for stdout, or plain (no terminal styling) when writing a file
fn render(report: &ScorecardReport, format: OutputFormat, to_file: bool) -> Result<String> {
    if to_file {
        reporters::report_plain(report, format)
    } else {
        reporters::report_with_format(report, format)
    }
}

/// Exit code for the CI gate: 1 when the score is below `min_score`
fn threshold_exit_code(score: u32, min_score: Option<u32>) -> ExitCode {
    if below_threshold(score, min_score) {
        eprintln!(
            "{} Score {} is below the minimum {}",
            style("✗").red(),
            score,
            min_score.unwrap_or_default()
        );
        return ExitCode::from(1);
    }
    if let Some(min) = min_score {
        debug!("Score {} meets minimum {}", score, min);
    }
    ExitCode::SUCCESS
}

fn below_threshold(score: u32, min_score: Option<u32>) -> bool {
    min_score.is_some_and(|min| score < min)
}

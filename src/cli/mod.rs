//! CLI command definitions and handlers

mod checks;
mod scan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use repo_scorecard::reporters::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

/// repo-scorecard - weighted health score for a local repository
///
/// 100% LOCAL - nothing leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "repo-scorecard")]
#[command(
    version,
    about = "Score a local repository 0-100 on README, license, CI, tests, linters, Docker, security, observability and release hygiene",
    after_help = "\
Examples:
  repo-scorecard                                   Scan the current directory, JSON output
  repo-scorecard --path ../app --format text       Human-readable table
  repo-scorecard --format md -o scorecard.md       Markdown for PR comments
  repo-scorecard --min-score 50                    Exit 1 if the score is below 50 (CI mode)
  repo-scorecard checks --format text              List the check catalog

Exit codes: 0 ok, 1 score below --min-score, 2 scan error (e.g. path missing)"
)]
pub struct Cli {
    /// Path to the repository (default: current directory)
    #[arg(long, global = true, default_value = ".")]
    pub path: PathBuf,

    /// Output format: json, text, markdown (or md) [default: json]
    #[arg(long, short = 'f', visible_alias = "out", global = true, value_parser = ["json", "text", "markdown", "md"])]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o', global = true)]
    pub output: Option<PathBuf>,

    /// Exit with code 1 if the score is below N
    #[arg(long, global = true, value_name = "N", env = "REPO_SCORECARD_MIN_SCORE")]
    pub min_score: Option<u32>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the repository and print its scorecard (default)
    Scan,

    /// List the checks, their ids and weights
    Checks,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Some(Commands::Checks) => checks::run(cli.format.as_deref()),
        Some(Commands::Scan) | None => scan::run(&scan::ScanArgs {
            path: cli.path,
            format: cli.format,
            output: cli.output,
            min_score: cli.min_score,
        }),
    }
}

/// Pick the output format: explicit flag, then project default, then JSON
fn resolve_format(flag: Option<&str>, configured: Option<OutputFormat>) -> Result<OutputFormat> {
    match flag {
        Some(raw) => OutputFormat::from_str(raw),
        None => Ok(configured.unwrap_or_default()),
    }
}

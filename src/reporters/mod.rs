//! Output reporters for scorecard results
//!
//! Supports multiple output formats:
//! - `json` - Machine-readable JSON (the contract consumed by CI dashboards)
//! - `text` - Bordered terminal table, one row per check
//! - `markdown` - GitHub-flavored Markdown for PR comments and job summaries

mod json;
mod markdown;
mod text;

use crate::models::ScorecardReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" | "table" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: json, text, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a scorecard in the named format
pub fn report(report: &ScorecardReport, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt)
}

/// Render a scorecard using an OutputFormat enum
pub fn report_with_format(report: &ScorecardReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::render(report),
        OutputFormat::Text => text::render(report),
        OutputFormat::Markdown => markdown::render(report),
    }
}

/// Render a scorecard for a file: never emits terminal escape codes
pub fn report_plain(report: &ScorecardReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_with_color(report, Some(false)),
        other => report_with_format(report, other),
    }
}

/// Cut to at most `max` chars without splitting a UTF-8 sequence
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

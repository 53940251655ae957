//! Text (terminal) reporter: summary line plus a bordered check table

use super::truncate_chars;
use crate::models::ScorecardReport;
use anyhow::Result;
use console::{style, StyledObject};
use std::fmt::Display;

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 26;
const WEIGHT_WIDTH: usize = 6;
const OK_WIDTH: usize = 4;
const EVIDENCE_WIDTH: usize = 42;

/// Render report as a terminal table, styled when stdout is a terminal
pub fn render(report: &ScorecardReport) -> Result<String> {
    render_with_color(report, None)
}

/// Render report as a terminal table.
///
/// `color` forces styling on or off; `None` follows terminal detection.
pub fn render_with_color(report: &ScorecardReport, color: Option<bool>) -> Result<String> {
    let mut out = String::new();
    let sep = separator();

    out.push_str(&format!(
        "{} {}\n",
        paint(style("repo-scorecard").bold(), color),
        report.repo_path.display()
    ));
    out.push_str(&format!(
        "Score: {}  Passed: {}  Failed: {}  ({})\n",
        paint(style(format!("{}/{}", report.score, report.max_score())).bold(), color),
        report.passed,
        report.failed,
        report.timestamp_string()
    ));

    out.push_str(&sep);
    out.push_str(&format!(
        "| {:<ID_WIDTH$} | {:<NAME_WIDTH$} | {:^WEIGHT_WIDTH$} | {:^OK_WIDTH$} | {:<EVIDENCE_WIDTH$} |\n",
        "ID", "Name", "Weight", "OK", "Evidence"
    ));
    out.push_str(&sep);

    for check in &report.checks {
        // Pad before styling so ANSI codes don't break the column widths
        let ok_cell = format!("{:^OK_WIDTH$}", if check.passed { "yes" } else { "no" });
        let ok_cell = if check.passed {
            paint(style(ok_cell).green(), color)
        } else {
            paint(style(ok_cell).red(), color)
        };
        let evidence = if check.evidence.is_empty() {
            "-"
        } else {
            check.evidence.as_str()
        };
        out.push_str(&format!(
            "| {:<ID_WIDTH$} | {:<NAME_WIDTH$} | {:^WEIGHT_WIDTH$} | {} | {:<EVIDENCE_WIDTH$} |\n",
            truncate_chars(&check.id, ID_WIDTH),
            truncate_chars(&check.name, NAME_WIDTH),
            check.weight,
            ok_cell,
            truncate_chars(evidence, EVIDENCE_WIDTH),
        ));
    }
    out.push_str(&sep);

    Ok(out)
}

fn paint<D: Display>(styled: StyledObject<D>, color: Option<bool>) -> String {
    match color {
        Some(enabled) => styled.force_styling(enabled).to_string(),
        None => styled.to_string(),
    }
}

fn separator() -> String {
    let cols = [ID_WIDTH, NAME_WIDTH, WEIGHT_WIDTH, OK_WIDTH, EVIDENCE_WIDTH];
    let mut line = String::from("+");
    for width in cols {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

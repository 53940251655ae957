//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suited to pull request comments and CI job summaries
//! (`$GITHUB_STEP_SUMMARY`).

use crate::models::ScorecardReport;
use anyhow::Result;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &ScorecardReport) -> Result<String> {
    let mut md = String::new();

    md.push_str("# Repository Scorecard\n\n");
    md.push_str(&format!(
        "**Score: {}/{}** | Passed: {} | Failed: {}\n\n",
        report.score,
        report.max_score(),
        report.passed,
        report.failed
    ));
    md.push_str(&format!(
        "Repository: `{}`  \nGenerated: {}\n\n",
        report.repo_path.display(),
        report.timestamp_string()
    ));

    md.push_str("| Check | Weight | Status | Evidence |\n");
    md.push_str("|-------|-------:|:------:|----------|\n");
    for check in &report.checks {
        let status = if check.passed { "✅" } else { "❌" };
        let evidence = if check.evidence.is_empty() {
            "-".to_string()
        } else {
            format!("`{}`", escape_cell(&check.evidence))
        };
        md.push_str(&format!(
            "| {} (`{}`) | {} | {} | {} |\n",
            escape_cell(&check.name),
            check.id,
            check.weight,
            status,
            evidence
        ));
    }

    Ok(md)
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

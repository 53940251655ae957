//! JSON reporter
//!
//! Outputs the full ScorecardReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or CI dashboards.

use crate::models::ScorecardReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ScorecardReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

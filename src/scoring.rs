//! Score aggregation
//!
//! ```text
//! score  = Σ weight_i  for every check i that passed
//! passed = |{ i : passed_i }|
//! failed = |checks| - passed
//! ```
//!
//! No normalization is applied: a catalog whose weights do not sum to 100
//! produces scores on its own scale, which may exceed 100.

use crate::models::{CheckResult, ScorecardReport};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Build the scorecard from ordered check results. Pure; performs no I/O.
pub fn aggregate(repo_path: &Path, checks: Vec<CheckResult>, timestamp: DateTime<Utc>) -> ScorecardReport {
    let score = checks.iter().map(CheckResult::points).sum();
    let passed = checks.iter().filter(|c| c.passed).count();
    let failed = checks.len() - passed;

    ScorecardReport {
        repo_path: repo_path.to_path_buf(),
        score,
        passed,
        failed,
        checks,
        timestamp,
    }
}

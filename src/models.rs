//! Core data models for repo-scorecard
//!
//! These are the values the engine hands to reporters. Field names are part of
//! the JSON contract consumed by CI dashboards, so renames are breaking changes.

use crate::checks::Check;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

/// Outcome of evaluating one check against a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Stable short identifier (e.g. `readme`)
    pub id: String,
    /// Display label
    pub name: String,
    /// Points awarded when the check passes
    pub weight: u32,
    pub passed: bool,
    /// Path or matched text that satisfied the check; empty on failure
    pub evidence: String,
}

impl CheckResult {
    /// Create a passing result carrying its evidence
    pub fn pass(check: &dyn Check, evidence: impl Into<String>) -> Self {
        Self {
            id: check.id().to_string(),
            name: check.name().to_string(),
            weight: check.weight(),
            passed: true,
            evidence: evidence.into(),
        }
    }

    /// Create a failing result (never carries evidence)
    pub fn fail(check: &dyn Check) -> Self {
        Self {
            id: check.id().to_string(),
            name: check.name().to_string(),
            weight: check.weight(),
            passed: false,
            evidence: String::new(),
        }
    }

    /// Points this result contributes to the score
    pub fn points(&self) -> u32 {
        if self.passed {
            self.weight
        } else {
            0
        }
    }
}

/// Aggregate scorecard for one scanned repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardReport {
    /// Absolute, canonical path that was scanned
    pub repo_path: PathBuf,
    pub score: u32,
    pub passed: usize,
    pub failed: usize,
    /// Results in catalog registration order
    pub checks: Vec<CheckResult>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ScorecardReport {
    /// Highest score reachable with this report's checks
    pub fn max_score(&self) -> u32 {
        self.checks.iter().map(|c| c.weight).sum()
    }

    /// Look up a result by check id
    pub fn check(&self, id: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// Generation time as `YYYY-MM-DDTHH:MM:SSZ`
    pub fn timestamp_string(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(ts))
}

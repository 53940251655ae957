//! Check runner and scan engine
//!
//! `CheckRunner` evaluates a fixed, ordered catalog against one walked tree.
//! A check that errors or panics becomes a failed result for that check
//! only; the remaining checks always run.
//!
//! `ScanEngine` composes walker, runner and aggregator into one call.

use crate::checks::{self, Check};
use crate::error::ScanResult;
use crate::models::{CheckResult, ScorecardReport};
use crate::scoring;
use crate::walker::{IgnoreSet, RepoTree};
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Runs every check of a catalog exactly once, in registration order
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
    /// Runner over the built-in catalog
    pub fn new() -> Self {
        Self::with_checks(checks::catalog())
    }

    /// Runner over an explicit, ordered list of checks
    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = checks.iter().map(|c| c.id()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "check ids must be unique"
        );
        Self { checks }
    }

    pub fn checks(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    /// Evaluate all checks against `tree`; one result per check, catalog order
    pub fn run(&self, tree: &RepoTree) -> Vec<CheckResult> {
        self.checks
            .iter()
            .map(|check| run_single_check(check.as_ref(), tree))
            .collect()
    }
}

impl Default for CheckRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one check, converting errors and panics into a failed result
fn run_single_check(check: &dyn Check, tree: &RepoTree) -> CheckResult {
    let id = check.id();
    let start = Instant::now();

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| check.evaluate(tree)));
    let duration = start.elapsed().as_millis();

    match outcome {
        Ok(Ok(Some(evidence))) => {
            debug!("Check {} passed in {}ms: {}", id, duration, evidence);
            CheckResult::pass(check, evidence)
        }
        Ok(Ok(None)) => {
            debug!("Check {} failed in {}ms", id, duration);
            CheckResult::fail(check)
        }
        Ok(Err(e)) => {
            warn!("Check {} errored, counting as failed: {:#}", id, e);
            CheckResult::fail(check)
        }
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            error!("Check {} panicked, counting as failed: {}", id, panic_msg);
            CheckResult::fail(check)
        }
    }
}

/// Walk, check and aggregate a repository in one call
#[derive(Default)]
pub struct ScanEngine {
    ignore_set: IgnoreSet,
    runner: CheckRunner,
}

impl ScanEngine {
    /// Engine with the default ignore set and built-in catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_set(mut self, ignore_set: IgnoreSet) -> Self {
        self.ignore_set = ignore_set;
        self
    }

    pub fn with_runner(mut self, runner: CheckRunner) -> Self {
        self.runner = runner;
        self
    }

    pub fn runner(&self) -> &CheckRunner {
        &self.runner
    }

    /// Scan `path` and build its scorecard.
    ///
    /// Fails only when the root is missing, not a directory, or unreadable.
    pub fn scan(&self, path: &Path) -> ScanResult<ScorecardReport> {
        let start = Instant::now();
        let tree = RepoTree::walk(path, &self.ignore_set)?;
        for skipped in tree.skipped() {
            warn!("Subtree skipped (unreadable): {}", skipped.display());
        }

        let results = self.runner.run(&tree);
        let report = scoring::aggregate(tree.root(), results, Utc::now());

        info!(
            "Scanned {} in {}ms: score {} ({} passed, {} failed)",
            report.repo_path.display(),
            start.elapsed().as_millis(),
            report.score,
            report.passed,
            report.failed
        );
        Ok(report)
    }
}

//! repo-scorecard - local repository health scorecard
//!
//! Walks a repository, runs a fixed catalog of weighted presence/content
//! checks (README, license, CI, tests, linters, Docker, security policy,
//! OpenTelemetry, release hygiene) and aggregates them into a 0-100 score.
//!
//! ```no_run
//! let report = repo_scorecard::scan(std::path::Path::new(".")).unwrap();
//! println!("{} / {}", report.score, report.max_score());
//! ```

pub mod checks;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod walker;

pub use checks::{catalog, Check};
pub use engine::{CheckRunner, ScanEngine};
pub use error::{ScanError, ScanResult};
pub use models::{CheckResult, ScorecardReport};
pub use walker::{IgnoreSet, RepoTree};

use std::path::Path;

/// Scan `path` with the default ignore set and catalog
pub fn scan(path: &Path) -> ScanResult<ScorecardReport> {
    ScanEngine::new().scan(path)
}

//! Fatal scan errors
//!
//! Only problems with the scan root itself abort a run. Everything below the
//! root degrades to a failed check instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a scorecard from being produced
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Repository path does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Cannot read repository directory {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ScanResult<T> = Result<T, ScanError>;

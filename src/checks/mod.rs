//! Check catalog
//!
//! Every check is an independent, read-only predicate over a walked
//! [`RepoTree`]. A check passes by returning `Some(evidence)` and fails by
//! returning `None`; errors are turned into failures by the runner.
//!
//! The catalog is fixed at build time. To add a check, implement [`Check`]
//! in a new module and append it to [`catalog`]. Appending keeps the
//! positions of existing results stable for downstream consumers.
//!
//! | id            | weight |
//! |---------------|--------|
//! | readme        | 10     |
//! | license       | 5      |
//! | codeowners    | 10     |
//! | ci            | 15     |
//! | tests         | 15     |
//! | linter        | 10     |
//! | docker        | 10     |
//! | security      | 10     |
//! | observability | 5      |
//! | release       | 10     |

mod ci;
mod codeowners;
mod docker;
mod license;
mod linter;
mod observability;
mod readme;
mod release;
mod security;
mod test_presence;

pub use ci::CiCheck;
pub use codeowners::CodeownersCheck;
pub use docker::DockerCheck;
pub use license::LicenseCheck;
pub use linter::LinterCheck;
pub use observability::{ObservabilityCheck, MAX_INSPECTED_FILES};
pub use readme::ReadmeCheck;
pub use release::ReleaseCheck;
pub use security::SecurityCheck;
pub use test_presence::TestsCheck;

use crate::walker::{RepoTree, TreeEntry};
use anyhow::Result;
use std::io::Read;
use std::path::Path;

/// Maximum bytes read from any single inspected file
pub const MAX_READ_BYTES: u64 = 64 * 1024;

/// A weighted repository health check
///
/// # Example Implementation
///
/// ```ignore
/// pub struct NoticeCheck;
///
/// impl Check for NoticeCheck {
///     fn id(&self) -> &'static str { "notice" }
///     fn name(&self) -> &'static str { "NOTICE present" }
///     fn weight(&self) -> u32 { 5 }
///
///     fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
///         Ok(tree.file("NOTICE").map(|e| e.rel_path.clone()))
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Stable short identifier, unique within the catalog
    fn id(&self) -> &'static str;

    /// Human-readable label
    fn name(&self) -> &'static str;

    /// Points awarded on pass
    fn weight(&self) -> u32;

    /// Evaluate against the walked tree.
    ///
    /// Returns `Some(evidence)` on pass and `None` on fail. Missing or
    /// malformed files must yield `None`, not an error.
    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>>;
}

/// The built-in checks, in registration order
pub fn catalog() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(ReadmeCheck),
        Box::new(LicenseCheck),
        Box::new(CodeownersCheck),
        Box::new(CiCheck),
        Box::new(TestsCheck),
        Box::new(LinterCheck),
        Box::new(DockerCheck),
        Box::new(SecurityCheck),
        Box::new(ObservabilityCheck),
        Box::new(ReleaseCheck),
    ]
}

/// Read at most [`MAX_READ_BYTES`] from a file
pub(crate) fn read_capped(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = std::fs::File::open(path)?;
    let mut buf = Vec::new();
    file.take(MAX_READ_BYTES).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Text of an inspected file, capped at [`MAX_READ_BYTES`]
#[derive(Debug)]
pub(crate) struct FileText {
    /// Lossy UTF-8 with any leading byte-order mark removed
    pub text: String,
    /// The file is longer than [`MAX_READ_BYTES`]; `text` is only a prefix
    pub truncated: bool,
}

/// Read a tree entry as text.
///
/// Unreadable files yield `None` so callers can move on to the next candidate.
pub(crate) fn read_text(tree: &RepoTree, entry: &TreeEntry) -> Option<FileText> {
    let path = tree.abs_path(entry);
    let read = std::fs::metadata(&path).and_then(|meta| Ok((meta.len(), read_capped(&path)?)));
    match read {
        Ok((len, bytes)) => {
            let text = String::from_utf8_lossy(&bytes);
            let text = text.strip_prefix('\u{feff}').unwrap_or(&*text).to_string();
            Some(FileText {
                text,
                truncated: len > MAX_READ_BYTES,
            })
        }
        Err(e) => {
            tracing::debug!("Skipping unreadable file {}: {}", entry.rel_path, e);
            None
        }
    }
}

/// Table name of a TOML `[table]` or `[[array]]` header line
pub(crate) fn toml_table_header(line: &str) -> Option<&str> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    let inner = inner
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(inner);
    Some(inner.trim())
}

/// First existing file among exact relative paths
pub(crate) fn first_file<'a>(tree: &'a RepoTree, candidates: &[&str]) -> Option<&'a TreeEntry> {
    candidates.iter().find_map(|rel| tree.file(rel))
}

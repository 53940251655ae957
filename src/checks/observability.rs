//! OpenTelemetry adoption hint
//!
//! Looks for the literal `opentelemetry` (ASCII case-insensitive) in
//! dependency manifests and structured config files. The candidate set is an
//! explicit allow-list so results do not depend on arbitrary source files:
//!
//! - known manifests by name: `package.json`, `pyproject.toml`,
//!   `requirements*.txt`, `setup.py`, `setup.cfg`, `Pipfile`, `pom.xml`,
//!   `build.gradle(.kts)`, `Cargo.toml`, `go.mod`, `Gemfile`,
//!   `composer.json`, `packages.config`, `Directory.Packages.props`
//! - any file with a config extension: json, toml, yml, yaml, xml, gradle,
//!   csproj, props, ini, cfg, properties
//!
//! At most [`MAX_INSPECTED_FILES`] candidates are read, each capped at
//! [`MAX_READ_BYTES`](super::MAX_READ_BYTES).

use super::{read_capped, Check};
use crate::walker::{RepoTree, TreeEntry};
use anyhow::Result;
use memchr::memmem;
use tracing::debug;

/// Upper bound on candidate files read per scan
pub const MAX_INSPECTED_FILES: usize = 2_000;

const NEEDLE: &[u8] = b"opentelemetry";

/// Evidence snippets are cut to this many characters
const MAX_SNIPPET_CHARS: usize = 80;

const MANIFEST_NAMES: &[&str] = &[
    "package.json",
    "pyproject.toml",
    "setup.py",
    "setup.cfg",
    "pipfile",
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
    "cargo.toml",
    "go.mod",
    "gemfile",
    "composer.json",
    "packages.config",
    "directory.packages.props",
];

const CONFIG_EXTENSIONS: &[&str] = &[
    "json", "toml", "yml", "yaml", "xml", "gradle", "csproj", "props", "ini", "cfg", "properties",
];

pub struct ObservabilityCheck;

impl Check for ObservabilityCheck {
    fn id(&self) -> &'static str {
        "observability"
    }

    fn name(&self) -> &'static str {
        "OpenTelemetry in deps/config"
    }

    fn weight(&self) -> u32 {
        5
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        let finder = memmem::Finder::new(NEEDLE);
        let candidates = tree.files().filter(|e| is_candidate(e)).take(MAX_INSPECTED_FILES);

        for entry in candidates {
            let bytes = match read_capped(&tree.abs_path(entry)) {
                Ok(bytes) => bytes,
                Err(e) => {
                    debug!("Skipping unreadable file {}: {}", entry.rel_path, e);
                    continue;
                }
            };
            let lowered = bytes.to_ascii_lowercase();
            if let Some(pos) = finder.find(&lowered) {
                return Ok(Some(format!("{}: {}", entry.rel_path, line_at(&bytes, pos))));
            }
        }
        Ok(None)
    }
}

fn is_candidate(entry: &TreeEntry) -> bool {
    let name = entry.name().to_ascii_lowercase();
    if MANIFEST_NAMES.contains(&name.as_str()) {
        return true;
    }
    if name.starts_with("requirements") && name.ends_with(".txt") {
        return true;
    }
    entry
        .extension()
        .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext.as_str()))
}

/// Trimmed line containing byte offset `pos`, cut to [`MAX_SNIPPET_CHARS`]
fn line_at(bytes: &[u8], pos: usize) -> String {
    let start = memchr::memrchr(b'\n', &bytes[..pos]).map_or(0, |i| i + 1);
    let end = memchr::memchr(b'\n', &bytes[pos..]).map_or(bytes.len(), |i| pos + i);
    let line = String::from_utf8_lossy(&bytes[start..end]);
    line.trim().chars().take(MAX_SNIPPET_CHARS).collect()
}

//! Release hygiene: changelog or a declared package version

use super::{read_text, toml_table_header, Check, FileText, MAX_READ_BYTES};
use crate::walker::{RepoTree, TreeEntry};
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const CHANGELOG: &str = "CHANGELOG.md";

/// Passes on a root `CHANGELOG.md`, a `version` in the root `package.json`
/// or `pyproject.toml`, or a `<Version>` element in any `*.csproj`.
///
/// Manifests are parsed structurally. One larger than [`MAX_READ_BYTES`]
/// cannot be, so its leading bytes are searched for the version line instead.
pub struct ReleaseCheck;

impl Check for ReleaseCheck {
    fn id(&self) -> &'static str {
        "release"
    }

    fn name(&self) -> &'static str {
        "Release hygiene"
    }

    fn weight(&self) -> u32 {
        10
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        if let Some(entry) = tree.file(CHANGELOG) {
            return Ok(Some(entry.rel_path.clone()));
        }

        if let Some(entry) = tree.file("package.json") {
            if let Some(version) = read_text(tree, entry).and_then(|t| package_json_version(&t)) {
                return Ok(Some(version_evidence(entry, &version)));
            }
        }

        if let Some(entry) = tree.file("pyproject.toml") {
            if let Some(version) = read_text(tree, entry).and_then(|t| pyproject_version(&t)) {
                return Ok(Some(version_evidence(entry, &version)));
            }
        }

        for entry in tree.files().filter(|e| e.extension().as_deref() == Some("csproj")) {
            if let Some(version) = read_text(tree, entry).and_then(|f| csproj_version(&f.text)) {
                return Ok(Some(version_evidence(entry, &version)));
            }
        }

        Ok(None)
    }
}

fn version_evidence(entry: &TreeEntry, version: &str) -> String {
    format!("{} (version {})", entry.rel_path, version)
}

fn non_empty(version: &str) -> Option<String> {
    let version = version.trim();
    (!version.is_empty()).then(|| version.to_string())
}

fn package_json_version(file: &FileText) -> Option<String> {
    match serde_json::from_str::<serde_json::Value>(&file.text) {
        Ok(doc) => doc.get("version").and_then(|v| v.as_str()).and_then(non_empty),
        Err(_) if file.truncated => {
            debug!("package.json exceeds {} bytes, searching its prefix", MAX_READ_BYTES);
            static VERSION_FIELD: OnceLock<Regex> = OnceLock::new();
            let re = VERSION_FIELD
                .get_or_init(|| Regex::new(r#""version"\s*:\s*"([^"]*)""#).expect("valid regex"));
            re.captures(&file.text).and_then(|c| non_empty(&c[1]))
        }
        Err(e) => {
            debug!("Ignoring malformed package.json: {}", e);
            None
        }
    }
}

/// `[project].version` (PEP 621) or `[tool.poetry].version`
fn pyproject_version(file: &FileText) -> Option<String> {
    let doc: toml::Table = match file.text.parse() {
        Ok(doc) => doc,
        Err(_) if file.truncated => {
            debug!("pyproject.toml exceeds {} bytes, searching its prefix", MAX_READ_BYTES);
            return pyproject_prefix_version(&file.text);
        }
        Err(e) => {
            debug!("Ignoring malformed pyproject.toml: {}", e);
            return None;
        }
    };
    let project = doc.get("project").and_then(|p| p.get("version"));
    let poetry = doc
        .get("tool")
        .and_then(|t| t.get("poetry"))
        .and_then(|p| p.get("version"));
    project
        .or(poetry)
        .and_then(|v| v.as_str())
        .and_then(non_empty)
}

/// Line scan for `version = "..."` inside `[project]` or `[tool.poetry]`
fn pyproject_prefix_version(text: &str) -> Option<String> {
    static VERSION_LINE: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_LINE
        .get_or_init(|| Regex::new(r#"^\s*version\s*=\s*["']([^"']*)["']"#).expect("valid regex"));

    let mut table = "";
    for line in text.lines() {
        if let Some(header) = toml_table_header(line) {
            table = header;
            continue;
        }
        if matches!(table, "project" | "tool.poetry") {
            if let Some(caps) = re.captures(line) {
                return non_empty(&caps[1]);
            }
        }
    }
    None
}

fn csproj_version(text: &str) -> Option<String> {
    static VERSION_ELEMENT: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_ELEMENT.get_or_init(|| {
        Regex::new(r"(?i)<Version>\s*(\d[\w.\-+]*)\s*</Version>").expect("valid regex")
    });
    re.captures(text).map(|c| c[1].to_string())
}

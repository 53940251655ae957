//! Linter / formatter configuration presence

use super::{read_text, toml_table_header, Check, MAX_READ_BYTES};
use crate::walker::{RepoTree, TreeEntry};
use anyhow::Result;
use tracing::debug;

/// `[tool.*]` tables in pyproject.toml that count as linter config
const PYPROJECT_TOOLS: &[&str] = &["ruff", "black", "isort"];

/// Passes on the first linter/formatter config found anywhere in the tree:
/// `.editorconfig`, `.eslintrc*`, `ruff.toml`, `stylecop.json`, or a
/// `pyproject.toml` configuring ruff, black or isort.
pub struct LinterCheck;

impl Check for LinterCheck {
    fn id(&self) -> &'static str {
        "linter"
    }

    fn name(&self) -> &'static str {
        "Linter config"
    }

    fn weight(&self) -> u32 {
        10
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        for entry in tree.files() {
            let name = entry.name().to_ascii_lowercase();
            let matched = match name.as_str() {
                ".editorconfig" | "ruff.toml" | ".ruff.toml" | "stylecop.json" => true,
                "pyproject.toml" => pyproject_has_linter(tree, entry),
                n => n.starts_with(".eslintrc"),
            };
            if matched {
                return Ok(Some(entry.rel_path.clone()));
            }
        }
        Ok(None)
    }
}

fn pyproject_has_linter(tree: &RepoTree, entry: &TreeEntry) -> bool {
    let Some(file) = read_text(tree, entry) else {
        return false;
    };
    let doc: toml::Table = match file.text.parse() {
        Ok(doc) => doc,
        Err(_) if file.truncated => {
            debug!("{} exceeds {} bytes, scanning its table headers", entry.rel_path, MAX_READ_BYTES);
            return file.text.lines().filter_map(toml_table_header).any(is_linter_table);
        }
        Err(e) => {
            debug!("Ignoring malformed {}: {}", entry.rel_path, e);
            return false;
        }
    };
    doc.get("tool")
        .and_then(|tool| tool.as_table())
        .is_some_and(|tool| PYPROJECT_TOOLS.iter().any(|t| tool.contains_key(*t)))
}

/// `tool.<linter>` or one of its subtables
fn is_linter_table(header: &str) -> bool {
    let Some(rest) = header.strip_prefix("tool.") else {
        return false;
    };
    let tool = rest.split('.').next().unwrap_or_default();
    PYPROJECT_TOOLS.contains(&tool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{repo_with, tree};

    fn evaluate(files: &[(&str, &str)]) -> Option<String> {
        let dir = repo_with(files);
        LinterCheck.evaluate(&tree(&dir)).expect("evaluate")
    }

    #[test]
    fn test_plain_config_files_pass() {
        assert_eq!(evaluate(&[(".editorconfig", "root = true")]).as_deref(), Some(".editorconfig"));
        assert_eq!(evaluate(&[(".eslintrc.json", "{}")]).as_deref(), Some(".eslintrc.json"));
        assert_eq!(evaluate(&[("ruff.toml", "")]).as_deref(), Some("ruff.toml"));
        assert_eq!(
            evaluate(&[("src/App/stylecop.json", "{}")]).as_deref(),
            Some("src/App/stylecop.json")
        );
    }

    #[test]
    fn test_pyproject_with_tool_section_passes() {
        let pyproject = "[project]\nname = \"x\"\n\n[tool.black]\nline-length = 100\n";
        assert_eq!(
            evaluate(&[("pyproject.toml", pyproject)]).as_deref(),
            Some("pyproject.toml")
        );
        let ruff = "[tool.ruff.lint]\nselect = [\"E\"]\n";
        assert_eq!(evaluate(&[("pyproject.toml", ruff)]).as_deref(), Some("pyproject.toml"));
    }

    #[test]
    fn test_pyproject_without_linter_fails() {
        let pyproject = "[project]\nname = \"black-box\"\n\n[tool.pytest.ini_options]\n";
        assert_eq!(evaluate(&[("pyproject.toml", pyproject)]), None);
    }

    #[test]
    fn test_malformed_pyproject_is_non_match() {
        assert_eq!(evaluate(&[("pyproject.toml", "[tool.ruff\nbroken = ")]), None);
    }

    #[test]
    fn test_pyproject_with_bom_passes() {
        let pyproject = "\u{feff}[tool.isort]\nprofile = \"black\"\n";
        assert_eq!(evaluate(&[("pyproject.toml", pyproject)]).as_deref(), Some("pyproject.toml"));
    }

    #[test]
    fn test_large_pyproject_passes_on_table_headers() {
        let pyproject = format!(
            "[tool.ruff.lint]\nselect = [\"E\"]\n\n[project]\nname = \"app\"\ndescription = \"{}\"\n",
            "x".repeat(100_000)
        );
        assert_eq!(evaluate(&[("pyproject.toml", pyproject.as_str())]).as_deref(), Some("pyproject.toml"));

        let no_linter = format!("[tool.pytest]\naddopts = \"{}\"\n", "x".repeat(100_000));
        assert_eq!(evaluate(&[("pyproject.toml", no_linter.as_str())]), None);
    }

    #[test]
    fn test_is_linter_table() {
        assert!(is_linter_table("tool.black"));
        assert!(is_linter_table("tool.ruff.lint.isort"));
        assert!(!is_linter_table("tool.blacken-docs"));
        assert!(!is_linter_table("project"));
    }

    #[test]
    fn test_ignored_dirs_do_not_count() {
        assert_eq!(evaluate(&[("node_modules/pkg/.eslintrc", "{}")]), None);
    }
}

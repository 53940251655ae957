//! Project configuration loading
//!
//! Example `repo-scorecard.toml`:
//!
//! ```toml
//! [defaults]
//! format = "text"
//! min_score = 60
//! output = "scorecard.txt"
//! ```

use crate::reporters::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Config file names searched at the repository root, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["repo-scorecard.toml", ".repo-scorecard.toml", ".repo-scorecard.json"];

/// Project-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// CLI defaults; explicit flags always win
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default output format (json, text, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Default minimum score for CI gating
    #[serde(default)]
    pub min_score: Option<u32>,

    /// Default output file, relative to the working directory
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl ProjectConfig {
    /// Configured default format, if it names a known format
    pub fn default_format(&self) -> Option<OutputFormat> {
        let raw = self.defaults.format.as_deref()?;
        match OutputFormat::from_str(raw) {
            Ok(fmt) => Some(fmt),
            Err(e) => {
                warn!("Ignoring configured format: {}", e);
                None
            }
        }
    }
}

/// Load project configuration from the repository root.
///
/// Searches [`CONFIG_FILE_NAMES`] in order. Returns defaults if no file is
/// found; a file that fails to parse is logged and skipped.
pub fn load_project_config(repo_path: &Path) -> ProjectConfig {
    for name in CONFIG_FILE_NAMES {
        let path = repo_path.join(name);
        if !path.is_file() {
            continue;
        }
        let loaded = if name.ends_with(".json") {
            load_json_config(&path)
        } else {
            load_toml_config(&path)
        };
        match loaded {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON file
fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests;

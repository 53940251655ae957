//! Configuration module for repo-scorecard
//!
//! This module handles project-level CLI defaults (`repo-scorecard.toml` at
//! the scanned repository root). Check weights and the ignore set are fixed
//! and not configurable.

mod project_config;

pub use project_config::{load_project_config, CliDefaults, ProjectConfig, CONFIG_FILE_NAMES};

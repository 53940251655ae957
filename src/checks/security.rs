//! Security policy / dependency update config presence

use super::{first_file, Check};
use crate::walker::RepoTree;
use anyhow::Result;

const CANDIDATES: &[&str] = &["SECURITY.md", ".github/dependabot.yml", ".github/dependabot.yaml"];

pub struct SecurityCheck;

impl Check for SecurityCheck {
    fn id(&self) -> &'static str {
        "security"
    }

    fn name(&self) -> &'static str {
        "Security docs/config"
    }

    fn weight(&self) -> u32 {
        10
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        Ok(first_file(tree, CANDIDATES).map(|e| e.rel_path.clone()))
    }
}

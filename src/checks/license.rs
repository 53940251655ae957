//! LICENSE presence

use super::Check;
use crate::walker::RepoTree;
use anyhow::Result;

/// Passes when a root file name starts with `LICENSE` (any case or extension)
pub struct LicenseCheck;

impl Check for LicenseCheck {
    fn id(&self) -> &'static str {
        "license"
    }

    fn name(&self) -> &'static str {
        "LICENSE present"
    }

    fn weight(&self) -> u32 {
        5
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        Ok(tree
            .root_files()
            .find(|e| e.name().to_ascii_uppercase().starts_with("LICENSE"))
            .map(|e| e.rel_path.clone()))
    }
}

//! README presence

use super::Check;
use crate::walker::RepoTree;
use anyhow::Result;

/// Passes when the root holds `README.md` or any `README.<ext>`, in any case
pub struct ReadmeCheck;

impl Check for ReadmeCheck {
    fn id(&self) -> &'static str {
        "readme"
    }

    fn name(&self) -> &'static str {
        "README present"
    }

    fn weight(&self) -> u32 {
        10
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        // Prefer README.md when several variants exist
        let mut fallback = None;
        for entry in tree.root_files() {
            let upper = entry.name().to_ascii_uppercase();
            if upper == "README.MD" {
                return Ok(Some(entry.rel_path.clone()));
            }
            if fallback.is_none() && upper.len() > "README.".len() && upper.starts_with("README.") {
                fallback = Some(entry.rel_path.clone());
            }
        }
        Ok(fallback)
    }
}

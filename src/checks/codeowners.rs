//! CODEOWNERS presence

use super::{first_file, Check};
use crate::walker::RepoTree;
use anyhow::Result;

const CANDIDATES: &[&str] = &[".github/CODEOWNERS", "CODEOWNERS"];

pub struct CodeownersCheck;

impl Check for CodeownersCheck {
    fn id(&self) -> &'static str {
        "codeowners"
    }

    fn name(&self) -> &'static str {
        "CODEOWNERS present"
    }

    fn weight(&self) -> u32 {
        10
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        Ok(first_file(tree, CANDIDATES).map(|e| e.rel_path.clone()))
    }
}

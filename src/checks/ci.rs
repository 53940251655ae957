//! CI configuration presence

use super::Check;
use crate::walker::RepoTree;
use anyhow::Result;

const WORKFLOWS_DIR: &str = ".github/workflows";
const GITLAB_CI: &str = ".gitlab-ci.yml";

/// Passes on a GitHub Actions workflow or a GitLab CI file
pub struct CiCheck;

impl Check for CiCheck {
    fn id(&self) -> &'static str {
        "ci"
    }

    fn name(&self) -> &'static str {
        "CI configured"
    }

    fn weight(&self) -> u32 {
        15
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        let workflow = tree.files().find(|e| {
            e.parent() == WORKFLOWS_DIR && matches!(e.extension().as_deref(), Some("yml" | "yaml"))
        });
        if let Some(entry) = workflow {
            return Ok(Some(entry.rel_path.clone()));
        }
        Ok(tree.file(GITLAB_CI).map(|e| e.rel_path.clone()))
    }
}

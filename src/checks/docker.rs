//! Container build presence

use super::{first_file, Check};
use crate::walker::RepoTree;
use anyhow::Result;

const CANDIDATES: &[&str] = &["Dockerfile", "docker-compose.yml", "docker-compose.yaml"];

pub struct DockerCheck;

impl Check for DockerCheck {
    fn id(&self) -> &'static str {
        "docker"
    }

    fn name(&self) -> &'static str {
        "Docker present"
    }

    fn weight(&self) -> u32 {
        10
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        Ok(first_file(tree, CANDIDATES).map(|e| e.rel_path.clone()))
    }
}

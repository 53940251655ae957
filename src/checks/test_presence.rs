//! Test suite presence

use super::Check;
use crate::walker::RepoTree;
use anyhow::Result;

const TEST_DIR_NAMES: &[&str] = &["tests", "test", "__tests__"];
const TEST_FILE_MARKERS: &[&str] = &["test", "spec"];

/// Passes on a test directory at any depth, or a file whose stem mentions
/// `test`/`spec`. Ignored subtrees (e.g. `node_modules/`) never count.
pub struct TestsCheck;

impl Check for TestsCheck {
    fn id(&self) -> &'static str {
        "tests"
    }

    fn name(&self) -> &'static str {
        "Tests present"
    }

    fn weight(&self) -> u32 {
        15
    }

    fn evaluate(&self, tree: &RepoTree) -> Result<Option<String>> {
        let test_dir = tree
            .dirs()
            .filter(|e| TEST_DIR_NAMES.contains(&e.name()))
            .min_by_key(|e| e.depth);
        if let Some(dir) = test_dir {
            return Ok(Some(format!("{}/", dir.rel_path)));
        }

        let test_file = tree.files().find(|e| {
            let stem = e.stem().to_ascii_lowercase();
            TEST_FILE_MARKERS.iter().any(|m| stem.contains(m))
        });
        Ok(test_file.map(|e| e.rel_path.clone()))
    }
}

//! Engine property tests through the public library API

use repo_scorecard::{catalog, scan, IgnoreSet, RepoTree, ScanError};
use std::path::Path;
use tempfile::TempDir;

fn repo_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (rel, contents) in files {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture dirs");
        }
        std::fs::write(path, contents).expect("write fixture file");
    }
    dir
}

fn mixed_repo() -> TempDir {
    repo_with(&[
        ("README.rst", "app"),
        ("src/widget.spec.ts", ""),
        ("web/.eslintrc.js", "module.exports = {}"),
        ("package.json", r#"{"name": "web", "version": "3.0.0"}"#),
        ("node_modules/x/SECURITY.md", ""),
    ])
}

#[test]
fn test_score_equals_sum_of_passed_weights() {
    let dir = mixed_repo();
    let report = scan(dir.path()).expect("scan");
    let expected: u32 = report.checks.iter().filter(|c| c.passed).map(|c| c.weight).sum();
    assert_eq!(report.score, expected);
    assert_eq!(report.passed + report.failed, catalog().len());
    for check in &report.checks {
        assert_eq!(check.passed, !check.evidence.is_empty(), "{}", check.id);
    }
}

#[test]
fn test_runs_are_idempotent() {
    let dir = mixed_repo();
    let first = scan(dir.path()).expect("first scan");
    let second = scan(dir.path()).expect("second scan");
    assert_eq!(first.checks, second.checks);
    assert_eq!(first.score, second.score);
    assert_eq!(first.repo_path, second.repo_path);
}

#[test]
fn test_order_matches_catalog_registration() {
    let dir = mixed_repo();
    let report = scan(dir.path()).expect("scan");
    let ids: Vec<&str> = report.checks.iter().map(|c| c.id.as_str()).collect();
    let catalog_ids: Vec<&str> = catalog().iter().map(|c| c.id()).collect();
    assert_eq!(ids, catalog_ids);
}

#[test]
fn test_ignore_set_respected_for_tests_check() {
    let hidden = repo_with(&[("node_modules/test_foo.py", "")]);
    let report = scan(hidden.path()).expect("scan");
    assert!(!report.check("tests").expect("tests check").passed);

    let visible = repo_with(&[("test_foo.py", "")]);
    let report = scan(visible.path()).expect("scan");
    let tests = report.check("tests").expect("tests check");
    assert!(tests.passed);
    assert_eq!(tests.evidence, "test_foo.py");
}

#[test]
fn test_ignored_subtree_does_not_satisfy_security() {
    let dir = mixed_repo();
    let report = scan(dir.path()).expect("scan");
    assert!(!report.check("security").expect("security check").passed);
}

#[test]
fn test_repo_path_is_canonical() {
    let dir = repo_with(&[]);
    let dotted = dir.path().join(".");
    let report = scan(&dotted).expect("scan");
    assert_eq!(report.repo_path, dir.path().canonicalize().expect("canonicalize"));
}

#[test]
fn test_missing_root_produces_no_report() {
    let err = scan(Path::new("/definitely/not/a/real/repo/path")).unwrap_err();
    assert!(matches!(err, ScanError::RootNotFound { .. }));
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_still_yields_full_report() {
    use std::os::unix::fs::PermissionsExt;

    let dir = repo_with(&[("README.md", "# x"), ("private/tests/test_a.py", "")]);
    let private = dir.path().join("private");
    std::fs::set_permissions(&private, std::fs::Permissions::from_mode(0o000)).expect("chmod");
    // Mode bits are not enforced for root
    let enforced = std::fs::read_dir(&private).is_err();

    let result = scan(dir.path());
    let walked = RepoTree::walk(dir.path(), &IgnoreSet::default());

    std::fs::set_permissions(&private, std::fs::Permissions::from_mode(0o755)).expect("restore chmod");
    let report = result.expect("unreadable subtree must not be fatal");
    assert_eq!(report.checks.len(), catalog().len());
    assert!(report.check("readme").expect("readme check").passed);

    let tree = walked.expect("walk");
    if enforced {
        assert!(tree.skipped().iter().any(|p| p.ends_with("private")));
        // The only test directory sits in the unreadable subtree
        assert!(!report.check("tests").expect("tests check").passed);
    } else {
        assert!(report.check("tests").expect("tests check").passed);
    }
}

//! CLI flag contract tests
//!
//! Verifies --min-score gating, --output, and project config defaults.

use std::path::Path;
use std::process::Command;

fn scorecard_bin() -> String {
    env!("CARGO_BIN_EXE_repo-scorecard").to_string()
}

/// README.md + Dockerfile: score 20
fn setup_test_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("README.md"), "# demo\n").unwrap();
    std::fs::write(dir.path().join("Dockerfile"), "FROM alpine\n").unwrap();
    dir
}

fn run(dir: &Path, extra_args: &[&str]) -> (i32, String, String) {
    let mut cmd = Command::new(scorecard_bin());
    cmd.arg("--path").arg(dir);
    cmd.env_remove("REPO_SCORECARD_MIN_SCORE");
    for arg in extra_args {
        cmd.arg(arg);
    }
    let output = cmd.output().expect("Failed to run repo-scorecard");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

// ============================================================================
// --min-score
// ============================================================================

#[test]
fn test_min_score_above_score_exits_one() {
    let dir = setup_test_repo();
    let (code, stdout, stderr) = run(dir.path(), &["--min-score", "50"]);
    assert_eq!(code, 1, "--min-score 50 should fail a score of 20");
    // The report is still printed before the gate fails
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(report["score"], 20);
    assert!(stderr.contains("below the minimum 50"), "stderr: {stderr}");
}

#[test]
fn test_min_score_equal_to_score_passes() {
    let dir = setup_test_repo();
    let (code, _, _) = run(dir.path(), &["--min-score", "20"]);
    assert_eq!(code, 0);
}

#[test]
fn test_min_score_from_environment() {
    let dir = setup_test_repo();
    let output = Command::new(scorecard_bin())
        .arg("--path")
        .arg(dir.path())
        .env("REPO_SCORECARD_MIN_SCORE", "90")
        .output()
        .expect("Failed to run repo-scorecard");
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// --output
// ============================================================================

#[test]
fn test_output_writes_file_instead_of_stdout() {
    let dir = setup_test_repo();
    let out_dir = tempfile::tempdir().unwrap();
    let out_file = out_dir.path().join("scorecard.json");
    let (code, stdout, _) = run(dir.path(), &["-o", out_file.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    let content = std::fs::read_to_string(&out_file).expect("output file written");
    let report: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(report["passed"], 2);
}

#[test]
fn test_text_output_file_has_no_escape_codes() {
    let dir = setup_test_repo();
    let out_dir = tempfile::tempdir().unwrap();
    let out_file = out_dir.path().join("scorecard.txt");
    let (code, _, _) = run(
        dir.path(),
        &["--format", "text", "-o", out_file.to_str().unwrap()],
    );
    assert_eq!(code, 0);
    let content = std::fs::read_to_string(&out_file).unwrap();
    assert!(content.contains("| docker "));
    assert!(!content.contains('\x1b'));
}

#[test]
fn test_unwritable_output_is_an_error() {
    let dir = setup_test_repo();
    let bad = dir.path().join("missing-dir").join("out.json");
    let (code, _, stderr) = run(dir.path(), &["-o", bad.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to write scorecard"), "stderr: {stderr}");
}

// ============================================================================
// Project config defaults
// ============================================================================

#[test]
fn test_project_config_defaults_apply() {
    let dir = setup_test_repo();
    std::fs::write(
        dir.path().join("repo-scorecard.toml"),
        "[defaults]\nformat = \"text\"\nmin_score = 30\n",
    )
    .unwrap();
    let (code, stdout, _) = run(dir.path(), &[]);
    assert_eq!(code, 1, "configured min_score 30 should fail a score of 20");
    assert!(stdout.contains("| readme "));
}

#[test]
fn test_flags_override_project_config() {
    let dir = setup_test_repo();
    std::fs::write(
        dir.path().join("repo-scorecard.toml"),
        "[defaults]\nformat = \"text\"\nmin_score = 30\n",
    )
    .unwrap();
    let (code, stdout, _) = run(dir.path(), &["--format", "json", "--min-score", "10"]);
    assert_eq!(code, 0);
    serde_json::from_str::<serde_json::Value>(&stdout).expect("flag format wins");
}

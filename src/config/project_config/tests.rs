use super::*;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write config");
}

#[test]
fn test_missing_config_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert_eq!(load_project_config(dir.path()), ProjectConfig::default());
}

#[test]
fn test_toml_defaults_are_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "repo-scorecard.toml",
        "[defaults]\nformat = \"text\"\nmin_score = 60\noutput = \"out.txt\"\n",
    );
    let config = load_project_config(dir.path());
    assert_eq!(config.defaults.min_score, Some(60));
    assert_eq!(config.defaults.output, Some(PathBuf::from("out.txt")));
    assert_eq!(config.default_format(), Some(OutputFormat::Text));
}

#[test]
fn test_visible_toml_wins_over_hidden_and_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "repo-scorecard.toml", "[defaults]\nmin_score = 10\n");
    write(dir.path(), ".repo-scorecard.toml", "[defaults]\nmin_score = 20\n");
    write(dir.path(), ".repo-scorecard.json", r#"{"defaults": {"min_score": 30}}"#);
    assert_eq!(load_project_config(dir.path()).defaults.min_score, Some(10));
}

#[test]
fn test_json_config_is_supported() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), ".repo-scorecard.json", r#"{"defaults": {"format": "md"}}"#);
    let config = load_project_config(dir.path());
    assert_eq!(config.default_format(), Some(OutputFormat::Markdown));
}

#[test]
fn test_malformed_config_falls_through() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "repo-scorecard.toml", "[defaults\nmin_score = ");
    write(dir.path(), ".repo-scorecard.toml", "[defaults]\nmin_score = 42\n");
    assert_eq!(load_project_config(dir.path()).defaults.min_score, Some(42));
}

#[test]
fn test_unknown_format_is_ignored() {
    let config = ProjectConfig {
        defaults: CliDefaults {
            format: Some("sarif".into()),
            ..Default::default()
        },
    };
    assert_eq!(config.default_format(), None);
}

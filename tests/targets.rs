use doc_icon::config::{self, DEFAULT_APP_TARGET, DEFAULT_INSTALLER_TARGET};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_when_nothing_given() {
    let targets = config::resolve_targets(Vec::new(), None).expect("defaults should resolve");
    assert_eq!(
        targets,
        vec![
            PathBuf::from(DEFAULT_APP_TARGET),
            PathBuf::from(DEFAULT_INSTALLER_TARGET)
        ]
    );
}

#[test]
fn test_command_line_order_is_kept() {
    let outputs = vec![PathBuf::from("b.ico"), PathBuf::from("a.ico")];
    let targets = config::resolve_targets(outputs.clone(), None).unwrap();
    assert_eq!(targets, outputs);
}

#[test]
fn test_targets_file_is_appended_and_resolved_relative_to_itself() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("targets.json");
    let absolute = temp_dir.path().join("abs").join("icon.ico");

    let json = serde_json::json!({
        "outputs": ["app/icon.ico", &absolute],
    });
    std::fs::write(&config_path, json.to_string()).unwrap();

    let targets =
        config::resolve_targets(vec![PathBuf::from("first.ico")], Some(&config_path)).unwrap();

    assert_eq!(
        targets,
        vec![
            PathBuf::from("first.ico"),
            temp_dir.path().join("app/icon.ico"),
            absolute,
        ]
    );
}

#[test]
fn test_empty_targets_file_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("targets.json");
    std::fs::write(&config_path, r#"{ "outputs": [] }"#).unwrap();

    let err = config::load_targets(&config_path).unwrap_err();
    assert!(err.to_string().contains("lists no outputs"));
}

#[test]
fn test_malformed_targets_file_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("targets.json");

    std::fs::write(&config_path, "not json").unwrap();
    assert!(config::load_targets(&config_path).is_err());

    std::fs::write(&config_path, r#"{ "outputs": ["a.ico"], "sizes": [16] }"#).unwrap();
    let err = config::load_targets(&config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse targets file"));
}

#[test]
fn test_missing_targets_file_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nope.json");

    let err = config::resolve_targets(Vec::new(), Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("Failed to read targets file"));
}

//! Tests for lock options.

use crate::config::LockOptions;
use crate::error::LockError;
use tempfile::TempDir;

#[test]
fn test_default_options_create_missing_files() {
    let options = LockOptions::default();
    assert!(options.create_if_not_exists);
}

#[test]
fn test_builder_overrides_creation_policy() {
    let options = LockOptions::default().with_create_if_not_exists(false);
    assert!(!options.create_if_not_exists);

    let options = options.with_create_if_not_exists(true);
    assert!(options.create_if_not_exists);
}

#[test]
fn test_parse_empty_yaml_uses_defaults() {
    let options = LockOptions::from_yaml("").unwrap();
    assert_eq!(options, LockOptions::default());
}

#[test]
fn test_parse_yaml_disables_creation() {
    let options = LockOptions::from_yaml("create_if_not_exists: false\n").unwrap();
    assert!(!options.create_if_not_exists);
}

#[test]
fn test_parse_yaml_ignores_unknown_fields() {
    let yaml = r#"
retention_days: 7
owner: ci
"#;
    let options = LockOptions::from_yaml(yaml).unwrap();
    assert!(options.create_if_not_exists);
}

#[test]
fn test_parse_invalid_yaml_is_config_failure() {
    let result = LockOptions::from_yaml("create_if_not_exists: [not, a, bool]");
    assert!(matches!(result, Err(LockError::ConfigFailure(_))));
}

#[test]
fn test_yaml_roundtrip() {
    let options = LockOptions::default().with_create_if_not_exists(false);
    let yaml = options.to_yaml().unwrap();
    assert!(yaml.contains("create_if_not_exists: false"));
    assert_eq!(LockOptions::from_yaml(&yaml).unwrap(), options);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("options.yaml");
    std::fs::write(&path, "create_if_not_exists: false\n").unwrap();

    let options = LockOptions::load(&path).unwrap();
    assert!(!options.create_if_not_exists);
}

#[test]
fn test_load_missing_file_is_config_failure() {
    let temp_dir = TempDir::new().unwrap();
    let result = LockOptions::load(temp_dir.path().join("missing.yaml"));
    let err = result.unwrap_err();
    assert!(matches!(err, LockError::ConfigFailure(_)));
    assert!(err.to_string().contains("missing.yaml"));
}

//! Tests for config functionality.

use crate::config::LockConfig;
use crate::error::FlockError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = LockConfig::default();

    assert!(config.directory.is_none());
    assert!(!config.create_directory);
    assert_eq!(config.lock_directory(), std::env::temp_dir());
}

#[test]
fn test_parse_empty_yaml() {
    let config = LockConfig::from_yaml("").unwrap();
    assert_eq!(config, LockConfig::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
directory: /var/lock/jobs
create_directory: true
"#;
    let config = LockConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.directory, Some(PathBuf::from("/var/lock/jobs")));
    assert!(config.create_directory);
    assert_eq!(config.lock_directory(), PathBuf::from("/var/lock/jobs"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
create_directory: true
retry_policy: exponential
"#;
    let config = LockConfig::from_yaml(yaml).unwrap();
    assert!(config.create_directory);
    assert!(config.directory.is_none());
}

#[test]
fn test_empty_directory_rejected() {
    let result = LockConfig::from_yaml("directory: \"\"\n");
    assert!(matches!(result, Err(FlockError::Config(_))));
    assert!(result.unwrap_err().to_string().contains("must not be empty"));
}

#[test]
fn test_invalid_yaml_rejected() {
    let result = LockConfig::from_yaml("create_directory: [not, a, bool]\n");
    assert!(matches!(result, Err(FlockError::Config(_))));
}

#[test]
fn test_yaml_roundtrip() {
    let config = LockConfig {
        directory: Some(PathBuf::from("/run/locks")),
        create_directory: true,
    };
    let parsed = LockConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("locks.yaml");
    std::fs::write(&path, "create_directory: true\n").unwrap();

    let config = LockConfig::load(&path).unwrap();
    assert!(config.create_directory);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = LockConfig::load(temp_dir.path().join("missing.yaml"));
    assert!(result.unwrap_err().to_string().contains("failed to read config file"));
}

#[test]
fn test_in_directory() {
    let config = LockConfig::in_directory("/tmp/jobs");
    assert_eq!(config.lock_directory(), PathBuf::from("/tmp/jobs"));
    assert!(!config.create_directory);
}

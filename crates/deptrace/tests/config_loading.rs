//! Integration tests for configuration file resolution.

use deptrace::{DepsConfig, Error, config::CONFIG_FILE_NAME};
use rstest::{fixture, rstest};
use tempfile::TempDir;

mod common;
use common::{fixture_config, write_config};

/// Provides a fresh temporary directory for each test
#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

#[rstest]
fn explicit_path_is_loaded(temp_dir: TempDir) {
    let path = temp_dir.path().join("custom.yaml");
    write_config(&path, &fixture_config());

    let config = DepsConfig::resolve(Some(path.as_path()), temp_dir.path()).expect("config should load");

    assert_eq!(config, fixture_config());
}

#[rstest]
fn config_in_directory_is_discovered(temp_dir: TempDir) {
    write_config(&temp_dir.path().join(CONFIG_FILE_NAME), &fixture_config());

    let config = DepsConfig::resolve(None, temp_dir.path()).expect("config should load");

    assert_eq!(config.namespace, "ns/");
}

#[rstest]
fn defaults_apply_without_config_file(temp_dir: TempDir) {
    let config = DepsConfig::resolve(None, temp_dir.path()).expect("defaults should apply");

    assert_eq!(config, DepsConfig::default());
    assert!(DepsConfig::discover(temp_dir.path()).is_none());
}

#[rstest]
fn missing_explicit_path_is_an_error(temp_dir: TempDir) {
    let path = temp_dir.path().join("absent.yaml");

    let err = DepsConfig::resolve(Some(path.as_path()), temp_dir.path()).expect_err("should fail");

    assert!(matches!(err, Error::Config(ref msg) if msg.contains("absent.yaml")));
}

#[rstest]
fn malformed_yaml_is_an_error(temp_dir: TempDir) {
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "query: [not, a, mapping]\n").expect("should write file");

    let err = DepsConfig::resolve(None, temp_dir.path()).expect_err("should fail");

    assert!(matches!(err, Error::Config(_)));
}

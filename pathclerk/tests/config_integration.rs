//! Integration tests for the configuration system.
//!
//! Tests that touch environment variables are marked `#[serial]`:
//! environment variables are process-global, so concurrent access would
//! race. Everything else runs in parallel.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pathclerk::config::{
    Config, ConfigBuilder, ConfigLoader, ConfigValidator, OutputFormat, Platform,
};
use pathclerk::error::Error;
use pathclerk::fs::ConflictMode;
use pathclerk::path;

// ============================================================================
// Test Utilities
// ============================================================================

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_pathclerk_env_vars() -> Vec<EnvGuard> {
    [
        "PATHCLERK_FORBIDDEN_CHARS",
        "PATHCLERK_CONFLICT_MODE",
        "PATHCLERK_INCLUDE_HIDDEN",
        "PATHCLERK_TRASH_DIR",
        "PATHCLERK_OUTPUT_FORMAT",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_full_file_is_loaded() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r##"
forbidden_chars: ["#", "%"]
conflict_mode: overwrite
include_hidden: false
trash_dir: /var/trash
output_format: json
"##,
    );

    let config = ConfigBuilder::new()
        .with_data_dir(temp.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.effective_forbidden_chars(), vec!['#', '%']);
    assert_eq!(config.effective_conflict_mode(), ConflictMode::Overwrite);
    assert!(!config.effective_include_hidden());
    assert_eq!(config.effective_trash_dir(), Some(PathBuf::from("/var/trash")));
    assert_eq!(config.effective_output_format(), OutputFormat::Json);
}

#[test]
fn test_missing_file_means_defaults() {
    let temp = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .with_data_dir(temp.path())
        .skip_env()
        .build()
        .unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_file_names_the_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "conflict_mode: [nonsense\n");

    let err = ConfigLoader::load_file(&path).unwrap_err();
    match err {
        Error::Validation { field, .. } => assert!(field.ends_with("config.yaml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_file_that_fails_validation() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "forbidden_chars: [\"/\"]\n");

    let result = ConfigBuilder::new()
        .with_data_dir(temp.path())
        .skip_env()
        .build();
    assert!(matches!(result, Err(Error::Validation { ref field, .. }) if field == "forbidden_chars"));
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
#[serial]
fn test_environment_overrides_file() {
    let _guards = clear_pathclerk_env_vars();
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "conflict_mode: exclusive\ntrash_dir: /from/file\n");

    let _mode = EnvGuard::new("PATHCLERK_CONFLICT_MODE", "append");
    let config = ConfigBuilder::new().with_data_dir(temp.path()).build().unwrap();

    assert_eq!(config.conflict_mode, Some(ConflictMode::Append));
    assert_eq!(config.trash_dir, Some(PathBuf::from("/from/file")));
}

#[test]
#[serial]
fn test_programmatic_overrides_environment() {
    let _guards = clear_pathclerk_env_vars();
    let _chars = EnvGuard::new("PATHCLERK_FORBIDDEN_CHARS", ":");

    let config = ConfigBuilder::new()
        .skip_files()
        .with_config(Config {
            forbidden_chars: Some(vec!['#']),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.effective_forbidden_chars(), vec!['#']);
}

#[test]
#[serial]
fn test_skip_env() {
    let _guards = clear_pathclerk_env_vars();
    let _hidden = EnvGuard::new("PATHCLERK_INCLUDE_HIDDEN", "false");

    let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
    assert!(config.effective_include_hidden());
}

#[test]
#[serial]
fn test_invalid_env_value_fails_build() {
    let _guards = clear_pathclerk_env_vars();
    let _format = EnvGuard::new("PATHCLERK_OUTPUT_FORMAT", "xml");

    let result = ConfigBuilder::new().skip_files().build();
    assert!(
        matches!(result, Err(Error::Validation { ref field, .. }) if field == "PATHCLERK_OUTPUT_FORMAT")
    );
}

// ============================================================================
// Configuration driving the algebra
// ============================================================================

#[test]
fn test_forbidden_chars_feed_legality() {
    let config = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            forbidden_chars: Some(vec!['#']),
            ..Default::default()
        })
        .build()
        .unwrap();

    let forbidden = config.effective_forbidden_chars();
    assert!(!path::is_legal_with("/notes/#1.txt", &forbidden));
    assert!(path::is_legal_with("/notes/no1.txt", &forbidden));
}

#[test]
fn test_platform_defaults_validate() {
    for platform in [Platform::Windows, Platform::MacOs, Platform::Linux, Platform::Other] {
        let config = Config {
            forbidden_chars: Some(
                platform
                    .forbidden_chars()
                    .iter()
                    .copied()
                    .filter(|c| *c != '/' && *c != '\0')
                    .collect(),
            ),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok(), "{platform}");
    }
}

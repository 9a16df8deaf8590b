//! Tests for the configuration loading entry points.
//!
//! Responsibilities:
//! - Test explicit-path loading and its error classification.
//! - Test upward discovery through `load_from_project_root`.
//! - Test URL selection from explicit values and `PROJECT_TOML`.
//!
//! Does NOT handle:
//! - HTTP status and transport classification (see `tests/fetch_tests.rs`).
//! - Path cleaning rules (tested in path.rs).
//!
//! Invariants:
//! - Tests that touch `PROJECT_TOML` use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.
//! - No test changes the process working directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Deserialize;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct SettingsSection {
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub port: u16,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct TestConfig {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub settings: SettingsSection,
}

pub const SAMPLE_CONFIG: &str = r#"[project]
name = "test-project"
version = "1.0.0"

[settings]
debug = true
port = 8080
"#;

/// Write `contents` to `dir/name`, returning the full path.
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

//! Shared test utilities for configurator integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a project fixture on disk.
//!
//! Invariants / Assumptions:
//! - `PROJECT_TOML` is cleared unless a test sets it explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const SAMPLE_CONFIG: &str = r#"[project]
name = "test-project"
version = "1.0.0"

[settings]
debug = true
port = 8080
"#;

/// Returns a hermetic `configurator` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `PROJECT_TOML` is cleared to ensure no leakage from the host.
pub fn configurator_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("configurator");
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("PROJECT_TOML");
    cmd
}

/// A temporary project: `root/project.toml` plus an empty `root/src/deep` tree.
pub struct ProjectFixture {
    pub dir: TempDir,
}

impl ProjectFixture {
    pub fn new(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("project.toml"), contents).unwrap();
        fs::create_dir_all(dir.path().join("src").join("deep")).unwrap();
        Self { dir }
    }

    /// Canonical root, matching what the child process sees as its cwd.
    pub fn root(&self) -> PathBuf {
        self.dir.path().canonicalize().unwrap()
    }

    pub fn nested(&self) -> PathBuf {
        self.root().join("src").join("deep")
    }

    #[allow(dead_code)]
    pub fn marker(&self) -> PathBuf {
        self.root().join("project.toml")
    }

    #[allow(dead_code)]
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(Path::new(relative));
        fs::write(&path, contents).unwrap();
        path
    }
}

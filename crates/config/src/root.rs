//! Upward search for the project root.
//!
//! Responsibilities:
//! - Walk from a start directory towards the filesystem root looking for
//!   `project.toml`.
//!
//! Does NOT handle:
//! - Reading or parsing the marker file (see `loader`).
//! - Caching. Every call re-checks the filesystem.
//!
//! Invariants:
//! - A relative start directory is anchored to the working directory and
//!   cleaned first, so `root` is always an absolute, usable directory.
//! - The start directory itself is checked first; the first hit wins.
//! - The walk stops when a directory has no parent distinct from itself.
//! - Cost is one existence check per ancestor.

use std::path::{Path, PathBuf};

use crate::constants::PROJECT_CONFIG_FILE;
use crate::error::{ConfigError, Result};
use crate::path::PathResolver;

/// A discovered project root and the marker file inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    pub root: PathBuf,
    pub marker_path: PathBuf,
}

/// Walk up from `start_dir` until a directory containing `project.toml` is found.
///
/// Relative start directories are taken relative to the process working
/// directory.
pub fn find_root(start_dir: impl AsRef<Path>) -> Result<ProjectRoot> {
    let start_dir = start_dir.as_ref();
    if start_dir.is_absolute() {
        return find_root_from(&PathResolver::new(start_dir), start_dir);
    }
    find_root_from(&PathResolver::from_current_dir()?, start_dir)
}

/// `find_root` with relative start directories anchored at `resolver`.
pub(crate) fn find_root_from(resolver: &PathResolver, start_dir: &Path) -> Result<ProjectRoot> {
    let anchored = resolver.anchor(start_dir);
    let mut current = anchored.as_path();

    loop {
        let candidate = current.join(PROJECT_CONFIG_FILE);
        tracing::trace!(candidate = %candidate.display(), "checking for project marker");
        if candidate.exists() {
            tracing::debug!(root = %current.display(), "found project root");
            return Ok(ProjectRoot {
                root: current.to_path_buf(),
                marker_path: candidate,
            });
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => {
                return Err(ConfigError::MarkerNotFound {
                    start_dir: start_dir.to_path_buf(),
                });
            }
        }
    }
}

//! Path sanitization for untrusted configuration paths.
//!
//! Responsibilities:
//! - Lexically clean paths (collapse `.`, `..`, repeated and trailing separators).
//! - Anchor relative paths to a working directory and reject ones that escape it.
//!
//! Does NOT handle:
//! - Symlink resolution. Cleaning is purely lexical; nothing here touches the
//!   filesystem except reading the process working directory.
//! - File I/O (see `loader`).
//!
//! Invariants:
//! - Every returned path is absolute and contains no `.` or `..` components.
//! - A relative input is either returned inside the working directory or
//!   rejected with `ConfigError::PathTraversal`, never returned outside it.
//! - Absolute inputs are trusted and only cleaned.

use std::path::{Component, Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Resolves configuration paths against a fixed working directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    working_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver anchored at `working_dir`.
    ///
    /// The directory is cleaned but not checked for existence.
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: clean_path(working_dir.as_ref()),
        }
    }

    /// Create a resolver anchored at the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let working_dir = std::env::current_dir().map_err(ConfigError::WorkingDirUnavailable)?;
        Ok(Self::new(working_dir))
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Join `path` onto the working directory and clean it, without the
    /// traversal check. Absolute inputs are only cleaned.
    pub fn anchor(&self, path: impl AsRef<Path>) -> PathBuf {
        clean_path(&self.working_dir.join(path))
    }

    /// Resolve `path` to a clean absolute path.
    ///
    /// An empty path resolves to the working directory itself.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.is_absolute() {
            return Ok(clean_path(path));
        }

        let cleaned = self.anchor(path);
        if cleaned.strip_prefix(&self.working_dir).is_err() {
            return Err(ConfigError::PathTraversal {
                path: path.to_path_buf(),
            });
        }

        tracing::trace!(input = %path.display(), resolved = %cleaned.display(), "resolved config path");
        Ok(cleaned)
    }
}

/// Resolve `path` against the process working directory.
pub fn resolve_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    PathResolver::from_current_dir()?.resolve(path)
}

/// Lexically clean a path.
///
/// `..` pops the previous normal component; at the root it is dropped, and at
/// the start of a relative path it is kept. An empty result becomes `.`.
pub(crate) fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

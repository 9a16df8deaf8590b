//! Configuration loading entry points.
//!
//! Responsibilities:
//! - Load a `project.toml` from an explicit path, from an upward search, or
//!   from a URL given directly or through `PROJECT_TOML`.
//! - Express all three as strategies of one `ConfigLocation` type.
//!
//! Does NOT handle:
//! - Any particular schema. Callers supply the target type.
//! - Retries or fallbacks between strategies. Errors surface unchanged.
//!
//! Invariants / Assumptions:
//! - Every operation is synchronous; the only blocking wait is the HTTP fetch,
//!   bounded by `DEFAULT_URL_TIMEOUT`.
//! - Read failures (`ErrorKind::Io`) are distinct from parse failures
//!   (`ErrorKind::Parse`).
//! - `PROJECT_TOML` is only read by `load_from_url_or_env` and
//!   `ConfigLocation::remote`, and only when no explicit URL is given.

mod env;
mod location;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::Result;

pub use env::{env_var_or_none, url_from_env};
pub use location::{ConfigLocation, LoadedConfig, ResolvedSource, SourceOrigin};

/// Read a TOML file and decode it into `T`.
///
/// Relative paths are resolved against the working directory and must stay
/// inside it.
pub fn load_from_path<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    ConfigLocation::ExplicitPath(path.as_ref().to_path_buf())
        .load()
        .map(|loaded| loaded.value)
}

/// Find `project.toml` above `start_dir` and decode it into `T`.
///
/// Returns the project root together with the value. If the root is found but
/// loading fails, the error is `ConfigError::ProjectLoad` carrying the root.
pub fn load_from_project_root<T>(start_dir: impl AsRef<Path>) -> Result<(PathBuf, T)>
where
    T: DeserializeOwned + Default,
{
    let loaded = ConfigLocation::Discovery(start_dir.as_ref().to_path_buf()).load()?;
    let root = loaded
        .project_root
        .unwrap_or_else(|| start_dir.as_ref().to_path_buf());
    Ok((root, loaded.value))
}

/// Fetch a TOML document from `url` and decode it into `T`.
pub fn load_from_url<T>(url: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    ConfigLocation::RemoteUrl(url.to_string())
        .load()
        .map(|loaded| loaded.value)
}

/// Fetch and decode from `explicit`, or from `PROJECT_TOML` when `explicit`
/// is `None` or blank.
///
/// Fails with `ConfigError::SourceUnset` without touching the network when
/// neither is available.
pub fn load_from_url_or_env<T>(explicit: Option<&str>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    ConfigLocation::remote(explicit)?
        .load()
        .map(|loaded| loaded.value)
}

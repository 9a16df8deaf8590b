//! Configuration locations and the sources they resolve to.
//!
//! Responsibilities:
//! - Represent where a configuration comes from as one tagged value.
//! - Turn a location into raw bytes (`resolve`) and then a typed value (`load`).
//!
//! Does NOT handle:
//! - Parsing rules (see `decode`) or HTTP details (see `fetch`).
//!
//! Invariants:
//! - Exactly one strategy runs per call; nothing is cached between calls.
//! - File handles and HTTP responses are released before `resolve` returns.
//! - Decode failures are wrapped in `ConfigError::SourceParse` naming the origin.
//! - A discovery failure that happens after the root is found is wrapped in
//!   `ConfigError::ProjectLoad` so the root is not lost.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use url::Url;

use super::env::{select_url, url_from_env};
use crate::decode::decode;
use crate::error::{ConfigError, Result};
use crate::fetch::{RemoteFetcher, parse_url};
use crate::path::resolve_path;
use crate::root::find_root;

/// Where to load a configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// A file path, sanitized against the working directory.
    ExplicitPath(PathBuf),
    /// A directory to search upward from for `project.toml`.
    Discovery(PathBuf),
    /// An `http` or `https` URL.
    RemoteUrl(String),
}

/// The concrete origin a location resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    File(PathBuf),
    Url(Url),
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOrigin::File(path) => write!(f, "{}", path.display()),
            SourceOrigin::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Raw payload plus where it came from.
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub origin: SourceOrigin,
    /// Set only for `ConfigLocation::Discovery`.
    pub project_root: Option<PathBuf>,
    pub bytes: Vec<u8>,
}

/// A decoded configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig<T> {
    pub value: T,
    pub origin: SourceOrigin,
    pub project_root: Option<PathBuf>,
}

impl ConfigLocation {
    /// Remote location from an explicit URL, falling back to `PROJECT_TOML`.
    pub fn remote(explicit: Option<&str>) -> Result<Self> {
        select_url(explicit, url_from_env).map(ConfigLocation::RemoteUrl)
    }

    /// Remote location from an explicit URL, falling back to an injected
    /// environment value. Never touches the process environment.
    pub fn remote_from(explicit: Option<&str>, env_value: Option<String>) -> Result<Self> {
        select_url(explicit, || env_value).map(ConfigLocation::RemoteUrl)
    }

    /// Fetch the raw bytes this location points at.
    pub fn resolve(&self) -> Result<ResolvedSource> {
        match self {
            ConfigLocation::ExplicitPath(path) => {
                let path = resolve_path(path)?;
                let bytes = read_local(&path)?;
                Ok(ResolvedSource {
                    origin: SourceOrigin::File(path),
                    project_root: None,
                    bytes,
                })
            }
            ConfigLocation::Discovery(start_dir) => {
                let found = find_root(start_dir)?;
                let in_root = |err: ConfigError| ConfigError::ProjectLoad {
                    root: found.root.clone(),
                    source: Box::new(err),
                };
                let path = resolve_path(&found.marker_path).map_err(in_root)?;
                let bytes = read_local(&path).map_err(in_root)?;
                Ok(ResolvedSource {
                    origin: SourceOrigin::File(path),
                    project_root: Some(found.root),
                    bytes,
                })
            }
            ConfigLocation::RemoteUrl(url) => {
                let parsed = parse_url(url)?;
                let bytes = RemoteFetcher::new()?.fetch(url)?;
                Ok(ResolvedSource {
                    origin: SourceOrigin::Url(parsed),
                    project_root: None,
                    bytes,
                })
            }
        }
    }

    /// Resolve this location and decode the payload into `T`.
    pub fn load<T>(&self) -> Result<LoadedConfig<T>>
    where
        T: DeserializeOwned + Default,
    {
        let source = self.resolve()?;
        tracing::debug!(origin = %source.origin, bytes = source.bytes.len(), "decoding config");

        let value = match decode(&source.bytes) {
            Ok(value) => value,
            Err(err) => {
                let err = ConfigError::SourceParse {
                    origin: source.origin,
                    source: Box::new(err),
                };
                return Err(match source.project_root {
                    Some(root) => ConfigError::ProjectLoad {
                        root,
                        source: Box::new(err),
                    },
                    None => err,
                });
            }
        };

        Ok(LoadedConfig {
            value,
            origin: source.origin,
            project_root: source.project_root,
        })
    }
}

fn read_local(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })
}

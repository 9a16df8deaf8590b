//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every failure of path resolution, discovery,
//!   decoding, and remote fetching.
//! - Classify any error into one of the fixed [`ErrorKind`] categories.
//!
//! Does NOT handle:
//! - Presenting errors to users (callers decide; see the `configurator` CLI).
//!
//! Invariants:
//! - Every error returned by a load operation names the path or URL it was
//!   working on. `decode` alone has no origin; loaders wrap its errors in
//!   `SourceParse`.
//! - Lower-level errors are chained via `#[source]`, never flattened into text.
//! - `ProjectLoad` wraps a failure that happened after a root was found, so the
//!   root travels with the error; `kind()` reports the wrapped category.

use std::path::PathBuf;
use thiserror::Error;

use crate::loader::SourceOrigin;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while resolving or loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A relative path resolved to a location outside the working directory.
    #[error("Path {path:?} is outside the current directory")]
    PathTraversal { path: PathBuf },

    #[error("Unable to determine working directory")]
    WorkingDirUnavailable(#[source] std::io::Error),

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML")]
    Parse(#[source] toml::de::Error),

    /// TOML documents must be UTF-8; the payload was not.
    #[error("Failed to parse TOML: payload is not valid UTF-8")]
    InvalidEncoding(#[source] std::str::Utf8Error),

    /// A payload read from `origin` failed to decode.
    #[error("Failed to parse config from {origin}")]
    SourceParse {
        origin: SourceOrigin,
        #[source]
        source: Box<ConfigError>,
    },

    #[error("{file} not found in {start_dir} or any parent directory", file = crate::constants::PROJECT_CONFIG_FILE)]
    MarkerNotFound { start_dir: PathBuf },

    #[error("Invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme '{scheme}' in {url} (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("Failed to initialize HTTP client")]
    HttpClient(#[source] reqwest::Error),

    /// The HTTP request could not be constructed.
    #[error("Failed to create HTTP request for {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete: DNS, connect, timeout, or body read.
    #[error("Failed to fetch TOML from {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error(
        "No configuration URL supplied. Pass one explicitly or set {var}",
        var = crate::constants::PROJECT_TOML_ENV
    )]
    SourceUnset,

    #[error("Failed to load config from project root {root}")]
    ProjectLoad {
        root: PathBuf,
        #[source]
        source: Box<ConfigError>,
    },
}

/// Category of a [`ConfigError`], stable across variant additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PathTraversal,
    WorkingDirUnavailable,
    Io,
    Parse,
    MarkerNotFound,
    Request,
    Transport,
    Status,
    SourceUnset,
}

impl ConfigError {
    /// Classify this error.
    ///
    /// Wrapped errors report the category of the underlying failure, so a
    /// parse failure after discovery is still `ErrorKind::Parse`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::PathTraversal { .. } => ErrorKind::PathTraversal,
            ConfigError::WorkingDirUnavailable(_) => ErrorKind::WorkingDirUnavailable,
            ConfigError::ConfigFileRead { .. } => ErrorKind::Io,
            ConfigError::Parse(_) | ConfigError::InvalidEncoding(_) => ErrorKind::Parse,
            ConfigError::MarkerNotFound { .. } => ErrorKind::MarkerNotFound,
            ConfigError::InvalidUrl { .. }
            | ConfigError::UnsupportedScheme { .. }
            | ConfigError::HttpClient(_)
            | ConfigError::Request { .. } => ErrorKind::Request,
            ConfigError::Transport { .. } => ErrorKind::Transport,
            ConfigError::UnexpectedStatus { .. } => ErrorKind::Status,
            ConfigError::SourceUnset => ErrorKind::SourceUnset,
            ConfigError::SourceParse { source, .. } | ConfigError::ProjectLoad { source, .. } => {
                source.kind()
            }
        }
    }

    /// The project root found before this error occurred, if any.
    pub fn project_root(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::ProjectLoad { root, .. } => Some(root),
            _ => None,
        }
    }

    /// The HTTP status observed, for `ErrorKind::Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ConfigError::UnexpectedStatus { status, .. } => Some(*status),
            ConfigError::ProjectLoad { source, .. } => source.status(),
            _ => None,
        }
    }
}

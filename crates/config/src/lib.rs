//! Generic `project.toml` loading.
//!
//! This crate resolves a configuration location (an explicit file path, a
//! directory to search upward from, or a remote URL) into raw bytes and
//! decodes them into any caller-supplied `serde` type. It defines no schema.

pub mod constants;
mod decode;
mod error;
mod fetch;
mod loader;
mod path;
mod root;

pub use constants::{DEFAULT_URL_TIMEOUT, PROJECT_CONFIG_FILE, PROJECT_TOML_ENV, SUCCESS_STATUS};
pub use decode::decode;
pub use error::{ConfigError, ErrorKind, Result};
pub use fetch::{RemoteFetcher, fetch};
pub use loader::{
    ConfigLocation, LoadedConfig, ResolvedSource, SourceOrigin, env_var_or_none,
    load_from_path, load_from_project_root, load_from_url, load_from_url_or_env, url_from_env,
};
pub use path::{PathResolver, resolve_path};
pub use root::{ProjectRoot, find_root};

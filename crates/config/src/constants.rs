//! Centralized constants for project configuration loading.
//!
//! These values are part of the loader's contract and are not configurable.

use std::time::Duration;

// =============================================================================
// Discovery
// =============================================================================

/// Marker filename whose presence identifies a project root.
pub const PROJECT_CONFIG_FILE: &str = "project.toml";

// =============================================================================
// Remote Loading
// =============================================================================

/// Environment variable holding the URL of a remote `project.toml`.
pub const PROJECT_TOML_ENV: &str = "PROJECT_TOML";

/// Default HTTP fetch timeout in seconds.
pub const DEFAULT_URL_TIMEOUT_SECS: u64 = 10;

/// Deadline applied to every remote fetch (connect, headers, and body).
pub const DEFAULT_URL_TIMEOUT: Duration = Duration::from_secs(DEFAULT_URL_TIMEOUT_SECS);

/// The only HTTP status accepted as a successful fetch.
pub const SUCCESS_STATUS: u16 = 200;

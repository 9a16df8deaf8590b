//! Environment variable lookup for remote configuration.
//!
//! Responsibilities:
//! - Read `PROJECT_TOML` with empty/whitespace filtering.
//! - Choose between an explicitly supplied URL and the environment value.
//!
//! Does NOT handle:
//! - Fetching or decoding (see `fetch` and `decode`).
//! - Serializing access to the process environment. Callers that mutate the
//!   environment concurrently must synchronize themselves.
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - An explicit URL always wins; the environment is only read without one.

use crate::constants::PROJECT_TOML_ENV;
use crate::error::{ConfigError, Result};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| non_blank(&s))
}

/// Read the remote configuration URL from `PROJECT_TOML`.
pub fn url_from_env() -> Option<String> {
    env_var_or_none(PROJECT_TOML_ENV)
}

/// Pick the URL to load: `explicit` if supplied, otherwise whatever
/// `env_value` produces. `env_value` is not called when `explicit` is present.
/// Blank values from either side count as absent.
pub(crate) fn select_url<F>(explicit: Option<&str>, env_value: F) -> Result<String>
where
    F: FnOnce() -> Option<String>,
{
    explicit
        .and_then(non_blank)
        .or_else(|| env_value().as_deref().and_then(non_blank))
        .ok_or(ConfigError::SourceUnset)
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

//! TOML decoding into caller-defined types.
//!
//! The decoder knows nothing about the target schema. Callers own the type and
//! express optional fields with `#[serde(default)]` as usual.
//!
//! Invariants:
//! - A document with no keys (empty, whitespace, or comments only) decodes to
//!   `T::default()` and is never an error.
//! - Syntax errors and type mismatches both surface as `ConfigError::Parse`
//!   carrying the parser diagnostic, including line and column.
//! - String content is passed through as written; no Unicode normalization.

use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};

/// Decode a TOML payload into `T`.
pub fn decode<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let text = std::str::from_utf8(bytes).map_err(ConfigError::InvalidEncoding)?;
    let table: toml::Table = text.parse().map_err(ConfigError::Parse)?;

    if table.is_empty() {
        tracing::debug!("config payload has no keys; using defaults");
        return Ok(T::default());
    }

    toml::from_str(text).map_err(ConfigError::Parse)
}

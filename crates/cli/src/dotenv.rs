//! `.env` loading for the CLI.
//!
//! Responsibilities:
//! - Load a `.env` file from the working directory before flags are parsed, so
//!   it can supply `PROJECT_TOML`.
//! - Honor `DOTENV_DISABLED` (`1` or `true`) to skip loading entirely.
//!
//! Invariants:
//! - A missing `.env` file is not an error.
//! - Errors NEVER include raw `.env` line contents.

use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DotenvError {
    /// SAFETY: only the byte index of the failure is kept, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    Parse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    Io { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    Unknown,
}

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from `.env` if present and not disabled.
pub fn load_dotenv() -> Result<(), DotenvError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env file");
            Ok(())
        }
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(DotenvError::Parse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(DotenvError::Io {
            kind: io_err.kind(),
        }),
        Err(_) => Err(DotenvError::Unknown),
    }
}

//! Remote retrieval of configuration payloads over HTTP.
//!
//! Responsibilities:
//! - Validate the URL and issue a single GET with a bounded deadline.
//! - Classify failures as request, transport, or status errors.
//!
//! Does NOT handle:
//! - Retries, caching, or authentication.
//! - Decoding the payload (see `decode`).
//!
//! Invariants:
//! - Every fetch is bounded by `DEFAULT_URL_TIMEOUT`, covering connect,
//!   headers, and body.
//! - Only status 200 is success; the observed status is reported otherwise.
//! - The response is owned by `fetch` and dropped on every return path.

use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use url::Url;

use crate::constants::{DEFAULT_URL_TIMEOUT, SUCCESS_STATUS};
use crate::error::{ConfigError, Result};

/// Blocking HTTP fetcher for remote configuration files.
#[derive(Debug, Clone)]
pub struct RemoteFetcher {
    http_client: HttpClient,
}

impl RemoteFetcher {
    /// Build a fetcher using the fixed default deadline.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_URL_TIMEOUT)
    }

    pub(crate) fn with_timeout(timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self { http_client })
    }

    /// Fetch the raw bytes at `url`.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let parsed = parse_url(url)?;
        tracing::debug!(url = %parsed, "fetching remote config");

        let request = self
            .http_client
            .get(parsed)
            .build()
            .map_err(|source| ConfigError::Request {
                url: url.to_string(),
                source,
            })?;

        let response =
            self.http_client
                .execute(request)
                .map_err(|source| ConfigError::Transport {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status().as_u16();
        if status != SUCCESS_STATUS {
            return Err(ConfigError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().map_err(|source| ConfigError::Transport {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!(url, bytes = body.len(), "fetched remote config");
        Ok(body.to_vec())
    }
}

/// Fetch the raw bytes at `url` with a fresh default fetcher.
pub fn fetch(url: &str) -> Result<Vec<u8>> {
    RemoteFetcher::new()?.fetch(url)
}

/// Parse and validate a fetch URL. Only `http` and `https` are accepted.
pub(crate) fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|source| ConfigError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(ConfigError::UnsupportedScheme {
            url: url.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

//! Client configuration.
//!
//! This module defines the TOML-deserializable configuration used to
//! construct a [`Client`](crate::Client): the gateway base URL, the merchant
//! credentials, and the request timeout handed to the HTTP transport.

use serde::Deserialize;
use url::Url;

use crate::error::{BamboraError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gateway client configuration.
///
/// Credentials are fixed at client construction and never mutated afterward;
/// per-request API key overrides are threaded through call parameters
/// instead (see [`ReportResource`](crate::v1::ReportResource)).
///
/// # Examples
///
/// ```
/// use bambora_client::Config;
///
/// let toml = r#"
///     base_url = "https://api.na.bambora.com"
///     api_key = "fakekey"
///     merchant_id = "1"
///     sub_merchant_id = "2"
/// "#;
///
/// let config = Config::from_toml(toml).unwrap();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.timeout_secs, 30);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Gateway base URL (e.g., <https://api.na.bambora.com>).
    pub base_url: String,

    /// Default API key used to derive the passcode header.
    pub api_key: String,

    /// Merchant identifier.
    pub merchant_id: String,

    /// Optional sub-merchant identifier for multi-tenant accounts.
    ///
    /// When set, every request carries a `Sub-Merchant-ID` header.
    #[serde(default)]
    pub sub_merchant_id: Option<String>,

    /// Total request timeout in seconds, enforced by the HTTP transport.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Parses a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`BamboraError::ConfigError`] if the document does not
    /// deserialize into a valid configuration.
    pub fn from_toml(document: &str) -> Result<Self> {
        toml::from_str(document).map_err(|e| BamboraError::ConfigError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// Checks that the base URL parses as an `http`/`https` URL and that the
    /// merchant credentials are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`BamboraError::InvalidBaseUrl`] for a malformed base URL and
    /// [`BamboraError::ConfigError`] for missing credentials.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|_| BamboraError::InvalidBaseUrl(self.base_url.clone()))?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(BamboraError::InvalidBaseUrl(self.base_url.clone()));
        }

        if self.api_key.is_empty() {
            return Err(BamboraError::ConfigError("api_key must not be empty".to_owned()));
        }

        if self.merchant_id.is_empty() {
            return Err(BamboraError::ConfigError("merchant_id must not be empty".to_owned()));
        }

        Ok(())
    }
}

//! Error types for the Bambora client.
//!
//! This module defines all error types that can occur while building and
//! dispatching gateway requests. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! Note that a response body that fails to parse is *not* an error: the
//! response adapters convert it into an inert
//! [`ErrorResponse`](crate::adapters::ErrorResponse) record instead. The
//! variants here cover the request side and the transport boundary only.
//!
//! # Error Categories
//!
//! - **Transport** ([`BamboraError::HttpError`]): network communication
//!   failures, propagated unchanged from [`reqwest`]
//! - **Input validation** ([`BamboraError::InvalidQueryParams`]): malformed
//!   caller-supplied request data
//! - **Configuration** ([`BamboraError::InvalidBaseUrl`],
//!   [`BamboraError::ConfigError`]): rejected client configuration

use thiserror::Error;

/// Result type alias for gateway operations.
///
/// This is a convenience type that uses [`BamboraError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, BamboraError>;

/// Errors that can occur while talking to the Bambora gateway.
///
/// All variants include contextual information about what went wrong.
///
/// No retry policy is applied anywhere in this crate: a transport failure
/// surfaces after exactly one network attempt, and any retry behavior
/// belongs to the caller.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum BamboraError {
    /// HTTP request failed.
    ///
    /// This error wraps [`reqwest::Error`] and occurs when network
    /// communication with the gateway fails. Common causes include:
    /// - Request timeouts (configurable via [`Config`](crate::Config))
    /// - Connection refused or DNS resolution failures
    /// - TLS errors
    ///
    /// Note that an HTTP error *status* is not a transport failure: the
    /// gateway's 4xx/5xx responses are decoded like any other response.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request body serialization failed.
    ///
    /// Request bodies are serialized to JSON before dispatch; this error
    /// surfaces when the supplied value cannot be represented on the wire.
    #[error("request serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Query parameters were rejected.
    ///
    /// Query parameters must be a flat JSON object of scalar values so they
    /// can be encoded as a deterministic query string.
    #[error("invalid query parameters: {0}")]
    InvalidQueryParams(String),

    /// The configured gateway base URL is malformed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Client configuration was rejected.
    ///
    /// Returned when configuration fails to deserialize or when
    /// [`Config::validate`](crate::Config::validate) finds missing
    /// credentials.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_query_params_display() {
        let error = BamboraError::InvalidQueryParams("must be a JSON object".into());
        assert_eq!(error.to_string(), "invalid query parameters: must be a JSON object");
    }

    #[test]
    fn test_invalid_base_url_display() {
        let error = BamboraError::InvalidBaseUrl("not-a-url".into());
        assert!(error.to_string().contains("invalid base URL"));
    }

    #[test]
    fn test_config_error_display() {
        let error = BamboraError::ConfigError("api_key must not be empty".into());
        assert_eq!(error.to_string(), "configuration error: api_key must not be empty");
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = BamboraError::from(source);
        assert!(matches!(error, BamboraError::SerializationError(_)));
    }
}

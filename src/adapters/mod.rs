//! Response adapters: raw transport responses → canonical results.
//!
//! The gateway answers some endpoints with JSON and others with URL-encoded
//! query strings. This module normalizes both into a single canonical shape:
//! a recursively key-normalized map on success, or an inert
//! [`ErrorResponse`] record carrying the untouched body when the wire
//! content does not conform to the expected grammar.
//!
//! # Architecture
//!
//! Each grammar is a [`ResponseAdapter`] implementation. Only the parse step
//! differs between variants; the shared [`ResponseAdapter::decode`] contract
//! handles key normalization and the non-throwing failure path:
//!
//! ```text
//! RawResponse ──parse──▶ Value ──deep_transform_keys──▶ ApiResponse::Success
//!      │
//!      └── parse failure ─────────────────────────────▶ ApiResponse::Failure
//! ```
//!
//! The adapters are the single boundary where untrusted wire content is
//! converted to either well-typed data or a failure record; a decoding
//! error never escapes as an exception to the caller.

use serde_json::{Map, Value};
use thiserror::Error;

pub mod json;
pub mod query_string;

pub use json::JsonAdapter;
pub use query_string::QueryStringAdapter;

#[cfg(test)]
mod tests;

/// Raw response handed over by the HTTP transport.
///
/// Owned by the transport layer; the adapters only read it.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// Raw response body.
    pub body: String,
}

/// Canonical failure record for a response that could not be decoded.
///
/// The body is the original wire content, byte-for-byte; it is deliberately
/// *not* normalized since it did not parse under the adapter's grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP status code of the failed response.
    pub status: u16,
    /// Unmodified original response body.
    pub body: String,
}

/// Canonical result of decoding a gateway response.
///
/// Always exactly one of `Success` or `Failure` — callers never see a parse
/// error. An HTTP error status with a parseable body still decodes to
/// `Success`; status codes are not special-cased here.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed, recursively key-normalized response map. Nesting shape,
    /// sequence order, and per-map key insertion order are preserved.
    Success(Map<String, Value>),
    /// The body did not conform to the adapter's grammar.
    Failure(ErrorResponse),
}

impl ApiResponse {
    /// Returns `true` if the response body parsed under the adapter grammar.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the normalized response map, if the body parsed.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Success(map) => Some(map),
            Self::Failure(_) => None,
        }
    }
}

/// A response body that does not conform to an adapter's grammar.
///
/// Internal to the decode step: [`ResponseAdapter::decode`] converts it into
/// an [`ApiResponse::Failure`] before returning.
#[derive(Debug, Error)]
#[error("body does not conform to the expected grammar: {0}")]
pub struct ParseError(String);

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        Self(source.to_string())
    }
}

/// Converts a wire-grammar key to the canonical key form.
///
/// Canonical keys are plain owned UTF-8 strings, uniform across all decoded
/// maps regardless of the grammar's native key representation (escaped JSON
/// strings, percent-encoded query-string names).
#[must_use]
pub fn canonical_key(key: &str) -> String {
    key.to_owned()
}

/// Recursively rebuilds a value tree, converting every map key through
/// `transform`.
///
/// Maps are rebuilt entry by entry in insertion order; sequences are
/// transformed elementwise, preserving order; scalar leaves pass through
/// unchanged. Terminates on acyclic input of arbitrary depth.
pub fn deep_transform_keys(value: Value, transform: &impl Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let mut transformed = Map::with_capacity(map.len());
            for (key, entry) in map {
                transformed.insert(transform(&key), deep_transform_keys(entry, transform));
            }
            Value::Object(transformed)
        }
        Value::Array(items) => Value::Array(
            items.into_iter().map(|item| deep_transform_keys(item, transform)).collect(),
        ),
        other => other,
    }
}

/// Polymorphic decoder over a declared body grammar.
///
/// Implementations supply [`parse`](Self::parse); the provided
/// [`decode`](Self::decode) applies the shared normalization and failure
/// contract on top of it.
pub trait ResponseAdapter {
    /// Parses a raw body under this adapter's grammar into a value tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the body does not conform to the grammar.
    fn parse(&self, body: &str) -> std::result::Result<Value, ParseError>;

    /// Decodes a raw transport response into the canonical result shape.
    ///
    /// This method never fails: a body that parses to a map comes back as
    /// [`ApiResponse::Success`] with every key normalized; anything else
    /// (including a parseable body whose top level is not a map) comes back
    /// as [`ApiResponse::Failure`] carrying the original status and body.
    fn decode(&self, response: RawResponse) -> ApiResponse {
        match self.parse(&response.body) {
            Ok(parsed) => match deep_transform_keys(parsed, &canonical_key) {
                Value::Object(map) => ApiResponse::Success(map),
                _ => ApiResponse::Failure(ErrorResponse {
                    status: response.status,
                    body: response.body,
                }),
            },
            Err(_) => {
                ApiResponse::Failure(ErrorResponse { status: response.status, body: response.body })
            }
        }
    }
}

//! Authenticated request construction.
//!
//! Derives the gateway's passcode authentication header from merchant
//! credentials and assembles method, path, body, query string, and headers
//! into a transport-ready [`ApiRequest`].

use serde_json::Value;
use url::form_urlencoded;

use crate::error::{BamboraError, Result};

/// Merchant credentials used to derive authentication headers.
///
/// Immutable once a [`Client`](crate::Client) is constructed; a per-request
/// API key override is passed as a call parameter rather than by mutating
/// this struct.
///
/// The `Debug` implementation redacts the API key.
#[derive(Clone)]
pub struct Credentials {
    /// Default API key.
    pub api_key: String,
    /// Merchant identifier.
    pub merchant_id: String,
    /// Optional sub-merchant identifier.
    pub sub_merchant_id: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("merchant_id", &self.merchant_id)
            .field("sub_merchant_id", &self.sub_merchant_id)
            .finish()
    }
}

impl Credentials {
    /// Derives the `Authorization` header value.
    ///
    /// The value is the literal string `Passcode ` followed by the standard
    /// base64 encoding (padding retained) of the UTF-8 bytes of
    /// `"<merchant_id>:<api_key>"`, matching the gateway's documented
    /// passcode scheme byte for byte.
    ///
    /// A supplied `api_key_override` replaces the default key for this
    /// derivation only.
    ///
    /// # Examples
    ///
    /// ```
    /// use bambora_client::rest::Credentials;
    ///
    /// let credentials = Credentials {
    ///     api_key: "fakekey".to_owned(),
    ///     merchant_id: "1".to_owned(),
    ///     sub_merchant_id: None,
    /// };
    ///
    /// assert_eq!(credentials.passcode(None), "Passcode MTpmYWtla2V5");
    /// ```
    #[must_use]
    pub fn passcode(&self, api_key_override: Option<&str>) -> String {
        let api_key = api_key_override.unwrap_or(&self.api_key);
        let token = base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            format!("{}:{api_key}", self.merchant_id),
        );
        format!("Passcode {token}")
    }
}

/// HTTP methods used by the gateway API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Returns the wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully assembled, transport-ready request.
///
/// Constructed fresh per call by [`build_request`]; never reused.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Request path relative to the gateway base URL.
    pub path: String,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
    /// Serialized query string (deterministically ordered), if any.
    pub query: Option<String>,
    /// Request headers in insertion order.
    pub headers: Vec<(String, String)>,
}

/// Builds a transport-ready request with authentication headers applied.
///
/// - `Authorization` is always present, derived via [`Credentials::passcode`]
///   (with `api_key_override` taking precedence when supplied).
/// - `Sub-Merchant-ID` is added when the credentials carry one.
/// - A body serializes to JSON and sets `Content-Type: application/json`.
/// - Query parameters encode via [`encode_query`].
///
/// # Errors
///
/// Returns [`BamboraError::SerializationError`] if the body cannot be
/// serialized and [`BamboraError::InvalidQueryParams`] if the query
/// parameters are not a flat JSON object of scalars.
pub fn build_request(
    credentials: &Credentials,
    method: Method,
    path: &str,
    body: Option<&Value>,
    query_params: Option<&Value>,
    api_key_override: Option<&str>,
) -> Result<ApiRequest> {
    let mut headers =
        vec![("Authorization".to_owned(), credentials.passcode(api_key_override))];

    if let Some(sub_merchant_id) = &credentials.sub_merchant_id {
        headers.push(("Sub-Merchant-ID".to_owned(), sub_merchant_id.clone()));
    }

    let body = match body {
        Some(value) => {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
            Some(serde_json::to_string(value)?)
        }
        None => None,
    };

    let query = query_params.map(encode_query).transpose()?;

    Ok(ApiRequest { method, path: path.to_owned(), body, query, headers })
}

/// Encodes query parameters as a canonical, deterministically ordered query
/// string.
///
/// Keys are sorted lexicographically before percent-encoding so that an
/// identical parameter map always produces an identical query string,
/// regardless of insertion order.
///
/// # Errors
///
/// Returns [`BamboraError::InvalidQueryParams`] if `params` is not a JSON
/// object or contains nested (non-scalar) values.
pub fn encode_query(params: &Value) -> Result<String> {
    let map = params.as_object().ok_or_else(|| {
        BamboraError::InvalidQueryParams("query parameters must be a JSON object".to_owned())
    })?;

    let mut pairs = map
        .iter()
        .map(|(key, value)| Ok((key.as_str(), scalar_to_string(key, value)?)))
        .collect::<Result<Vec<_>>>()?;
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, &value);
    }
    Ok(serializer.finish())
}

fn scalar_to_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(BamboraError::InvalidQueryParams(format!(
            "parameter `{key}` must be a scalar value"
        ))),
    }
}

//! URL-encoded query-string response adapter.
//!
//! A handful of legacy gateway endpoints answer with
//! `application/x-www-form-urlencoded` bodies instead of JSON. This adapter
//! parses them into the same canonical map shape the JSON adapter produces.

use serde_json::{Map, Value};
use url::form_urlencoded;

use super::{ParseError, ResponseAdapter};

/// Adapter for URL-encoded query-string response bodies.
///
/// Parsing is strict: every non-empty `&`-separated pair must contain `=`.
/// Keys suffixed with `[]` accumulate their values into an array in
/// encounter order; all values decode as strings. A key that appears in both
/// bare and `[]` form is a parse failure, in either order.
///
/// # Examples
///
/// ```
/// use bambora_client::adapters::{QueryStringAdapter, RawResponse, ResponseAdapter};
/// use serde_json::json;
///
/// let response = RawResponse {
///     status: 200,
///     headers: vec![],
///     body: "gelflings[]=rian&gelflings[]=deet&gelflings[]=brea".to_owned(),
/// };
///
/// let decoded = QueryStringAdapter.decode(response);
/// assert_eq!(decoded.as_map().unwrap()["gelflings"], json!(["rian", "deet", "brea"]));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryStringAdapter;

impl ResponseAdapter for QueryStringAdapter {
    fn parse(&self, body: &str) -> Result<Value, ParseError> {
        if body.is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        if body.split('&').any(|pair| !pair.contains('=')) {
            return Err(ParseError::new("expected `key=value` pairs separated by `&`"));
        }

        let mut map = Map::new();
        for (key, value) in form_urlencoded::parse(body.as_bytes()) {
            let value = Value::String(value.into_owned());
            match key.strip_suffix("[]") {
                Some(name) => {
                    let entry = map
                        .entry(name.to_owned())
                        .or_insert_with(|| Value::Array(Vec::new()));
                    match entry {
                        Value::Array(items) => items.push(value),
                        _ => {
                            return Err(ParseError::new(format!(
                                "parameter `{name}` mixes scalar and sequence forms"
                            )));
                        }
                    }
                }
                None => {
                    if matches!(map.get(&*key), Some(Value::Array(_))) {
                        return Err(ParseError::new(format!(
                            "parameter `{key}` mixes scalar and sequence forms"
                        )));
                    }
                    map.insert(key.into_owned(), value);
                }
            }
        }

        Ok(Value::Object(map))
    }
}

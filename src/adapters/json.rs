//! JSON-grammar response adapter.

use serde_json::Value;

use super::{ParseError, ResponseAdapter};

/// Adapter for `application/json` response bodies.
///
/// This is the default grammar for every documented gateway endpoint.
///
/// # Examples
///
/// ```
/// use bambora_client::adapters::{JsonAdapter, RawResponse, ResponseAdapter};
///
/// let response = RawResponse {
///     status: 200,
///     headers: vec![],
///     body: r#"{"code":1,"message":"Operation Successful"}"#.to_owned(),
/// };
///
/// let decoded = JsonAdapter.decode(response);
/// assert!(decoded.is_success());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAdapter;

impl ResponseAdapter for JsonAdapter {
    fn parse(&self, body: &str) -> Result<Value, ParseError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::{ApiResponse, ErrorResponse, RawResponse};

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse { status, headers: vec![], body: body.to_owned() }
    }

    #[test]
    fn test_decode_flat_object() {
        let decoded = JsonAdapter.decode(raw(
            200,
            r#"{"code":1,"message":"Operation Successful","customer_code":"02355E2e"}"#,
        ));

        let expected = json!({
            "code": 1,
            "message": "Operation Successful",
            "customer_code": "02355E2e",
        });
        assert_eq!(decoded, ApiResponse::Success(expected.as_object().unwrap().clone()));
    }

    #[test]
    fn test_decode_nested_object() {
        let decoded = JsonAdapter.decode(raw(
            200,
            r#"{"card":{"number":"4030000010001234","expiry":{"month":"12","year":"23"}},"refs":["a","b"]}"#,
        ));

        let map = decoded.as_map().unwrap();
        let card = map["card"].as_object().unwrap();
        assert_eq!(card["number"], "4030000010001234");
        assert_eq!(card["expiry"]["month"], "12");
        assert_eq!(map["refs"], json!(["a", "b"]));
    }

    #[test]
    fn test_decode_preserves_key_order() {
        let decoded = JsonAdapter.decode(raw(200, r#"{"zebra":1,"apple":2,"mango":3}"#));

        let keys: Vec<&str> = decoded.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_decode_malformed_body_is_failure() {
        let decoded = JsonAdapter.decode(raw(500, "GARTHIM! ATTACK!"));

        assert_eq!(
            decoded,
            ApiResponse::Failure(ErrorResponse {
                status: 500,
                body: "GARTHIM! ATTACK!".to_owned()
            })
        );
    }

    #[test]
    fn test_decode_failure_body_is_byte_identical() {
        let body = "{\"truncated\": \u{1f4b3}";
        let decoded = JsonAdapter.decode(raw(502, body));

        match decoded {
            ApiResponse::Failure(error) => assert_eq!(error.body, body),
            ApiResponse::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_decode_top_level_array_is_failure() {
        let decoded = JsonAdapter.decode(raw(200, "[1,2,3]"));
        assert!(!decoded.is_success());
    }

    #[test]
    fn test_decode_top_level_scalar_is_failure() {
        let decoded = JsonAdapter.decode(raw(200, "42"));
        assert!(!decoded.is_success());
    }

    #[test]
    fn test_decode_empty_body_is_failure() {
        let decoded = JsonAdapter.decode(raw(204, ""));
        assert_eq!(
            decoded,
            ApiResponse::Failure(ErrorResponse { status: 204, body: String::new() })
        );
    }

    #[test]
    fn test_decode_empty_object() {
        let decoded = JsonAdapter.decode(raw(200, "{}"));
        assert_eq!(decoded.as_map().unwrap().len(), 0);
    }

    #[test]
    fn test_decode_error_status_with_parseable_body_is_success() {
        // HTTP statuses are not special-cased; parse success is the only branch.
        let decoded = JsonAdapter.decode(raw(402, r#"{"code":195,"message":"declined"}"#));
        assert!(decoded.is_success());
    }
}

use serde_json::{Map, Value, json};

use super::{ApiResponse, ErrorResponse, canonical_key, deep_transform_keys};


fn to_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn test_deep_transform_keys_scalar_passthrough() {
    let transform = |key: &str| key.to_uppercase();

    assert_eq!(deep_transform_keys(json!(42), &transform), json!(42));
    assert_eq!(deep_transform_keys(json!("rian"), &transform), json!("rian"));
    assert_eq!(deep_transform_keys(Value::Null, &transform), Value::Null);
}

#[test]
fn test_deep_transform_keys_applies_at_every_depth() {
    let input = json!({
        "outer": {
            "inner": [{"leaf": 1}, {"leaf": 2}],
        },
    });

    let transformed = deep_transform_keys(input, &|key: &str| key.to_uppercase());

    assert_eq!(
        transformed,
        json!({
            "OUTER": {
                "INNER": [{"LEAF": 1}, {"LEAF": 2}],
            },
        })
    );
}

#[test]
fn test_deep_transform_keys_preserves_sequence_order() {
    let input = json!({"items": ["c", "a", "b"]});
    let transformed = deep_transform_keys(input, &canonical_key);

    assert_eq!(transformed["items"], json!(["c", "a", "b"]));
}

#[test]
fn test_deep_transform_keys_preserves_map_key_order() {
    let input = json!({"zebra": 1, "apple": {"nested_z": 1, "nested_a": 2}});
    let transformed = to_map(deep_transform_keys(input, &canonical_key));

    let keys: Vec<&str> = transformed.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zebra", "apple"]);

    let nested: Vec<&str> =
        transformed["apple"].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(nested, vec!["nested_z", "nested_a"]);
}

#[test]
fn test_deep_transform_keys_deeply_nested() {
    // 64 levels of nesting; structural recursion must terminate cleanly.
    let mut value = json!({"leaf": true});
    for _ in 0..64 {
        value = json!({"level": value});
    }

    let transformed = deep_transform_keys(value.clone(), &canonical_key);
    assert_eq!(transformed, value);
}

#[test]
fn test_canonical_key_is_identity_on_utf8() {
    assert_eq!(canonical_key("customer_code"), "customer_code");
    assert_eq!(canonical_key(""), "");
    assert_eq!(canonical_key("clé"), "clé");
}

#[test]
fn test_api_response_accessors() {
    let success = ApiResponse::Success(to_map(json!({"code": 1})));
    assert!(success.is_success());
    assert_eq!(success.as_map().unwrap()["code"], 1);

    let failure =
        ApiResponse::Failure(ErrorResponse { status: 500, body: "GARTHIM! ATTACK!".to_owned() });
    assert!(!failure.is_success());
    assert!(failure.as_map().is_none());
}

//! Structural equivalence against a standards-compliant JSON parser.
//!
//! Ignoring trivia, decoded kinds/values/array order/object key sets must
//! match what `serde_json` produces for the same (comment-free) input.

use parrot_codec::{Node, ValueKind, decode};

const PLAIN_JSON_VALUES: &[&str] = &[
    r#"{}"#,
    r#"[{}]"#,
    r#"true"#,
    r#"false"#,
    r#"null"#,
    r#"12345"#,
    r#"-123.45e+6"#,
    r#" "text" "#,
    r#"{"key": "value"}"#,
    r#"{"number": 12345}"#,
    r#"{"boolean": true, "nullValue": null}"#,
    r#"{"emptyArray": [], "emptyObject": {}}"#,
    r#"{"array": [1, 2, 3, 4, 5]}"#,
    r#"{"nested": {"innerKey": "innerValue"}}"#,
    r#"{"mixed": [1, "two", {"three": 3}, [4]]}"#,
    r#"{"escapedString": "Line1\nLine2\tTabbed\"Quote\""}"#,
    r#"{"whitespace": "   \n\t  "}"#,
    r#"{"specialChars": "!@#$%^&*()_+-=[]{}|;:',.<>?/`~"}"#,
    r#"{"unicode": "ABC"}"#,
    r#"{"largeNumber": 12345678901234567890}"#,
    r#"{"floatNumber": 123.456e-7}"#,
];

#[test]
fn decoded_values_match_reference_parser() {
    for source in PLAIN_JSON_VALUES {
        let reference: serde_json::Value = serde_json::from_str(source)
            .unwrap_or_else(|err| panic!("reference parser rejected {source:?}: {err}"));
        let tree = decode(source)
            .unwrap_or_else(|err| panic!("decode rejected {source:?}: {err}"));
        assert_matches(&reference, &tree, source);
    }
}

fn assert_matches(expected: &serde_json::Value, actual: &Node, source: &str) {
    match expected {
        serde_json::Value::Null => {
            assert_eq!(actual.kind(), ValueKind::Null, "in {source:?}");
        }
        serde_json::Value::Bool(b) => {
            assert_eq!(actual.as_bool().unwrap(), *b, "in {source:?}");
        }
        serde_json::Value::Number(n) => {
            assert_eq!(
                actual.as_f64().unwrap(),
                n.as_f64().unwrap(),
                "in {source:?}"
            );
        }
        serde_json::Value::String(s) => {
            assert_eq!(actual.as_str().unwrap(), s, "in {source:?}");
        }
        serde_json::Value::Array(items) => {
            let array = actual.as_array().unwrap();
            assert_eq!(array.len(), items.len(), "in {source:?}");
            for (i, item) in items.iter().enumerate() {
                assert_matches(item, array.get(i).unwrap(), source);
            }
        }
        serde_json::Value::Object(map) => {
            let object = actual.as_object().unwrap();
            assert_eq!(object.len(), map.len(), "in {source:?}");
            for (key, value) in map {
                let found = object
                    .get(key)
                    .unwrap_or_else(|| panic!("missing key {key:?} in {source:?}"));
                assert_matches(value, found, source);
            }
        }
    }
}

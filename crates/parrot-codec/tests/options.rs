//! Option-boundary scenarios: every extension toggled on and off, the
//! presets, and the nesting-depth limit.

use parrot_codec::{DecodeOptions, ParseErrorKind, ValueKind, decode, decode_with};

fn only_trailing_commas() -> DecodeOptions {
    DecodeOptions::strict().trailing_commas(true)
}

#[test]
fn array_with_trailing_comma_allowed() {
    let node = decode_with("[1, 2, 3,]", &only_trailing_commas()).unwrap();
    let array = node.as_array().unwrap();
    assert_eq!(array.len(), 3);
    assert_eq!(array.get(0).unwrap().as_f64().unwrap(), 1.0);
    assert_eq!(array.get(1).unwrap().as_f64().unwrap(), 2.0);
    assert_eq!(array.get(2).unwrap().as_f64().unwrap(), 3.0);
}

#[test]
fn object_with_trailing_comma_allowed() {
    let node = decode_with(r#"{"a": 1, "b": 2,}"#, &only_trailing_commas()).unwrap();
    let obj = node.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("a").unwrap().as_f64().unwrap(), 1.0);
    assert_eq!(obj.get("b").unwrap().as_f64().unwrap(), 2.0);
}

#[test]
fn trailing_comma_rejected_when_disabled() {
    let err = decode_with("[1, 2, 3,]", &DecodeOptions::strict()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TrailingCommaInArray);

    let err = decode_with(r#"{"a": 1, "b": 2,}"#, &DecodeOptions::strict()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TrailingCommaInObject);
}

#[test]
fn single_line_comments_toggle() {
    let options = DecodeOptions::strict().single_line_comments(true);
    let source = "{\n    // This is a comment\n    \"value\": 42\n}";
    let node = decode_with(source, &options).unwrap();
    assert_eq!(
        node.as_object().unwrap().get("value").unwrap().as_f64().unwrap(),
        42.0
    );

    let err = decode_with(source, &DecodeOptions::strict()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SingleLineCommentsDisabled);
}

#[test]
fn many_single_line_comments() {
    let options = DecodeOptions::strict().single_line_comments(true);
    let source =
        "[\n    // First comment\n    1,\n    // Second comment\n    2,\n    // Third comment\n    3\n] // end array";
    let node = decode_with(source, &options).unwrap();
    assert_eq!(node.as_array().unwrap().len(), 3);
}

#[test]
fn multi_line_comments_toggle() {
    let options = DecodeOptions::strict().multi_line_comments(true);
    let source = "{\n    /* This is a\n       multi-line comment */\n    \"value\": 42\n}";
    let node = decode_with(source, &options).unwrap();
    assert_eq!(
        node.as_object().unwrap().get("value").unwrap().as_f64().unwrap(),
        42.0
    );

    let err = decode_with(source, &DecodeOptions::strict()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MultiLineCommentsDisabled);
}

#[test]
fn many_multi_line_comments() {
    let options = DecodeOptions::strict().multi_line_comments(true);
    let source = "[\n    /* Comment before first element */\n    1, /* Comment before second element\n       spanning multiple lines */\n    2\n/* end of array */ ]";
    let node = decode_with(source, &options).unwrap();
    assert_eq!(node.as_array().unwrap().len(), 2);
}

#[test]
fn unterminated_multi_line_comment() {
    let options = DecodeOptions::strict().multi_line_comments(true);
    let source = "{\n    /* Unterminated comment\n    \"value\": 42\n}";
    let err = decode_with(source, &options).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedComment);
    assert_eq!(err.message(), "Unterminated multi-line comment");
}

#[test]
fn object_nesting_within_limit() {
    let options = DecodeOptions::strict().max_depth(5);
    let source = r#"{"a": {"b": {"c": {"d": {"e": 42}}}}}"#;
    let tree = decode_with(source, &options).unwrap();
    let mut node = &tree;
    for key in ["a", "b", "c", "d", "e"] {
        node = node.as_object().unwrap().get(key).unwrap();
    }
    assert_eq!(node.as_f64().unwrap(), 42.0);
}

#[test]
fn object_nesting_beyond_limit() {
    let options = DecodeOptions::strict().max_depth(3);
    let err = decode_with(r#"{"a": {"b": {"c": {"d": 42}}}}"#, &options).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MaxDepthExceeded(3));
    assert!(err.message().contains("Maximum allowed nesting depth"));
}

#[test]
fn array_nesting_within_limit() {
    let options = DecodeOptions::strict().max_depth(4);
    let node = decode_with("[[[[42]]]]", &options).unwrap();
    let innermost = node.as_array().unwrap().get(0).unwrap().as_array().unwrap().get(0)
        .unwrap()
        .as_array()
        .unwrap()
        .get(0)
        .unwrap()
        .as_array()
        .unwrap()
        .get(0)
        .unwrap();
    assert_eq!(innermost.as_f64().unwrap(), 42.0);
}

#[test]
fn array_nesting_beyond_limit() {
    let options = DecodeOptions::strict().max_depth(3);
    let err = decode_with("[[[[42]]]]", &options).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MaxDepthExceeded(3));
}

#[test]
fn mixed_nesting_within_limit() {
    let options = DecodeOptions::strict().max_depth(5);
    let source = r#"{"array": [{"nested": [{"value": 42}]}]}"#;
    let node = decode_with(source, &options).unwrap();
    let value = node.as_object().unwrap().get("array").unwrap().as_array().unwrap().get(0)
        .unwrap()
        .as_object()
        .unwrap()
        .get("nested")
        .unwrap()
        .as_array()
        .unwrap()
        .get(0)
        .unwrap()
        .as_object()
        .unwrap()
        .get("value")
        .unwrap();
    assert_eq!(value.as_f64().unwrap(), 42.0);
}

#[test]
fn combined_options() {
    let options = DecodeOptions::relaxed().max_depth(10);
    let source = "{\n    // Single line comment\n    \"array\": [\n        /* Multi-line\n           comment */\n        1,\n        2,\n        3, // Trailing comma in array\n    ],\n    \"object\": {\n        \"nested\": true, // Trailing comma in object\n    },\n}";
    let node = decode_with(source, &options).unwrap();
    let obj = node.as_object().unwrap();
    assert_eq!(obj.get("array").unwrap().as_array().unwrap().len(), 3);
    assert!(
        obj.get("object").unwrap().as_object().unwrap().get("nested").unwrap()
            .as_bool()
            .unwrap()
    );
}

#[test]
fn strict_preset_rejects_all_extensions() {
    let source = "{\n    // Comment should fail\n    \"value\": 42,\n}";
    assert!(decode_with(source, &DecodeOptions::strict()).is_err());
}

#[test]
fn relaxed_preset_allows_all_extensions() {
    let source = "{\n    // Single line comment\n    /* Multi-line comment */\n    \"array\": [1, 2, 3,],\n    \"value\": 42,\n}";
    let node = decode_with(source, &DecodeOptions::relaxed()).unwrap();
    let obj = node.as_object().unwrap();
    assert_eq!(obj.get("array").unwrap().as_array().unwrap().len(), 3);
    assert_eq!(obj.get("value").unwrap().as_f64().unwrap(), 42.0);
}

#[test]
fn default_decode_uses_relaxed_preset() {
    let source = "{\n    // This should work with the default decode\n    \"value\": 42,\n}";
    let node = decode(source).unwrap();
    assert_eq!(
        node.as_object().unwrap().get("value").unwrap().as_f64().unwrap(),
        42.0
    );
}

#[test]
fn depth_zero_rejects_any_container() {
    let options = DecodeOptions::strict().max_depth(0);
    assert_eq!(
        decode_with("[]", &options).unwrap_err().kind,
        ParseErrorKind::MaxDepthExceeded(0)
    );
    assert_eq!(
        decode_with("{}", &options).unwrap_err().kind,
        ParseErrorKind::MaxDepthExceeded(0)
    );
    // A bare primitive never touches depth.
    assert!(decode_with("42", &options).is_ok());
}

#[test]
fn depth_one_allows_only_top_level_containers() {
    let options = DecodeOptions::strict().max_depth(1);

    assert_eq!(
        decode_with("[1, 2, 3]", &options).unwrap().kind(),
        ValueKind::Array
    );
    assert_eq!(
        decode_with(r#"{"key": "value"}"#, &options).unwrap().kind(),
        ValueKind::Object
    );

    assert!(decode_with("[[]]", &options).is_err());
    assert!(decode_with(r#"{"key": {}}"#, &options).is_err());
}

#[test]
fn empty_container_with_comma_always_invalid() {
    for options in [
        DecodeOptions::strict(),
        only_trailing_commas(),
        DecodeOptions::relaxed(),
    ] {
        assert!(decode_with("[,]", &options).is_err(), "{options:?}");
        assert!(decode_with("{,}", &options).is_err(), "{options:?}");
    }
}

#[test]
fn comment_at_end_of_input() {
    let options = DecodeOptions::strict()
        .single_line_comments(true)
        .multi_line_comments(true);

    let node = decode_with("42 // End comment", &options).unwrap();
    assert_eq!(node.as_f64().unwrap(), 42.0);

    let node = decode_with("42 /* End comment */", &options).unwrap();
    assert_eq!(node.as_f64().unwrap(), 42.0);
}

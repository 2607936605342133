//! Verbatim tree-to-text printer.
//!
//! Printing is a uniform replay: leading trivia, the node's own literal
//! (raw text for numbers and strings, the keyword for the rest, or the
//! children of a container), trailing trivia. Brackets, colons, and commas
//! are trivia entries, so no separators are ever synthesized here. For a
//! tree straight out of the parser this reproduces the input byte-for-byte.

use parrot_reader::Trivia;
use parrot_tree::{Array, Node, Object, Value};

/// Encode a tree back to text.
pub fn encode(node: &Node) -> String {
    let mut out = String::new();
    append_node(node, &mut out);
    out
}

/// Build a quoted/escaped JSON string literal.
///
/// Used when constructing string nodes that were not sourced from parsed
/// text. Escapes `"`, `\`, the short control forms, and other control
/// characters as `\uXXXX`.
pub fn encode_string(value: &str) -> String {
    parrot_tree::escape_string(value)
}

fn append_node(node: &Node, out: &mut String) {
    append_trivia(&node.leading_trivia, out);
    match &node.value {
        Value::Null => out.push_str("null"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Number(number) => out.push_str(number.raw()),
        Value::String(string) => out.push_str(string.raw()),
        Value::Array(array) => append_array(array, out),
        Value::Object(object) => append_object(object, out),
    }
    append_trivia(&node.trailing_trivia, out);
}

fn append_trivia(trivia: &[Trivia], out: &mut String) {
    for entry in trivia {
        out.push_str(&entry.text);
    }
}

fn append_array(array: &Array, out: &mut String) {
    for item in array.iter() {
        append_node(item, out);
    }
}

fn append_object(object: &Object, out: &mut String) {
    for property in object.iter() {
        append_trivia(&property.key.leading_trivia, out);
        out.push_str(property.key.raw());
        append_trivia(&property.key.trailing_trivia, out);
        append_node(&property.value, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use parrot_tree::{Node, Property};

    #[test]
    fn test_encode_string() {
        assert_eq!(encode_string("hello"), "\"hello\"");
        assert_eq!(encode_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(encode_string("\n\r\t\u{0008}\u{000C}"), "\"\\n\\r\\t\\b\\f\"");
        assert_eq!(encode_string("\u{0000}"), "\"\\u0000\"");
    }

    #[test]
    fn test_constructed_primitives_encode_canonically() {
        assert_eq!(encode(&Node::null()), "null");
        assert_eq!(encode(&Node::boolean(true)), "true");
        assert_eq!(encode(&Node::number(22.0)), "22");
        assert_eq!(encode(&Node::string("hi there")), "\"hi there\"");
    }

    #[test]
    fn test_constructed_containers_encode_compact() {
        let mut array = Node::array();
        {
            let items = array.as_array_mut().unwrap();
            items.push(Node::number(1.0));
            items.push(Node::number(2.0));
        }
        assert_eq!(encode(&array), "[1,2]");

        let mut object = Node::object();
        {
            let obj = object.as_object_mut().unwrap();
            obj.add("a", Node::number(1.0)).unwrap();
            obj.add("b", Node::string("x")).unwrap();
        }
        assert_eq!(encode(&object), "{\"a\":1,\"b\":\"x\"}");
    }

    #[test]
    fn test_encode_replays_trivia_in_order() {
        let source = "  [ 1 , /* two */ 2 ]  ";
        let node = decode(source).unwrap();
        assert_eq!(encode(&node), source);
    }

    #[test]
    fn test_encode_after_structural_edit_stays_well_formed() {
        let node = {
            let mut node = decode("[1, 2]").unwrap();
            node.as_array_mut().unwrap().push(Node::number(3.0));
            node
        };
        // The predecessor gains a comma; nothing invents a space after it.
        assert_eq!(encode(&node), "[1, 2,3]");

        let mut node = decode(r#"{"a": 1}"#).unwrap();
        node.as_object_mut()
            .unwrap()
            .insert(0, Property::new("z", Node::number(0.0)))
            .unwrap();
        // The new value inherits the sibling's leading space and carries
        // its own comma since it is not last.
        assert_eq!(encode(&node), r#"{"z": 0,"a": 1}"#);
    }
}

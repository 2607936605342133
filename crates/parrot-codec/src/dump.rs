//! Human-readable tree rendering for debugging.
//!
//! Shows each node's literal between its leading and trailing trivia runs
//! as `<<leading|literal|trailing>>`, one container element per line, with
//! newlines/carriage returns/tabs escaped inside trivia. There is no
//! round-trip contract here; use [`encode`](crate::encode) for that.

use parrot_reader::Trivia;
use parrot_tree::{Array, Node, Object, Value};

/// Render a tree for debugging.
pub fn dump(node: &Node) -> String {
    let mut out = String::new();
    dump_node(node, &mut out, 0);
    out
}

fn dump_node(node: &Node, out: &mut String, indent: usize) {
    dump_leading(&node.leading_trivia, out);
    match &node.value {
        Value::Null => out.push_str("null"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Number(number) => out.push_str(number.raw()),
        Value::String(string) => out.push_str(string.raw()),
        Value::Array(array) => dump_array(array, out, indent),
        Value::Object(object) => dump_object(object, out, indent),
    }
    dump_trailing(&node.trailing_trivia, out);
}

fn dump_array(array: &Array, out: &mut String, indent: usize) {
    out.push('\n');
    for item in array.iter() {
        push_indent(out, indent + 1);
        dump_node(item, out, indent + 1);
        out.push('\n');
    }
    push_indent(out, indent);
}

fn dump_object(object: &Object, out: &mut String, indent: usize) {
    out.push('\n');
    for property in object.iter() {
        push_indent(out, indent + 1);
        dump_leading(&property.key.leading_trivia, out);
        out.push_str(property.key.raw());
        dump_trailing(&property.key.trailing_trivia, out);
        dump_node(&property.value, out, indent + 1);
        out.push('\n');
    }
    push_indent(out, indent);
}

fn dump_leading(trivia: &[Trivia], out: &mut String) {
    out.push_str("<<");
    for entry in trivia {
        out.push_str(&escape_trivia(&entry.text));
    }
    out.push('|');
}

fn dump_trailing(trivia: &[Trivia], out: &mut String) {
    out.push('|');
    for entry in trivia {
        out.push_str(&escape_trivia(&entry.text));
    }
    out.push_str(">>");
}

fn escape_trivia(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;

    #[test]
    fn test_dump_primitive_with_comment() {
        let node = decode("42 // the answer").unwrap();
        insta::assert_snapshot!(dump(&node), @"<<|42| // the answer>>");
    }

    #[test]
    fn test_dump_escapes_newlines_in_trivia() {
        let node = decode(" \t42\n").unwrap();
        insta::assert_snapshot!(dump(&node), @r"<< \t|42|\n>>");
    }

    #[test]
    fn test_dump_object_layout() {
        let node = decode("{\"a\": 1}").unwrap();
        assert_eq!(dump(&node), "<<{|\n  <<|\"a\"|:>><< |1|>>\n|}>>");
    }

    #[test]
    fn test_dump_array_layout() {
        let node = decode("[1,2]").unwrap();
        assert_eq!(dump(&node), "<<[|\n  <<|1|,>>\n  <<|2|>>\n|]>>");
    }
}

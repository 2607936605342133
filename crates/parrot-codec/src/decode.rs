//! Recursive-descent decoder building trivia-preserving trees.
//!
//! The decoder owns a `pending` trivia buffer: everything read past the
//! last node waits there until the next node claims it as a leading run.
//! After a primitive, trivia up to and including the first newline binds to
//! that node's trailing run (so a same-line comment stays with the value it
//! follows); the rest becomes the next node's leading run. Structural marks
//! are recorded as trivia in the adjacent run at the point they occur, so
//! the encoder never needs kind-specific layout logic.

use parrot_reader::{DecodeOptions, ParseError, ParseErrorKind, Reader, Trivia, TriviaKind};
use parrot_tree::{
    Array, Key, Node, Number, Object, Property, StringValue, TreeError, Value,
};

/// Decode with the relaxed preset (all extensions on, depth 1000).
pub fn decode(text: &str) -> Result<Node, ParseError> {
    decode_with(text, &DecodeOptions::relaxed())
}

/// Decode with explicit options.
pub fn decode_with(text: &str, options: &DecodeOptions) -> Result<Node, ParseError> {
    Decoder::new(text, options.clone()).decode()
}

/// One decode invocation's worth of state.
///
/// Scratch state is built fresh per call; nothing is shared or reused
/// between calls, so decoding is reentrant by construction.
struct Decoder<'src> {
    reader: Reader<'src>,
    /// Trivia read past the last node, waiting to become a leading run.
    pending: Vec<Trivia>,
}

impl<'src> Decoder<'src> {
    fn new(text: &'src str, options: DecodeOptions) -> Self {
        Self {
            reader: Reader::new(text, options),
            pending: Vec::new(),
        }
    }

    fn decode(mut self) -> Result<Node, ParseError> {
        self.read_pending_trivia()?;
        let mut node = self.parse_value()?;
        node.trailing_trivia.append(&mut self.pending);
        self.check_end_of_input()?;
        Ok(node)
    }

    fn check_end_of_input(&self) -> Result<(), ParseError> {
        if self.reader.current().is_some() {
            return Err(self.reader.error(ParseErrorKind::ExpectedEndOfInput));
        }
        if self.reader.depth() > 0 {
            return Err(self.reader.error(ParseErrorKind::UnclosedStructure));
        }
        Ok(())
    }

    /// Dispatch on the first non-trivia character.
    fn parse_value(&mut self) -> Result<Node, ParseError> {
        match self.reader.current() {
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some('"') => self.parse_string(),
            Some('n') => self.parse_literal("null", Value::Null),
            Some('t') => self.parse_literal("true", Value::Boolean(true)),
            Some('f') => self.parse_literal("false", Value::Boolean(false)),
            Some('-') | Some('0'..='9') => self.parse_number(),
            None => Err(self.reader.error(ParseErrorKind::UnexpectedEndOfInput)),
            Some(c) => Err(self.reader.error(ParseErrorKind::UnexpectedCharacter(c))),
        }
    }

    fn parse_literal(&mut self, literal: &'static str, value: Value) -> Result<Node, ParseError> {
        self.reader.read_literal_token(literal)?;
        let mut node = Node::new(value);
        self.attach_primitive_trivia(&mut node)?;
        Ok(node)
    }

    fn parse_number(&mut self) -> Result<Node, ParseError> {
        let raw = self.reader.read_number_token()?;
        let mut node = Node::new(Value::Number(Number::from_raw(raw)));
        self.attach_primitive_trivia(&mut node)?;
        Ok(node)
    }

    fn parse_string(&mut self) -> Result<Node, ParseError> {
        let (text, leading, trailing) = self.parse_string_parts()?;
        Ok(Node {
            leading_trivia: leading,
            trailing_trivia: trailing,
            value: Value::String(text),
        })
    }

    /// Parse a string literal and its surrounding trivia.
    ///
    /// Split out from [`parse_string`](Self::parse_string) so object keys
    /// can reuse it without re-matching on the node's value.
    fn parse_string_parts(
        &mut self,
    ) -> Result<(StringValue, Vec<Trivia>, Vec<Trivia>), ParseError> {
        let (value, raw) = self.reader.read_string_token()?;
        let leading = std::mem::take(&mut self.pending);
        let mut trailing = Vec::new();
        self.read_trivia(&mut trailing, true)?;
        self.read_pending_trivia()?;
        Ok((StringValue::from_raw(value, raw), leading, trailing))
    }

    fn parse_array(&mut self) -> Result<Node, ParseError> {
        let mut node = Node::new(Value::Array(Array::new()));
        self.reader.start_array()?;
        self.attach_leading_marker(&mut node, TriviaKind::ArrayStart, "[")?;
        let mut array = Array::new();
        loop {
            if self.reader.current() == Some(']') {
                break;
            }
            let mut value = self.parse_value()?;
            match self.reader.current() {
                Some(']') => {
                    array.push_parsed(value);
                    break;
                }
                Some(',') => {
                    self.attach_trailing_marker(&mut value, TriviaKind::Comma, ",")?;
                    array.push_parsed(value);
                }
                _ => return Err(self.reader.error(ParseErrorKind::ExpectedCommaOrArrayEnd)),
            }
        }
        if !self.reader.options().allow_trailing_commas
            && let Some(last) = array.last()
            && has_comma(&last.trailing_trivia)
        {
            return Err(self.reader.error(ParseErrorKind::TrailingCommaInArray));
        }
        self.attach_trailing_marker(&mut node, TriviaKind::ArrayEnd, "]")?;
        self.reader.end_array()?;
        node.value = Value::Array(array);
        Ok(node)
    }

    fn parse_object(&mut self) -> Result<Node, ParseError> {
        let mut node = Node::new(Value::Object(Object::new()));
        self.reader.start_object()?;
        self.attach_leading_marker(&mut node, TriviaKind::ObjectStart, "{")?;
        let mut object = Object::new();
        loop {
            if self.reader.current() == Some('}') {
                break;
            }
            let key = self.parse_key()?;
            let mut value = self.parse_value()?;
            match self.reader.current() {
                Some('}') => {
                    self.push_property(&mut object, key, value)?;
                    break;
                }
                Some(',') => {
                    self.attach_trailing_marker(&mut value, TriviaKind::Comma, ",")?;
                    self.push_property(&mut object, key, value)?;
                }
                _ => return Err(self.reader.error(ParseErrorKind::ExpectedCommaOrObjectEnd)),
            }
        }
        if !self.reader.options().allow_trailing_commas
            && let Some(last) = object.iter().last()
            && has_comma(&last.value.trailing_trivia)
        {
            return Err(self.reader.error(ParseErrorKind::TrailingCommaInObject));
        }
        self.attach_trailing_marker(&mut node, TriviaKind::ObjectEnd, "}")?;
        self.reader.end_object()?;
        node.value = Value::Object(object);
        Ok(node)
    }

    /// Parse a key string, its `:`, and the trivia around them.
    ///
    /// The `:` is recorded in the key's trailing run. Trivia after the `:`
    /// binds to the key only when it ends in a newline before the value
    /// starts; otherwise it stays pending and becomes the value's leading
    /// run. This is what decides whether a comment after `:` belongs to the
    /// key or to the value.
    fn parse_key(&mut self) -> Result<Key, ParseError> {
        if self.reader.current() != Some('"') {
            return Err(self.reader.error(ParseErrorKind::ExpectedKey));
        }
        let (text, leading, mut trailing) = self.parse_string_parts()?;
        if self.reader.current() != Some(':') {
            return Err(self.reader.error(ParseErrorKind::ExpectedColon));
        }
        self.reader.read(); // the ':'
        trailing.append(&mut self.pending);
        trailing.push(Trivia::colon());
        self.read_pending_trivia_until_newline()?;
        if self
            .pending
            .last()
            .is_some_and(|t| t.kind == TriviaKind::NewLine)
        {
            trailing.append(&mut self.pending);
        }
        self.read_pending_trivia()?;
        Ok(Key::from_parts(text, leading, trailing))
    }

    fn push_property(
        &self,
        object: &mut Object,
        key: Key,
        value: Node,
    ) -> Result<(), ParseError> {
        if let Err(TreeError::DuplicateKey(k)) = object.push_parsed(Property { key, value }) {
            return Err(self.reader.error(ParseErrorKind::DuplicateKey(k)));
        }
        Ok(())
    }

    /// A primitive claims the pending trivia as its leading run, then takes
    /// trailing trivia up to and including the first newline.
    fn attach_primitive_trivia(&mut self, node: &mut Node) -> Result<(), ParseError> {
        node.leading_trivia = std::mem::take(&mut self.pending);
        self.read_trivia(&mut node.trailing_trivia, true)?;
        self.read_pending_trivia()
    }

    /// Record an opening bracket/brace in the node's leading run and take
    /// the trivia that follows it up to the first newline.
    fn attach_leading_marker(
        &mut self,
        node: &mut Node,
        kind: TriviaKind,
        text: &str,
    ) -> Result<(), ParseError> {
        node.leading_trivia = std::mem::take(&mut self.pending);
        node.leading_trivia.push(Trivia::new(kind, text));
        self.reader.read(); // the bracket itself
        self.read_trivia(&mut node.leading_trivia, true)?;
        self.read_pending_trivia()
    }

    /// Record a `,` or closing bracket/brace in the node's trailing run,
    /// after folding in whatever trivia was still pending before it.
    fn attach_trailing_marker(
        &mut self,
        node: &mut Node,
        kind: TriviaKind,
        text: &str,
    ) -> Result<(), ParseError> {
        node.trailing_trivia.append(&mut self.pending);
        node.trailing_trivia.push(Trivia::new(kind, text));
        self.reader.read(); // the marker itself
        self.read_trivia(&mut node.trailing_trivia, true)?;
        self.read_pending_trivia()
    }

    /// Read whitespace and comments into `out`; with `stop_after_newline`,
    /// stop right after the first newline token.
    fn read_trivia(
        &mut self,
        out: &mut Vec<Trivia>,
        stop_after_newline: bool,
    ) -> Result<(), ParseError> {
        loop {
            match self.reader.current() {
                Some('/') => out.push(self.reader.read_comment_token()?),
                Some(' ') => out.push(self.reader.read_whitespace_token()),
                Some('\t') => out.push(self.reader.read_tabs_token()),
                Some('\n') => {
                    out.push(self.reader.read_newline_token());
                    if stop_after_newline {
                        return Ok(());
                    }
                }
                Some('\r') => {
                    out.push(self.reader.read_carriage_return_token());
                    if stop_after_newline {
                        return Ok(());
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn read_pending_trivia(&mut self) -> Result<(), ParseError> {
        let mut pending = std::mem::take(&mut self.pending);
        let result = self.read_trivia(&mut pending, false);
        self.pending = pending;
        result
    }

    fn read_pending_trivia_until_newline(&mut self) -> Result<(), ParseError> {
        let mut pending = std::mem::take(&mut self.pending);
        let result = self.read_trivia(&mut pending, true);
        self.pending = pending;
        result
    }
}

fn has_comma(trivia: &[Trivia]) -> bool {
    trivia.iter().any(|t| t.kind == TriviaKind::Comma)
}

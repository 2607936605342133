//! Pull-based character reader for JSON tokens.

use tracing::trace;

use crate::{DecodeOptions, ParseError, ParseErrorKind, Position, Trivia, TriviaKind};

/// A character-level reader that produces one token per call.
///
/// The reader keeps a single character of lookahead, the absolute index,
/// 1-based line/column, the current container nesting depth, and an
/// accumulating token buffer used for error reporting and raw literals.
/// All state is scoped to one decode invocation; a fresh reader is built
/// per call.
pub struct Reader<'src> {
    chars: std::str::Chars<'src>,
    /// Lookahead character; `None` at end of input.
    current: Option<char>,
    index: u32,
    line: u32,
    column: u32,
    depth: u32,
    token: String,
    options: DecodeOptions,
}

impl<'src> Reader<'src> {
    /// Create a new reader over the given input.
    pub fn new(input: &'src str, options: DecodeOptions) -> Self {
        let mut chars = input.chars();
        let current = chars.next();
        Self {
            chars,
            current,
            index: 0,
            line: 1,
            column: 1,
            depth: 0,
            token: String::with_capacity(128),
            options,
        }
    }

    /// The current lookahead character, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// The current nesting depth.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The current position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.index, self.line, self.column, self.depth)
    }

    /// The decoding options this reader was built with.
    #[inline]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Consume the current character into the token buffer and advance.
    #[inline]
    pub fn read(&mut self) {
        if let Some(c) = self.current {
            self.token.push(c);
            self.current = self.chars.next();
            self.index += 1;
            self.column += 1;
        }
    }

    /// Advance without touching the token buffer.
    #[inline]
    fn advance(&mut self) {
        self.current = self.chars.next();
        self.index += 1;
        self.column += 1;
    }

    /// Build a positioned error from the current reader state.
    ///
    /// The reported token is the in-progress token buffer with the offending
    /// character appended: `<EOF>` at end of input, `\uXXXX` for controls.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        let mut token = self.token.clone();
        match self.current {
            None => token.push_str("<EOF>"),
            Some(c) if c.is_control() => {
                token.push_str(&format!("\\u{:04X}", c as u32));
            }
            Some(c) => token.push(c),
        }
        ParseError::new(kind, token, self.position())
    }

    /// Enter an array: bump depth and check it against the configured limit.
    pub fn start_array(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_nesting_depth {
            return Err(self.error(ParseErrorKind::MaxDepthExceeded(
                self.options.max_nesting_depth,
            )));
        }
        Ok(())
    }

    /// Enter an object: bump depth and check it against the configured limit.
    pub fn start_object(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_nesting_depth {
            return Err(self.error(ParseErrorKind::MaxDepthExceeded(
                self.options.max_nesting_depth,
            )));
        }
        Ok(())
    }

    /// Leave an array.
    pub fn end_array(&mut self) -> Result<(), ParseError> {
        if self.depth == 0 {
            return Err(self.error(ParseErrorKind::UnexpectedClosing(']')));
        }
        self.depth -= 1;
        Ok(())
    }

    /// Leave an object.
    pub fn end_object(&mut self) -> Result<(), ParseError> {
        if self.depth == 0 {
            return Err(self.error(ParseErrorKind::UnexpectedClosing('}')));
        }
        self.depth -= 1;
        Ok(())
    }

    /// Read an exact literal (`null`, `true`, `false`).
    ///
    /// The first character has already been matched by the dispatcher.
    pub fn read_literal_token(&mut self, expected: &'static str) -> Result<(), ParseError> {
        self.start_token();
        self.read();
        for want in expected.chars().skip(1) {
            if self.current != Some(want) {
                return Err(self.error(ParseErrorKind::ExpectedLiteral(expected)));
            }
            self.read();
        }
        trace!("literal token {:?}", expected);
        Ok(())
    }

    /// Read a number token and return its raw literal text.
    ///
    /// Grammar: optional `-`, then `0` alone or a nonzero digit followed by
    /// more digits, optional `.` with at least one digit, optional `e`/`E`
    /// with optional sign and at least one digit. Numeric parsing is
    /// deferred to the tree layer.
    pub fn read_number_token(&mut self) -> Result<String, ParseError> {
        self.start_token();
        if self.current == Some('-') {
            self.read();
        }
        if self.current == Some('0') {
            self.read();
        } else if is_digit(self.current) {
            while is_digit(self.current) {
                self.read();
            }
        } else {
            return Err(self.error(ParseErrorKind::InvalidNumberFormat));
        }
        if self.current == Some('.') {
            self.read();
            if !is_digit(self.current) {
                return Err(self.error(ParseErrorKind::ExpectedFractionDigit));
            }
            while is_digit(self.current) {
                self.read();
            }
        }
        if matches!(self.current, Some('e') | Some('E')) {
            self.read();
            if matches!(self.current, Some('+') | Some('-')) {
                self.read();
            }
            if !is_digit(self.current) {
                return Err(self.error(ParseErrorKind::ExpectedExponentDigit));
            }
            while is_digit(self.current) {
                self.read();
            }
        }
        let raw = self.take_token();
        trace!("number token {:?}", raw);
        Ok(raw)
    }

    /// Read a string token, returning `(decoded value, raw literal)`.
    ///
    /// The raw literal includes the quotes and original escapes so the
    /// string can be re-emitted verbatim.
    pub fn read_string_token(&mut self) -> Result<(String, String), ParseError> {
        let mut value = String::with_capacity(16);
        self.start_token();
        self.read(); // opening quote
        loop {
            match self.current {
                Some('"') => break,
                None => return Err(self.error(ParseErrorKind::UnterminatedString)),
                Some(c) if (c as u32) < 0x20 => {
                    return Err(self.error(ParseErrorKind::ControlCharacterInString(c as u32)));
                }
                Some('\\') => {
                    self.read();
                    match self.current {
                        Some('"') => {
                            self.read();
                            value.push('"');
                        }
                        Some('/') => {
                            self.read();
                            value.push('/');
                        }
                        Some('b') => {
                            self.read();
                            value.push('\u{0008}');
                        }
                        Some('f') => {
                            self.read();
                            value.push('\u{000C}');
                        }
                        Some('n') => {
                            self.read();
                            value.push('\n');
                        }
                        Some('r') => {
                            self.read();
                            value.push('\r');
                        }
                        Some('t') => {
                            self.read();
                            value.push('\t');
                        }
                        Some('\\') => {
                            self.read();
                            value.push('\\');
                        }
                        Some('u') => value.push(self.read_unicode_escape()?),
                        None => return Err(self.error(ParseErrorKind::UnterminatedEscape)),
                        Some(c) => return Err(self.error(ParseErrorKind::InvalidEscape(c))),
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.read();
                }
            }
        }
        self.read(); // closing quote
        let raw = self.take_token();
        trace!("string token {:?}", raw);
        Ok((value, raw))
    }

    /// Read `\uXXXX` (the backslash is already consumed).
    fn read_unicode_escape(&mut self) -> Result<char, ParseError> {
        self.read(); // the 'u'
        let mut code: u32 = 0;
        for _ in 0..4 {
            let digit = match self.current {
                Some(c @ '0'..='9') => c as u32 - '0' as u32,
                Some(c @ 'a'..='f') => c as u32 - 'a' as u32 + 10,
                Some(c @ 'A'..='F') => c as u32 - 'A' as u32 + 10,
                _ => return Err(self.error(ParseErrorKind::InvalidHexDigit)),
            };
            code = (code << 4) + digit;
            self.read();
        }
        // Lone surrogates are not valid scalar values; the raw literal keeps
        // the original escape either way.
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Read a `//` or `/* */` comment, subject to the configured options.
    pub fn read_comment_token(&mut self) -> Result<Trivia, ParseError> {
        self.start_token();
        self.read(); // the initial '/'
        match self.current {
            Some('/') => {
                if !self.options.allow_single_line_comments {
                    return Err(self.error(ParseErrorKind::SingleLineCommentsDisabled));
                }
                self.read(); // the second '/'
                while !matches!(self.current, None | Some('\n') | Some('\r')) {
                    self.read();
                }
                Ok(Trivia::new(TriviaKind::SingleLineComment, self.take_token()))
            }
            Some('*') => {
                if !self.options.allow_multi_line_comments {
                    return Err(self.error(ParseErrorKind::MultiLineCommentsDisabled));
                }
                self.read(); // the '*'
                loop {
                    match self.current {
                        Some('*') => {
                            self.read();
                            if self.current == Some('/') {
                                self.read();
                                break;
                            }
                        }
                        None => return Err(self.error(ParseErrorKind::UnterminatedComment)),
                        Some('\n') => {
                            self.read();
                            self.line += 1;
                            self.column = 1;
                        }
                        Some('\r') => {
                            self.read();
                            if self.current == Some('\n') {
                                self.read();
                            }
                            self.line += 1;
                            self.column = 1;
                        }
                        Some(_) => self.read(),
                    }
                }
                Ok(Trivia::new(TriviaKind::MultiLineComment, self.take_token()))
            }
            _ => Err(self.error(ParseErrorKind::InvalidCommentStart)),
        }
    }

    /// Read a maximal run of spaces.
    pub fn read_whitespace_token(&mut self) -> Trivia {
        let mut len = 1usize;
        self.advance(); // first space
        while self.current == Some(' ') {
            self.advance();
            len += 1;
        }
        Trivia::new(TriviaKind::Whitespace, " ".repeat(len))
    }

    /// Read a maximal run of tabs.
    pub fn read_tabs_token(&mut self) -> Trivia {
        let mut len = 1usize;
        self.advance(); // first tab
        while self.current == Some('\t') {
            self.advance();
            len += 1;
        }
        Trivia::new(TriviaKind::Whitespace, "\t".repeat(len))
    }

    /// Read a `\n` newline.
    pub fn read_newline_token(&mut self) -> Trivia {
        self.current = self.chars.next();
        self.index += 1;
        self.line += 1;
        self.column = 1;
        Trivia::new(TriviaKind::NewLine, "\n")
    }

    /// Read a `\r` newline, folding a following `\n` into the same token.
    pub fn read_carriage_return_token(&mut self) -> Trivia {
        self.current = self.chars.next();
        self.index += 1;
        self.line += 1;
        self.column = 1;
        if self.current == Some('\n') {
            self.current = self.chars.next();
            self.index += 1;
            return Trivia::new(TriviaKind::NewLine, "\r\n");
        }
        Trivia::new(TriviaKind::NewLine, "\r")
    }

    #[inline]
    fn start_token(&mut self) {
        self.token.clear();
    }

    #[inline]
    fn take_token(&self) -> String {
        self.token.clone()
    }
}

#[inline]
fn is_digit(c: Option<char>) -> bool {
    matches!(c, Some('0'..='9'))
}

//! Parse errors with positions.

use crate::Position;

/// The kind of a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `null`/`true`/`false` literal did not match.
    ExpectedLiteral(&'static str),
    /// A number did not start with a valid digit (or lone minus).
    InvalidNumberFormat,
    /// `.` not followed by a digit.
    ExpectedFractionDigit,
    /// `e`/`E` (with optional sign) not followed by a digit.
    ExpectedExponentDigit,
    /// An unescaped control character inside a string literal.
    ControlCharacterInString(u32),
    /// EOF before the closing quote of a string.
    UnterminatedString,
    /// EOF right after a backslash inside a string.
    UnterminatedEscape,
    /// A backslash followed by an unrecognized escape character.
    InvalidEscape(char),
    /// A non-hex character inside a `\uXXXX` escape.
    InvalidHexDigit,
    /// A `//` comment while single-line comments are disabled.
    SingleLineCommentsDisabled,
    /// A `/* */` comment while multi-line comments are disabled.
    MultiLineCommentsDisabled,
    /// EOF before `*/`.
    UnterminatedComment,
    /// A lone `/` not followed by `/` or `*`.
    InvalidCommentStart,
    /// Nesting beyond the configured maximum depth.
    MaxDepthExceeded(u32),
    /// A closing bracket/brace with no open container.
    UnexpectedClosing(char),
    /// A character that cannot start a value.
    UnexpectedCharacter(char),
    /// EOF where a value was expected.
    UnexpectedEndOfInput,
    /// Non-trivia characters after the top-level value.
    ExpectedEndOfInput,
    /// Depth did not return to 0 at the end of input.
    UnclosedStructure,
    /// An array element not followed by `,` or `]`.
    ExpectedCommaOrArrayEnd,
    /// An object property not followed by `,` or `}`.
    ExpectedCommaOrObjectEnd,
    /// A trailing comma in an array while the option is off.
    TrailingCommaInArray,
    /// A trailing comma in an object while the option is off.
    TrailingCommaInObject,
    /// An object key that is not a string.
    ExpectedKey,
    /// A key not followed by `:`.
    ExpectedColon,
    /// The same key appearing twice in one object.
    DuplicateKey(String),
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::ExpectedLiteral(lit) => write!(f, "Expected literal '{lit}'"),
            ParseErrorKind::InvalidNumberFormat => write!(f, "Invalid number format"),
            ParseErrorKind::ExpectedFractionDigit => {
                write!(f, "Expected digit after decimal point")
            }
            ParseErrorKind::ExpectedExponentDigit => write!(f, "Expected digit in exponent"),
            ParseErrorKind::ControlCharacterInString(code) => {
                write!(f, "Invalid character with code: `{code}` in string literal")
            }
            ParseErrorKind::UnterminatedString => write!(f, "Unterminated string literal"),
            ParseErrorKind::UnterminatedEscape => {
                write!(f, "Unterminated escape sequence in string literal")
            }
            ParseErrorKind::InvalidEscape(c) => {
                write!(f, "Invalid escape character '\\{c}' in string literal")
            }
            ParseErrorKind::InvalidHexDigit => {
                write!(f, "Invalid hex character in escape sequence")
            }
            ParseErrorKind::SingleLineCommentsDisabled => {
                write!(f, "Single-line comments are not allowed")
            }
            ParseErrorKind::MultiLineCommentsDisabled => {
                write!(f, "Multi-line comments are not allowed")
            }
            ParseErrorKind::UnterminatedComment => write!(f, "Unterminated multi-line comment"),
            ParseErrorKind::InvalidCommentStart => {
                write!(f, "Invalid comment start - expected '/' or '*' after '/'")
            }
            ParseErrorKind::MaxDepthExceeded(max) => {
                write!(f, "Maximum allowed nesting depth of {max} exceeded")
            }
            ParseErrorKind::UnexpectedClosing(c) => write!(f, "Unexpected closing '{c}'"),
            ParseErrorKind::UnexpectedCharacter(c) => write!(f, "Unexpected character '{c}'"),
            ParseErrorKind::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
            ParseErrorKind::ExpectedEndOfInput => write!(f, "Expected end of input"),
            ParseErrorKind::UnclosedStructure => {
                write!(f, "Unclosed structure at end of input")
            }
            ParseErrorKind::ExpectedCommaOrArrayEnd => {
                write!(f, "Expected ',' or ']' in array")
            }
            ParseErrorKind::ExpectedCommaOrObjectEnd => {
                write!(f, "Expected ',' or '}}' in object")
            }
            ParseErrorKind::TrailingCommaInArray => {
                write!(f, "Trailing commas are not allowed in arrays")
            }
            ParseErrorKind::TrailingCommaInObject => {
                write!(f, "Trailing commas are not allowed in objects")
            }
            ParseErrorKind::ExpectedKey => write!(f, "Expected string as key in object"),
            ParseErrorKind::ExpectedColon => write!(f, "Expected ':' after object key"),
            ParseErrorKind::DuplicateKey(key) => {
                write!(f, "Duplicate key '{key}' in object")
            }
        }
    }
}

/// A parse error: what went wrong, the offending raw token, and where.
///
/// The first error aborts the whole decode; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The raw token being read when the error occurred, with the offending
    /// character appended (`<EOF>` at end of input, `\uXXXX` for controls).
    pub token: String,
    /// The position of the error.
    pub position: Position,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, token: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            token: token.into(),
            position,
        }
    }

    /// The human-readable message for this error, without token or position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (found token: `{}` at {})",
            self.kind, self.token, self.position
        )
    }
}

impl std::error::Error for ParseError {}

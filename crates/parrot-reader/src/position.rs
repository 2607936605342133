//! Source positions for error reporting.

/// A position in the input text at the moment an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Absolute character index from the start of the input (0-based).
    pub index: u32,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, reset by every newline).
    pub column: u32,
    /// Container nesting depth at the error site.
    pub depth: u32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub fn new(index: u32, line: u32, column: u32, depth: u32) -> Self {
        Self {
            index,
            line,
            column,
            depth,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line: {}, column: {}, index: {}",
            self.line, self.column, self.index
        )
    }
}

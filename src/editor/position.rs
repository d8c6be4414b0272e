//! Document coordinates

use std::fmt;

/// A location in a document
///
/// `line` is zero-based; `ch` is the column counted in characters, not
/// bytes. Positions order by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Zero-based line index
    pub line: usize,
    /// Zero-based character column
    pub ch: usize,
}

impl Position {
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// The same line, shifted right by `chars` columns
    pub fn offset(self, chars: usize) -> Self {
        Self {
            line: self.line,
            ch: self.ch + chars,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.ch)
    }
}

/// A half-open document range `[from, to)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub from: Position,
    pub to: Position,
}

impl Span {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// An empty span at `at`
    pub const fn empty(at: Position) -> Self {
        Self { from: at, to: at }
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

//! Source positions.
//!
//! Lines are 1-based. Columns count characters read on the current line:
//! the column resets to 0 at a newline and the first character of every
//! line sits at column 1.

use std::fmt;

/// Line/column location of a token's first character.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position before anything has been read.
    pub const START: Position = Position { line: 1, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;

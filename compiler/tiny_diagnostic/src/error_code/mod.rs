//! Error codes for all front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase. Used for `tiny explain` lookups and documentation.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### / W#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - W1xxx: Parser warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Illegal character in source
    E0001,
    /// Source could not be read
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Missing `program` header
    E1002,

    // Parser Warnings (W1xxx)
    /// Tokens before `program` were ignored
    W1001,
}

impl ErrorCode {
    /// All error codes, for iteration and lookup.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::W1001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::W1001 => "W1001",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    /// Check if this is a warning code (W prefix).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W1001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

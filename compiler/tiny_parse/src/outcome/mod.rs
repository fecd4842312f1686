//! What a parse produces.

use std::fmt;

use tiny_ir::{Position, TokenKind};

use crate::SyntaxError;

/// One successful match of an expected token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MatchEvent {
    pub kind: TokenKind,
    /// Recognizing method that consumed the token.
    pub nonterminal: &'static str,
    pub position: Position,
}

/// `Expected: <kind> from method: <nonterminal>`
impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected: {} from method: {}", self.kind, self.nonterminal)
    }
}

/// Counts from an accepted parse.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ParseSummary {
    /// Tokens consumed, up to and including the final `.`.
    pub consumed: usize,
    /// Tokens between the final `.` and end-of-file.
    pub trailing: usize,
    /// Tokens skipped before the `program` keyword.
    pub skipped: usize,
}

/// Full result of a parse: counts, match trace and every recorded error.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseOutcome {
    pub consumed: usize,
    pub trailing: usize,
    pub skipped: usize,
    /// Successful matches, in order. Empty unless match tracing is on.
    pub trace: Vec<MatchEvent>,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutcome {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn summary(&self) -> ParseSummary {
        ParseSummary {
            consumed: self.consumed,
            trailing: self.trailing,
            skipped: self.skipped,
        }
    }

    /// The summary if no error was recorded, otherwise every error.
    pub fn into_result(self) -> Result<ParseSummary, Vec<SyntaxError>> {
        if self.errors.is_empty() {
            Ok(self.summary())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests;

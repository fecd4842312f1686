//! Syntax errors.
//!
//! A `SyntaxError` records what the active rule wanted, which rule it was,
//! and the token actually found. `Display` is the classic one-line report.

use std::fmt;

use tiny_diagnostic::{Diagnostic, ErrorCode};
use tiny_ir::{Token, TokenKind};

use crate::recovery::TokenSet;

/// What a failed rule would have accepted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Expected {
    Token(TokenKind),
    OneOf(TokenSet),
}

impl Expected {
    pub fn contains(self, kind: TokenKind) -> bool {
        match self {
            Expected::Token(expected) => expected == kind,
            Expected::OneOf(set) => set.contains(kind),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => f.write_str(kind.as_str()),
            Expected::OneOf(set) => write!(f, "{set}"),
        }
    }
}

/// The current token did not match what the grammar required.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error(
    "Syntax error expected '{expected}' from method: {nonterminal} Is kind: {} Is value: {} Position: {}",
    .found.kind(),
    .found.value(),
    .found.position()
)]
pub struct SyntaxError {
    pub expected: Expected,
    /// Name of the recognizing method that failed.
    pub nonterminal: &'static str,
    pub found: Token,
    /// Tokens that may follow the failed rule in its calling context.
    pub follow: TokenSet,
}

impl SyntaxError {
    #[cold]
    pub fn new(expected: Expected, nonterminal: &'static str, found: Token, follow: TokenSet) -> Self {
        SyntaxError {
            expected,
            nonterminal,
            found,
            follow,
        }
    }

    /// Whether this is the missing `program` header.
    pub fn is_missing_program(&self) -> bool {
        self.expected == Expected::Token(TokenKind::Program) && self.found.is_end_of_text()
    }

    pub fn code(&self) -> ErrorCode {
        if self.is_missing_program() {
            ErrorCode::E1002
        } else {
            ErrorCode::E1001
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let position = self.found.position();
        if self.is_missing_program() {
            return Diagnostic::error(ErrorCode::E1002)
                .with_message("no `program` header found")
                .with_label(position, "reached end of input")
                .with_suggestion("start the source with `program <name>:`");
        }

        let found = if self.found.value().is_empty() {
            format!("`{}`", self.found.kind())
        } else {
            format!("{} `{}`", self.found.kind(), self.found.value())
        };
        let mut diag = Diagnostic::error(ErrorCode::E1001)
            .with_message(format!("expected `{}`, found {found}", self.expected))
            .with_label(position, format!("expected `{}` here", self.expected))
            .with_note(format!("while recognizing {}", self.nonterminal));
        if !self.follow.is_empty() {
            diag = diag.with_note(format!("may be followed by: {}", self.follow));
        }
        match self.expected {
            Expected::Token(TokenKind::Semicolon) => {
                diag.with_suggestion("add `;` after the previous statement")
            }
            Expected::Token(TokenKind::Dot) => diag.with_suggestion("end the program with `.`"),
            _ => diag,
        }
    }
}

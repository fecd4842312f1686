//! Lexical errors.
//!
//! A `LexError` is plain data: where scanning stopped and what was found
//! there. `Display` renders the classic one-line report, `into_diagnostic`
//! converts it for the rich emitter.

use tiny_diagnostic::{Diagnostic, ErrorCode};
use tiny_ir::Position;

/// A lexical error: an illegal character or a failed read.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{position}\t>>>>>> {kind}")]
pub struct LexError {
    /// Position of the offending character.
    pub position: Position,
    pub kind: LexErrorKind,
}

/// What went wrong while scanning.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character outside the letter, digit, symbol and whitespace sets.
    #[error("Illegal Character '{found}'")]
    IllegalCharacter { found: char },
    /// The character source failed.
    #[error("IO Exception: {message}")]
    Io { message: String },
}

impl LexError {
    #[cold]
    pub fn illegal_character(position: Position, found: char) -> Self {
        LexError {
            position,
            kind: LexErrorKind::IllegalCharacter { found },
        }
    }

    #[cold]
    pub fn io(position: Position, err: &std::io::Error) -> Self {
        LexError {
            position,
            kind: LexErrorKind::Io {
                message: err.to_string(),
            },
        }
    }

    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::IllegalCharacter { .. } => ErrorCode::E0001,
            LexErrorKind::Io { .. } => ErrorCode::E0002,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let code = self.code();
        match self.kind {
            LexErrorKind::IllegalCharacter { found } => Diagnostic::error(code)
                .with_message(format!("illegal character `{}`", found.escape_debug()))
                .with_label(self.position, "not part of any token")
                .with_suggestion(
                    "remove it; tokens are letters, digits and `: := = =< < > >= != + - * / ; ( ) . ,`",
                ),
            LexErrorKind::Io { message } => Diagnostic::error(code)
                .with_message(format!("could not read source: {message}"))
                .with_position(self.position),
        }
    }
}

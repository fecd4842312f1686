//! Embedded error documentation for `tiny explain`.
//!
//! Each error code has a markdown file in this directory. The files are
//! embedded at compile time and looked up with [`ErrorDocs::get`].

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Documentation for an error code, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// All documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Lexer errors (E0xxx)
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::E0002, include_str!("E0002.md")),
    // Parser errors (E1xxx)
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::E1002, include_str!("E1002.md")),
    // Parser warnings (W1xxx)
    (ErrorCode::W1001, include_str!("W1001.md")),
];

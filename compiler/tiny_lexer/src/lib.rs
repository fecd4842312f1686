//! Lexical analyzer for Tiny.
//!
//! Turns a character stream into a [`TokenList`]. The scanner reads one
//! character at a time from a [`CharSource`], tracks line and column, and
//! skips whitespace and `//` line comments.
//!
//! # Entry points
//!
//! - [`lex`]: scan a string, stopping at the first error
//! - [`lex_reader`]: the same over any [`BufRead`]
//! - [`lex_collecting`] / [`lex_source`]: keep every token and every error
//! - [`Lexer`]: pull tokens one at a time

mod keywords;
mod lex_error;
mod lexer;
pub mod scanner;
mod source;

pub use keywords::{classify_word, lookup as lookup_keyword, RESERVED};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{LexErrorMode, Lexer, LexerConfig};
pub use source::{CharSource, ReaderSource, StrSource};

use std::io::BufRead;
use tiny_ir::TokenList;

/// Scan `text` into a complete token list.
///
/// # Errors
///
/// Returns the first lexical error.
pub fn lex(text: &str) -> Result<TokenList, LexError> {
    Lexer::new(StrSource::new(text)).collect()
}

/// Scan a buffered reader into a complete token list.
///
/// # Errors
///
/// Returns the first lexical error, including read failures and invalid UTF-8.
pub fn lex_reader<R: BufRead>(reader: R) -> Result<TokenList, LexError> {
    Lexer::new(ReaderSource::new(reader)).collect()
}

/// Tokens and errors from a full scan.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct LexOutput {
    /// Every token scanned, in order. Ends with `end-of-file` unless
    /// scanning stopped early.
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `text`, keeping every token and error produced under `config`.
pub fn lex_collecting(text: &str, config: LexerConfig) -> LexOutput {
    lex_source(StrSource::new(text), config)
}

/// Scan any character source, keeping every token and error produced under `config`.
pub fn lex_source<S: CharSource>(source: S, config: LexerConfig) -> LexOutput {
    let mut output = LexOutput::default();
    for result in Lexer::with_config(source, config) {
        match result {
            Ok(token) => output.tokens.push(token),
            Err(err) => output.errors.push(err),
        }
    }
    output
}

#[cfg(test)]
mod tests;

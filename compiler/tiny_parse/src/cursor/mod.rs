//! Token cursor for navigating the token stream.
//!
//! A single forward-only position over a borrowed [`TokenList`]. The cursor
//! never moves past `end-of-file`; a list that does not end in one reads as
//! if it did.

use tiny_ir::{Position, Token, TokenKind, TokenList};

use crate::recovery::TokenSet;

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    /// Stands in for `tokens[pos]` once `pos` runs off an incomplete list.
    eof: Token,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        let eof_position = tokens.last().map_or(Position::START, Token::position);
        Cursor {
            tokens,
            eof: Token::eof(eof_position),
            pos: 0,
        }
    }

    /// Index of the next unconsumed token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind()
    }

    #[inline]
    pub fn current_position(&self) -> Position {
        self.current().position()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_any(&self, set: TokenSet) -> bool {
        set.contains(self.current_kind())
    }

    /// Advance to the next token and return the consumed one.
    ///
    /// At end-of-file the cursor stays put and returns the end-of-file token.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.tokens.get(current).unwrap_or(&self.eof)
    }

    /// Tokens left before end-of-file.
    pub fn remaining(&self) -> usize {
        self.tokens.as_slice()[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|token| !token.is_end_of_text())
            .count()
    }
}

//! Tokens and token lists.

mod kind;

pub use kind::TokenKind;

use crate::Position;
use std::fmt;
use std::ops::Index;

/// A classified lexical unit.
///
/// Immutable once built. `value` holds the lexeme for identifiers, numbers
/// and boolean literals and is empty for every other kind, whose kind tag
/// already spells the text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    kind: TokenKind,
    value: String,
    position: Position,
}

impl Token {
    /// Create a token.
    ///
    /// The value is discarded for kinds that do not carry one, so keyword and
    /// symbol tokens always have an empty value.
    pub fn new(kind: TokenKind, value: impl Into<String>, position: Position) -> Self {
        let value = if kind.has_value() {
            value.into()
        } else {
            String::new()
        };
        Token {
            kind,
            value,
            position,
        }
    }

    /// Create a keyword, symbol or end-of-file token (empty value).
    #[inline]
    pub fn bare(kind: TokenKind, position: Position) -> Self {
        Token {
            kind,
            value: String::new(),
            position,
        }
    }

    /// Create an end-of-file token.
    #[inline]
    pub fn eof(position: Position) -> Self {
        Self::bare(TokenKind::Eof, position)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Num
    }

    pub fn is_end_of_text(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The integer value of a `NUM` token.
    ///
    /// Returns `None` for other kinds and for literals that overflow `u64`.
    pub fn int_value(&self) -> Option<u64> {
        if self.is_number() {
            self.value.parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{} @ {}", self.kind, self.position)
        } else {
            write!(f, "{}({:?}) @ {}", self.kind, self.value, self.position)
        }
    }
}

/// Ordered token sequence produced by the lexer.
///
/// Append-only while lexing, read-only while parsing. A completed list ends
/// with exactly one `end-of-file` token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Whether the list ends with an end-of-file token.
    pub fn is_complete(&self) -> bool {
        self.last().is_some_and(Token::is_end_of_text)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds of all tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(Token::kind).collect()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

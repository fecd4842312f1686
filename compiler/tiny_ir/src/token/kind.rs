//! Token kinds for Tiny.

use std::fmt;

/// Token kinds for Tiny.
///
/// Every kind has a fixed textual tag (see [`TokenKind::as_str`]): `ID`,
/// `NUM`, `BooleanLiteral`, the keyword or symbol text itself, or
/// `end-of-file`. Kinds carry no payload; the lexeme of identifiers,
/// numbers and booleans lives in [`Token::value`](crate::Token).
///
/// The discriminant doubles as a bit index for `TokenSet`, so the enum must
/// stay below 64 variants.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    /// Identifier: `x`, `total_2`
    Ident,
    /// Unsigned integer literal: `42`
    Num,
    /// `true` or `false`
    BooleanLiteral,

    Program,
    If,
    Then,
    Else,
    While,
    Do,
    Print,
    Not,
    Or,
    And,
    Bool,
    Int,
    End,
    Mod,

    Colon,     // :
    Assign,    // :=
    Eq,        // =
    LtEq,      // =<
    Lt,        // <
    Gt,        // >
    GtEq,      // >=
    NotEq,     // !=
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    Dot,       // .
    Comma,     // ,

    /// End of input.
    Eof,
}

const _: () = assert!(
    (TokenKind::Eof as u8) < 64,
    "TokenSet uses a u64 bitset; all discriminants must be < 64"
);

impl TokenKind {
    /// Every kind in discriminant order.
    pub const ALL: [TokenKind; 35] = [
        TokenKind::Ident,
        TokenKind::Num,
        TokenKind::BooleanLiteral,
        TokenKind::Program,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Print,
        TokenKind::Not,
        TokenKind::Or,
        TokenKind::And,
        TokenKind::Bool,
        TokenKind::Int,
        TokenKind::End,
        TokenKind::Mod,
        TokenKind::Colon,
        TokenKind::Assign,
        TokenKind::Eq,
        TokenKind::LtEq,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::GtEq,
        TokenKind::NotEq,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Eof,
    ];

    /// Bit index of this kind, used by `TokenSet`.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Kind for a bit index produced by [`discriminant_index`](Self::discriminant_index).
    pub fn from_discriminant_index(index: u8) -> Option<TokenKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.discriminant_index() == index)
    }

    /// The textual kind tag printed in traces and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Ident => "ID",
            TokenKind::Num => "NUM",
            TokenKind::BooleanLiteral => "BooleanLiteral",
            TokenKind::Program => "program",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Print => "print",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::And => "and",
            TokenKind::Bool => "bool",
            TokenKind::Int => "int",
            TokenKind::End => "end",
            TokenKind::Mod => "mod",
            TokenKind::Colon => ":",
            TokenKind::Assign => ":=",
            TokenKind::Eq => "=",
            TokenKind::LtEq => "=<",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::NotEq => "!=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Eof => "end-of-file",
        }
    }

    /// Whether this kind is spelled by a reserved word.
    ///
    /// `BooleanLiteral` counts: `true` and `false` are reserved even though
    /// they lex to a literal.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::BooleanLiteral
                | TokenKind::Program
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Print
                | TokenKind::Not
                | TokenKind::Or
                | TokenKind::And
                | TokenKind::Bool
                | TokenKind::Int
                | TokenKind::End
                | TokenKind::Mod
        )
    }

    /// Whether tokens of this kind carry their lexeme in `Token::value`.
    pub const fn has_value(self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Num | TokenKind::BooleanLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Keyword resolution.
//!
//! Classification is a single mapping from the text of a letter-led run to a
//! token kind. Reserved words map to their own kind, `true` and `false` map
//! to `BooleanLiteral`, everything else is an identifier.

use tiny_ir::TokenKind;

/// Look up a reserved word by text.
///
/// Returns `None` for ordinary identifiers. Uses the length as a first-pass
/// filter: reserved words are 2-7 characters long.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "end" => Some(TokenKind::End),
            "int" => Some(TokenKind::Int),
            "mod" => Some(TokenKind::Mod),
            "not" => Some(TokenKind::Not),
            _ => None,
        },
        4 => match text {
            "bool" => Some(TokenKind::Bool),
            "else" => Some(TokenKind::Else),
            "then" => Some(TokenKind::Then),
            "true" => Some(TokenKind::BooleanLiteral),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::BooleanLiteral),
            "print" => Some(TokenKind::Print),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        7 => match text {
            "program" => Some(TokenKind::Program),
            _ => None,
        },
        _ => None,
    }
}

/// Classify a letter-led run of letters, digits and underscores.
#[inline]
pub fn classify_word(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Ident)
}

/// Every reserved word, in no particular order.
pub const RESERVED: [&str; 16] = [
    "program", "if", "then", "else", "while", "do", "print", "not", "or", "and", "false", "true",
    "bool", "int", "end", "mod",
];

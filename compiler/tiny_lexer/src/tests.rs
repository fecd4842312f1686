use super::*;
use pretty_assertions::assert_eq;
use std::io::Cursor;
use tiny_ir::{Position, TokenKind};

#[test]
fn test_lex_minimal_program() {
    let tokens = lex("program P: int x; x := 1 + 2 * 3;.").ok();
    assert_eq!(
        tokens.map(|t| t.kinds()),
        Some(vec![
            TokenKind::Program,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Int,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Num,
            TokenKind::Plus,
            TokenKind::Num,
            TokenKind::Star,
            TokenKind::Num,
            TokenKind::Semicolon,
            TokenKind::Dot,
            TokenKind::Eof,
        ])
    );
}

#[test]
fn test_lex_fails_on_illegal_character() {
    assert_eq!(
        lex("program P: x := 1 !~ 2;.").err(),
        Some(LexError::illegal_character(Position::new(1, 20), '~'))
    );
}

#[test]
fn test_lex_reader_matches_lex() {
    let text = "program P:\n  bool b;\n  b := true;\n.";
    assert_eq!(lex_reader(Cursor::new(text)).ok(), lex(text).ok());
}

#[test]
fn test_lex_reader_invalid_utf8() {
    let err = lex_reader(Cursor::new(vec![b'x', 0xC3, b'\n'])).err();
    assert!(matches!(
        err.map(|e| e.kind),
        Some(LexErrorKind::Io { .. })
    ));
}

#[test]
fn test_lex_collecting_halt() {
    let output = lex_collecting("x ? y", LexerConfig::default());
    assert!(output.has_errors());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Ident]);
    assert!(!output.tokens.is_complete());
}

#[test]
fn test_lex_collecting_all() {
    let output = lex_collecting("x ? y ?", LexerConfig::collect_all());
    assert_eq!(output.errors.len(), 2);
    assert_eq!(
        output.tokens.kinds(),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
    assert!(output.tokens.is_complete());
}

#[test]
fn test_lex_clean_input_has_no_errors() {
    let output = lex_collecting("x", LexerConfig::collect_all());
    assert!(!output.has_errors());
}

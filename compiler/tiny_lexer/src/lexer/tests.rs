use super::*;
use crate::source::StrSource;
use pretty_assertions::assert_eq;
use tiny_ir::{Position, TokenKind};

fn kinds(results: &[Result<Token, LexError>]) -> Vec<Option<TokenKind>> {
    results
        .iter()
        .map(|r| r.as_ref().ok().map(Token::kind))
        .collect()
}

#[test]
fn test_stops_after_eof() {
    let mut lexer = Lexer::new(StrSource::new("x"));
    assert_eq!(
        lexer.next().and_then(Result::ok).map(|t| t.kind()),
        Some(TokenKind::Ident)
    );
    assert_eq!(
        lexer.next().and_then(Result::ok).map(|t| t.kind()),
        Some(TokenKind::Eof)
    );
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_halt_mode_stops_at_first_error() {
    let lexer = Lexer::new(StrSource::new("a # b $ c"));
    let results: Vec<_> = lexer.collect();
    assert_eq!(results.len(), 2);
    assert_eq!(
        results[1],
        Err(LexError::illegal_character(Position::new(1, 3), '#'))
    );
}

#[test]
fn test_collect_all_reports_every_error() {
    let lexer = Lexer::with_config(StrSource::new("a # b $ c"), LexerConfig::collect_all());
    let results: Vec<_> = lexer.collect();
    assert_eq!(
        kinds(&results),
        vec![
            Some(TokenKind::Ident),
            None,
            Some(TokenKind::Ident),
            None,
            Some(TokenKind::Ident),
            Some(TokenKind::Eof),
        ]
    );
    assert_eq!(
        results[3],
        Err(LexError::illegal_character(Position::new(1, 7), '$'))
    );
}

#[test]
fn test_collect_all_skips_bang_follower() {
    let lexer = Lexer::with_config(StrSource::new("1 !~ 2"), LexerConfig::collect_all());
    let results: Vec<_> = lexer.collect();
    assert_eq!(
        kinds(&results),
        vec![
            Some(TokenKind::Num),
            None,
            Some(TokenKind::Num),
            Some(TokenKind::Eof)
        ]
    );
}

#[test]
fn test_collect_all_keeps_lines_after_bang() {
    let lexer = Lexer::with_config(StrSource::new("x !\ny"), LexerConfig::collect_all());
    let results: Vec<_> = lexer.collect();
    assert_eq!(
        results,
        vec![
            Ok(Token::new(TokenKind::Ident, "x", Position::new(1, 1))),
            Err(LexError::illegal_character(Position::new(1, 3), '!')),
            Ok(Token::new(TokenKind::Ident, "y", Position::new(2, 1))),
            Ok(Token::eof(Position::new(2, 2))),
        ]
    );
}

#[test]
fn test_collect_all_bang_before_space() {
    let lexer = Lexer::with_config(StrSource::new("x ! y"), LexerConfig::collect_all());
    let results: Vec<_> = lexer.collect();
    assert_eq!(
        results[1],
        Err(LexError::illegal_character(Position::new(1, 3), '!'))
    );
    assert_eq!(
        results[2],
        Ok(Token::new(TokenKind::Ident, "y", Position::new(1, 5)))
    );
}

#[test]
fn test_latch_is_visible() {
    let mut lexer = Lexer::with_config(StrSource::new("@ x"), LexerConfig::collect_all());
    assert!(!lexer.is_failed());
    assert!(lexer.next().is_some_and(|r| r.is_err()));
    assert!(lexer.is_failed());
    // Still failed after scanning on.
    assert!(lexer.next().is_some_and(|r| r.is_ok()));
    assert!(lexer.is_failed());
}

#[test]
fn test_reset_rebinds_input() {
    let mut lexer = Lexer::new(StrSource::new("#"));
    assert!(lexer.next().is_some_and(|r| r.is_err()));
    assert!(lexer.next().is_none());

    lexer.reset(StrSource::new("\n  y"));
    assert!(!lexer.is_failed());
    assert_eq!(
        lexer.next().and_then(Result::ok),
        Some(Token::new(TokenKind::Ident, "y", Position::new(2, 3)))
    );
}

#[test]
fn test_not_in_comment_between_tokens() {
    let mut lexer = Lexer::new(StrSource::new("a // c\nb"));
    while let Some(Ok(token)) = lexer.next() {
        assert!(!lexer.is_in_comment(), "{token:?}");
    }
}

#[test]
fn test_config_modes() {
    assert_eq!(LexerConfig::collect_all().on_error, LexErrorMode::CollectAll);
    assert_eq!(LexerConfig::default().on_error, LexErrorMode::Halt);
}

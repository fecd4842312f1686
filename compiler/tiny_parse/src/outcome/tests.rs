use super::*;
use crate::{Expected, TokenSet};
use pretty_assertions::assert_eq;
use tiny_ir::Token;

#[test]
fn test_match_event_display() {
    let event = MatchEvent {
        kind: TokenKind::Assign,
        nonterminal: "statement",
        position: Position::new(1, 14),
    };
    assert_eq!(event.to_string(), "Expected: := from method: statement");
}

#[test]
fn test_into_result_ok() {
    let outcome = ParseOutcome {
        consumed: 5,
        trailing: 1,
        skipped: 2,
        ..ParseOutcome::default()
    };
    assert!(outcome.is_ok());
    assert_eq!(
        outcome.into_result(),
        Ok(ParseSummary {
            consumed: 5,
            trailing: 1,
            skipped: 2,
        })
    );
}

#[test]
fn test_into_result_errors() {
    let error = SyntaxError::new(
        Expected::Token(TokenKind::Dot),
        "program",
        Token::eof(Position::new(1, 9)),
        TokenSet::new(),
    );
    let outcome = ParseOutcome {
        errors: vec![error.clone()],
        ..ParseOutcome::default()
    };
    assert!(outcome.has_errors());
    assert_eq!(outcome.into_result(), Err(vec![error]));
}

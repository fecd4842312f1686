use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `;`, found `end`")
        .with_label(Position::new(3, 7), "expected `;` here")
        .with_note("while parsing statements")
        .with_suggestion("add `;` after the statement");

    assert!(diag.is_error());
    assert_eq!(diag.position, Some(Position::new(3, 7)));
    assert_eq!(diag.label.as_deref(), Some("expected `;` here"));
    assert_eq!(diag.notes, vec!["while parsing statements".to_string()]);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_display() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("illegal character `~`")
        .with_position(Position::new(1, 17));
    assert_eq!(diag.to_string(), "error[E0001]: illegal character `~` at 1:17");

    let warning = Diagnostic::warning(ErrorCode::W1001).with_message("2 tokens ignored");
    assert!(!warning.is_error());
    assert_eq!(warning.to_string(), "warning[W1001]: 2 tokens ignored");
}

use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use tiny_ir::Position;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `;`, found `ID`")
        .with_label(Position::new(2, 3), "expected `;` here")
        .with_note("while recognizing statements")
        .with_suggestion("add `;` after the previous statement")
}

fn render(emitter: TerminalEmitter<Vec<u8>>, diagnostic: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn test_terminal_emitter_no_color() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let text = render(emitter, &sample_diagnostic());

    assert!(text.starts_with("error[E1001]: expected `;`, found `ID`\n"));
    assert!(text.contains("--> <input>:2:3"));
    assert!(text.contains("= expected `;` here"));
    assert!(text.contains("note: while recognizing statements"));
    assert!(text.contains("help: add `;`"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    let text = render(emitter, &sample_diagnostic());
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1001"));
}

#[test]
fn test_auto_color_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_source_excerpt_points_at_column() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("demo.tiny", "program P:\n  y := 2;.\n");
    let text = render(emitter, &sample_diagnostic());

    let expected = "\
error[E1001]: expected `;`, found `ID`
  --> demo.tiny:2:3
   |
 2 |   y := 2;.
   |   ^ expected `;` here
   = note: while recognizing statements
   = help: add `;` after the previous statement

";
    assert_eq!(text, expected);
}

#[test]
fn test_emit_all_and_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::warning(ErrorCode::W1001).with_message("warning 1"),
    ];
    emitter.emit_all(&diagnostics);
    emitter.emit_summary(1, 1);
    let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();

    assert!(text.contains("error[E1001]: error 1"));
    assert!(text.contains("warning[W1001]: warning 1"));
    assert!(text.contains("error: aborting due to previous error; 1 warning emitted"));
}

#[test]
fn test_summary_plurals() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(3, 0);
    emitter.emit_summary(0, 2);
    emitter.emit_summary(0, 0);
    let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert_eq!(
        text,
        "error: aborting due to 3 previous errors\nwarning: 2 warnings emitted\n"
    );
}

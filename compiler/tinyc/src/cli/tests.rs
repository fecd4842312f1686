use super::*;
use pretty_assertions::assert_eq;
use tiny_lexer::LexErrorMode;
use tiny_parse::RecoveryMode;

fn command(args: &[&str]) -> Option<Command> {
    TinyArgs::try_parse_from(args).ok().map(TinyArgs::into_command)
}

#[test]
fn test_bare_path_means_check() {
    let Some(Command::Check(run)) = command(&["tiny", "prog.tiny"]) else {
        panic!("expected check");
    };
    assert_eq!(run.path, Some(PathBuf::from("prog.tiny")));
    assert_eq!(run.format, Format::Classic);
}

#[test]
fn test_no_arguments_prompts() {
    let Some(Command::Check(run)) = command(&["tiny"]) else {
        panic!("expected check");
    };
    assert_eq!(run.path, None);
}

#[test]
fn test_check_subcommand_with_flags() {
    let Some(Command::Check(run)) = command(&[
        "tiny",
        "check",
        "--recover",
        "--error-limit",
        "3",
        "--format",
        "rich",
        "--color",
        "never",
        "-q",
        "p.tiny",
    ]) else {
        panic!("expected check");
    };
    assert!(run.recover);
    assert!(run.quiet);
    assert_eq!(run.format, Format::Rich);
    assert_eq!(ColorMode::from(run.color), ColorMode::Never);

    let config = run.parse_config();
    assert_eq!(config.recovery, RecoveryMode::PanicMode);
    assert_eq!(config.error_limit, 3);
    assert!(!config.trace_matches);
}

#[test]
fn test_lex_subcommand() {
    let Some(Command::Lex(run)) = command(&["tiny", "lex", "--all-lex-errors", "p.tiny"]) else {
        panic!("expected lex");
    };
    assert_eq!(run.lexer_config().on_error, LexErrorMode::CollectAll);
}

#[test]
fn test_explain_subcommand() {
    let Some(Command::Explain(code)) = command(&["tiny", "explain", "E1001"]) else {
        panic!("expected explain");
    };
    assert_eq!(code, "E1001");
}

#[test]
fn test_defaults() {
    let run = RunArgs::default();
    assert_eq!(run.lexer_config(), LexerConfig::default());
    let config = run.parse_config();
    assert_eq!(config.recovery, RecoveryMode::Halt);
    assert_eq!(config.error_limit, 10);
    assert!(config.trace_matches);
}

#[test]
fn test_unknown_format_rejected() {
    assert!(command(&["tiny", "--format", "json", "p.tiny"]).is_none());
}

#[test]
fn test_log_tree_flag() {
    assert!(command(&["tiny", "--log-tree", "p.tiny"]).is_some_and(|c| c.log_tree()));
    assert!(command(&["tiny", "explain", "E0001"]).is_some_and(|c| !c.log_tree()));
}

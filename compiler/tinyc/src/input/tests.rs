use super::*;
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn write_temp(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|e| panic!("temp file: {e}"));
    file.write_all(text.as_bytes())
        .unwrap_or_else(|e| panic!("write: {e}"));
    file
}

#[test]
fn test_prompt_reads_named_file() {
    let file = write_temp("program P: print 1.");
    let mut input = Cursor::new(format!("{}\n", file.path().display()));
    let mut out = Vec::new();

    let source = prompt_for_source(&mut input, &mut out).ok();
    assert_eq!(source.map(|s| s.text), Some("program P: print 1.".to_string()));
    assert_eq!(String::from_utf8_lossy(&out), PROMPT);
}

#[test]
fn test_prompt_retries_after_failure() {
    let file = write_temp("x");
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("temp dir: {e}"));
    let missing = dir.path().join("missing.tiny");
    let mut input = Cursor::new(format!(
        "{}\n{}\n",
        missing.display(),
        file.path().display()
    ));
    let mut out = Vec::new();

    let source = prompt_for_source(&mut input, &mut out).ok();
    assert_eq!(source.map(|s| s.text), Some("x".to_string()));

    let printed = String::from_utf8_lossy(&out);
    assert_eq!(printed.matches(PROMPT).count(), 2);
    assert!(printed.contains("Error reading file: "));
}

#[test]
fn test_prompt_gives_up_at_end_of_input() {
    let mut input = Cursor::new("");
    let mut out = Vec::new();
    let err = prompt_for_source(&mut input, &mut out).err();
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::UnexpectedEof));
}

#[test]
fn test_locate_given_path_skips_prompt() {
    let file = write_temp("y");
    let mut input = Cursor::new("");
    let mut out = Vec::new();
    let source = locate_source(Some(file.path()), &mut input, &mut out).ok();
    assert_eq!(source.map(|s| s.text), Some("y".to_string()));
    assert!(out.is_empty());
}

#[test]
fn test_locate_missing_path_reports() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("temp dir: {e}"));
    let missing = dir.path().join("nope.tiny");
    let mut input = Cursor::new("");
    let mut out = Vec::new();
    assert!(locate_source(Some(&missing), &mut input, &mut out).is_err());
    assert!(String::from_utf8_lossy(&out).starts_with("Error reading file: "));
}

#[test]
fn test_from_text() {
    let source = SourceFile::from_text("demo.tiny", "program P:.");
    assert_eq!(source.display_path(), "demo.tiny");
}

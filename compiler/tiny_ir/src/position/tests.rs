use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_is_line_colon_column() {
    assert_eq!(Position::new(3, 14).to_string(), "3:14");
}

#[test]
fn test_default_is_start() {
    assert_eq!(Position::default(), Position::START);
    assert_eq!(Position::START.to_string(), "1:0");
}

#[test]
fn test_ordering_is_line_major() {
    assert!(Position::new(1, 40) < Position::new(2, 1));
    assert!(Position::new(2, 1) < Position::new(2, 2));
}

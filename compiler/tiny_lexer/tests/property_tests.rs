//! Property-based tests for the Tiny lexer.
//!
//! Generated inputs check that:
//! 1. Letter-led words classify as keyword, boolean literal or identifier
//! 2. Line comments are transparent
//! 3. Token positions point at the token's first character
//! 4. Illegal characters are reported where they stand

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tiny_ir::{Position, Token, TokenKind};
use tiny_lexer::{lex, lex_collecting, LexError, LexerConfig, RESERVED};

fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(RESERVED.to_vec()).prop_map(str::to_string),
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,10}").expect("valid regex"),
    ]
}

/// A token's source text, chosen so that adjacent tokens joined by a space
/// scan back to the same tokens.
fn lexeme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        prop::string::string_regex("[0-9]{1,6}").expect("valid regex"),
        prop::sample::select(vec![
            ":", ":=", "=", "=<", "<", ">", ">=", "!=", "+", "-", "*", "/", ";", "(", ")", ".",
            ",",
        ])
        .prop_map(str::to_string),
    ]
}

fn kinds_and_values(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|t| (t.kind(), t.value().to_string()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn words_classify(word in word_strategy()) {
        let tokens = lex(&word).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        let token = &tokens[0];
        if word == "true" || word == "false" {
            prop_assert_eq!(token.kind(), TokenKind::BooleanLiteral);
            prop_assert_eq!(token.value(), word.as_str());
        } else if RESERVED.contains(&word.as_str()) {
            prop_assert_eq!(token.kind().as_str(), word.as_str());
            prop_assert_eq!(token.value(), "");
        } else {
            prop_assert_eq!(token.kind(), TokenKind::Ident);
            prop_assert_eq!(token.value(), word.as_str());
        }
    }

    #[test]
    fn comments_are_transparent(
        before in prop::collection::vec(lexeme_strategy(), 0..6),
        after in prop::collection::vec(lexeme_strategy(), 0..6),
        comment in "[ -~]{0,30}",
    ) {
        let plain = format!("{}\n{}", before.join(" "), after.join(" "));
        let commented = format!("{} //{}\n{}", before.join(" "), comment, after.join(" "));

        let plain_tokens = lex(&plain).unwrap();
        let commented_tokens = lex(&commented).unwrap();
        prop_assert_eq!(
            kinds_and_values(plain_tokens.as_slice()),
            kinds_and_values(commented_tokens.as_slice())
        );

        // Tokens after the comment sit on line 2 in both inputs.
        for token in commented_tokens.iter().skip(before.len()) {
            prop_assert_eq!(token.position().line, 2);
        }
    }

    #[test]
    fn positions_point_at_first_character(
        lines in prop::collection::vec(
            (0usize..4, prop::collection::vec(lexeme_strategy(), 1..5)),
            1..5,
        ),
    ) {
        let mut text = String::new();
        let mut expected = Vec::new();
        for (line_index, (indent, lexemes)) in lines.iter().enumerate() {
            let line = u32::try_from(line_index).unwrap() + 1;
            let mut column = u32::try_from(*indent).unwrap();
            text.push_str(&" ".repeat(*indent));
            for lexeme in lexemes {
                expected.push(Position::new(line, column + 1));
                text.push_str(lexeme);
                text.push(' ');
                column += u32::try_from(lexeme.len()).unwrap() + 1;
            }
            text.push('\n');
        }

        let tokens = lex(&text).unwrap();
        let positions: Vec<Position> = tokens
            .iter()
            .filter(|t| !t.is_end_of_text())
            .map(|t| t.position())
            .collect();
        prop_assert_eq!(positions, expected);
    }

    #[test]
    fn illegal_characters_are_located(
        prefix in prop::collection::vec(lexeme_strategy(), 0..5),
        bad in prop::sample::select(vec!['#', '$', '%', '&', '?', '@', '^', '~', '{', '}', '"']),
    ) {
        let head = prefix.join(" ");
        let text = format!("{head} {bad}");
        let column = u32::try_from(head.len()).unwrap() + 2;

        prop_assert_eq!(
            lex(&text).err(),
            Some(LexError::illegal_character(Position::new(1, column), bad))
        );

        let collected = lex_collecting(&text, LexerConfig::collect_all());
        prop_assert_eq!(collected.errors.len(), 1);
        prop_assert!(collected.tokens.is_complete());
    }
}

#[test]
fn scenario_valid_program_tokens() {
    let tokens = lex("program P: int x; x := 1 + 2 * 3;.").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![
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
        ]
    );
}

#[test]
fn scenario_bang_without_equals() {
    let err = lex("program P: x := 1 !~ 2;.").unwrap_err();
    assert_eq!(err.to_string(), "1:20\t>>>>>> Illegal Character '~'");
}

#[test]
fn standalone_pair_prefixes() {
    let tokens = lex(": = >").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![TokenKind::Colon, TokenKind::Eq, TokenKind::Gt, TokenKind::Eof]
    );
}

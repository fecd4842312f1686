//! The scanner proper.
//!
//! All mutable scanning state lives in [`ScanState`]; [`advance`] and
//! [`scan_token`] are free functions over that state and a [`CharSource`].
//! A test can build any mid-stream state with [`ScanState::at`] and drive
//! the scanner from there.

use tiny_ir::{Position, Token, TokenKind};
use tracing::trace;

use crate::keywords::classify_word;
use crate::source::CharSource;
use crate::LexError;

/// The one-character lookahead.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Lookahead {
    /// Nothing read yet; the first `scan_token` primes it.
    Unprimed,
    Char(char),
    Eof,
}

/// Scanner state between tokens.
///
/// `line` and `column` locate the lookahead character. A newline resets
/// the column to 0 and every character read increments it, so the first
/// character of a line sits at column 1.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ScanState {
    lookahead: Lookahead,
    line: u32,
    column: u32,
    in_comment: bool,
    failed: bool,
}

impl ScanState {
    /// State at the start of an input.
    pub fn new() -> Self {
        ScanState {
            lookahead: Lookahead::Unprimed,
            line: Position::START.line,
            column: Position::START.column,
            in_comment: false,
            failed: false,
        }
    }

    /// State with `current` as the lookahead at `position` (`None` = end of input).
    pub fn at(current: Option<char>, position: Position) -> Self {
        ScanState {
            lookahead: current.map_or(Lookahead::Eof, Lookahead::Char),
            line: position.line,
            column: position.column,
            in_comment: false,
            failed: false,
        }
    }

    #[inline]
    pub fn lookahead(&self) -> Lookahead {
        self.lookahead
    }

    /// The lookahead character, if one has been read and input is not exhausted.
    #[inline]
    pub fn current(&self) -> Option<char> {
        match self.lookahead {
            Lookahead::Char(c) => Some(c),
            Lookahead::Unprimed | Lookahead::Eof => None,
        }
    }

    /// Position of the lookahead character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_in_comment(&self) -> bool {
        self.in_comment
    }

    /// Whether an illegal character or a read failure has been seen.
    pub fn is_failed(&self) -> bool {
        self.failed
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the next character into the lookahead.
///
/// Does nothing once end of input has been reached. A read failure sets the
/// error latch and leaves the scanner at end of input.
pub fn advance<S: CharSource + ?Sized>(
    state: &mut ScanState,
    source: &mut S,
) -> Result<(), LexError> {
    if state.lookahead == Lookahead::Eof {
        return Ok(());
    }
    state.column += 1;
    match source.next_char() {
        Ok(Some(c)) => {
            state.lookahead = Lookahead::Char(c);
            Ok(())
        }
        Ok(None) => {
            state.lookahead = Lookahead::Eof;
            Ok(())
        }
        Err(err) => {
            state.lookahead = Lookahead::Eof;
            state.failed = true;
            Err(LexError::io(state.position(), &err))
        }
    }
}

/// Scan one token.
///
/// Skips a comment in progress and any whitespace, records the start
/// position, then classifies the longest run starting there. Illegal
/// characters are left in the lookahead and set the error latch.
pub fn scan_token<S: CharSource + ?Sized>(
    state: &mut ScanState,
    source: &mut S,
) -> Result<Token, LexError> {
    if state.lookahead == Lookahead::Unprimed {
        advance(state, source)?;
    }

    loop {
        if state.in_comment {
            skip_comment(state, source)?;
        }
        skip_whitespace(state, source)?;

        let start = state.position();
        let c = match state.lookahead {
            Lookahead::Char(c) => c,
            Lookahead::Eof | Lookahead::Unprimed => return Ok(Token::eof(start)),
        };

        if c.is_ascii_alphabetic() {
            let text = take_while(state, source, |c| c.is_ascii_alphanumeric() || c == '_')?;
            return Ok(Token::new(classify_word(&text), text, start));
        }
        if c.is_ascii_digit() {
            let text = take_while(state, source, |c| c.is_ascii_digit())?;
            return Ok(Token::new(TokenKind::Num, text, start));
        }

        let kind = match c {
            '/' => {
                advance(state, source)?;
                if state.current() == Some('/') {
                    trace!(line = state.line, "line comment");
                    state.in_comment = true;
                    continue;
                }
                return Ok(Token::bare(TokenKind::Slash, start));
            }
            '=' => pair(state, source, '<', TokenKind::LtEq, TokenKind::Eq)?,
            '>' => pair(state, source, '=', TokenKind::GtEq, TokenKind::Gt)?,
            ':' => pair(state, source, '=', TokenKind::Assign, TokenKind::Colon)?,
            '!' => {
                advance(state, source)?;
                match state.current() {
                    Some('=') => {
                        advance(state, source)?;
                        TokenKind::NotEq
                    }
                    // `!` commits to `!=`. A visible character in place of `=` is
                    // the illegal one; before whitespace or end of input `!` is.
                    Some(follower) if !follower.is_whitespace() => {
                        state.failed = true;
                        return Err(LexError::illegal_character(state.position(), follower));
                    }
                    _ => {
                        state.failed = true;
                        return Err(LexError::illegal_character(start, '!'));
                    }
                }
            }
            _ => match single(c) {
                Some(kind) => {
                    advance(state, source)?;
                    kind
                }
                None => {
                    state.failed = true;
                    return Err(LexError::illegal_character(start, c));
                }
            },
        };
        return Ok(Token::bare(kind, start));
    }
}

fn single(c: char) -> Option<TokenKind> {
    Some(match c {
        '<' => TokenKind::Lt,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        ';' => TokenKind::Semicolon,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '.' => TokenKind::Dot,
        ',' => TokenKind::Comma,
        _ => return None,
    })
}

/// Consume the first character of a possible pair, then the second if it is `second`.
fn pair<S: CharSource + ?Sized>(
    state: &mut ScanState,
    source: &mut S,
    second: char,
    both: TokenKind,
    alone: TokenKind,
) -> Result<TokenKind, LexError> {
    advance(state, source)?;
    if state.current() == Some(second) {
        advance(state, source)?;
        Ok(both)
    } else {
        Ok(alone)
    }
}

fn take_while<S: CharSource + ?Sized>(
    state: &mut ScanState,
    source: &mut S,
    accept: impl Fn(char) -> bool,
) -> Result<String, LexError> {
    let mut text = String::new();
    while let Some(c) = state.current() {
        if !accept(c) {
            break;
        }
        text.push(c);
        advance(state, source)?;
    }
    Ok(text)
}

/// Consume up to (not including) the newline ending the comment.
fn skip_comment<S: CharSource + ?Sized>(
    state: &mut ScanState,
    source: &mut S,
) -> Result<(), LexError> {
    while let Some(c) = state.current() {
        if c == '\n' {
            break;
        }
        advance(state, source)?;
    }
    state.in_comment = false;
    Ok(())
}

fn skip_whitespace<S: CharSource + ?Sized>(
    state: &mut ScanState,
    source: &mut S,
) -> Result<(), LexError> {
    while let Some(c) = state.current() {
        if !c.is_whitespace() {
            break;
        }
        if c == '\n' {
            state.line += 1;
            state.column = 0;
        }
        advance(state, source)?;
    }
    Ok(())
}

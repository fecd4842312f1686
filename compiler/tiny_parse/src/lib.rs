//! Recursive descent recognizer for Tiny.
//!
//! Decides whether a [`TokenList`] is a program; builds no tree. There is
//! one recognizing method per nonterminal, each taking the Follow set of its
//! calling context.
//!
//! By default the first mismatch ends the parse ([`RecoveryMode::Halt`]).
//! [`RecoveryMode::PanicMode`] records the error, skips to a token in the
//! active Follow set, and carries on.

mod cursor;
mod error;
mod grammar;
mod outcome;
pub mod recovery;
mod stack;

pub use cursor::Cursor;
pub use error::{Expected, SyntaxError};
pub use outcome::{MatchEvent, ParseOutcome, ParseSummary};
pub use recovery::{synchronize, TokenSet};

use tiny_ir::{TokenKind, TokenList};
use tracing::{debug, trace};

/// What the parser does after a syntax error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RecoveryMode {
    /// The first error ends the parse.
    #[default]
    Halt,
    /// Record the error, synchronize on the Follow set, continue.
    PanicMode,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseConfig {
    pub recovery: RecoveryMode,
    /// Stop after this many errors in panic mode. 0 means no limit.
    pub error_limit: usize,
    /// Record a [`MatchEvent`] for every matched token.
    pub trace_matches: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            recovery: RecoveryMode::Halt,
            error_limit: 10,
            trace_matches: false,
        }
    }
}

impl ParseConfig {
    pub fn panic_mode() -> Self {
        ParseConfig {
            recovery: RecoveryMode::PanicMode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_error_limit(mut self, limit: usize) -> Self {
        self.error_limit = limit;
        self
    }

    #[must_use]
    pub fn with_match_trace(mut self, on: bool) -> Self {
        self.trace_matches = on;
        self
    }
}

/// Parsing has stopped; the reason is the last recorded error.
#[derive(Debug)]
struct Halted;

type Step = Result<(), Halted>;

/// Parser state: a cursor over one token list plus what has been recorded.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: ParseConfig,
    trace: Vec<MatchEvent>,
    errors: Vec<SyntaxError>,
    skipped: usize,
    /// Cursor index of the last recorded error.
    last_error_at: Option<usize>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, config: ParseConfig) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            config,
            trace: Vec::new(),
            errors: Vec::new(),
            skipped: 0,
            last_error_at: None,
        }
    }

    /// Recognize a whole program.
    pub fn parse_program(mut self) -> ParseOutcome {
        let halted = self.program().is_err();
        let trailing = if halted { 0 } else { self.cursor.remaining() };
        if trailing > 0 {
            debug!(trailing, "tokens after the final `.`");
        }
        ParseOutcome {
            consumed: self.cursor.position(),
            trailing,
            skipped: self.skipped,
            trace: self.trace,
            errors: self.errors,
        }
    }

    /// Consume the current token as a match for `nonterminal`.
    fn accept(&mut self, nonterminal: &'static str) {
        let token = self.cursor.advance();
        let (kind, position) = (token.kind(), token.position());
        trace!(%kind, nonterminal, "matched");
        if self.config.trace_matches {
            self.trace.push(MatchEvent {
                kind,
                nonterminal,
                position,
            });
        }
    }

    /// Match `kind` or report it.
    ///
    /// In panic mode a mismatch skips to `kind` or a member of `follow`,
    /// consuming `kind` if that is where it stopped.
    fn expect(&mut self, kind: TokenKind, nonterminal: &'static str, follow: TokenSet) -> Step {
        if self.cursor.check(kind) {
            self.accept(nonterminal);
            return Ok(());
        }
        self.report(Expected::Token(kind), nonterminal, follow)?;
        self.recover(follow.with(kind));
        if self.cursor.check(kind) {
            self.accept(nonterminal);
        }
        Ok(())
    }

    /// Record an error at the current token.
    ///
    /// Returns `Err` when parsing must stop: always in halt mode, and in panic
    /// mode once the error limit is reached. A second error at the same token
    /// is not recorded.
    fn report(&mut self, expected: Expected, nonterminal: &'static str, follow: TokenSet) -> Step {
        let at = self.cursor.position();
        if self.last_error_at != Some(at) {
            let error =
                SyntaxError::new(expected, nonterminal, self.cursor.current().clone(), follow);
            debug!(%error, "syntax error");
            self.errors.push(error);
            self.last_error_at = Some(at);
        }
        match self.config.recovery {
            RecoveryMode::Halt => Err(Halted),
            RecoveryMode::PanicMode => {
                let limit = self.config.error_limit;
                if limit != 0 && self.errors.len() >= limit {
                    debug!(limit, "error limit reached");
                    Err(Halted)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn recover(&mut self, sync: TokenSet) {
        let skipped = synchronize(&mut self.cursor, sync);
        if skipped > 0 {
            debug!(skipped, resume = %self.cursor.current_kind(), "synchronized");
        }
    }
}

/// Recognize `tokens`, stopping at the first syntax error.
pub fn parse(tokens: &TokenList) -> Result<ParseSummary, SyntaxError> {
    let outcome = parse_with(tokens, ParseConfig::default());
    let summary = outcome.summary();
    match outcome.errors.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(summary),
    }
}

/// Recognize `tokens` under `config`.
pub fn parse_with(tokens: &TokenList, config: ParseConfig) -> ParseOutcome {
    Parser::new(tokens, config).parse_program()
}

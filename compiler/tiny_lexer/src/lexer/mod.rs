//! Token-at-a-time lexer over a character source.

use std::iter::FusedIterator;

use tiny_ir::Token;
use tracing::{debug, trace};

use crate::scanner::{advance, scan_token, ScanState};
use crate::source::CharSource;
use crate::{LexError, LexErrorKind};

/// What the lexer does after an illegal character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum LexErrorMode {
    /// Stop at the first error.
    #[default]
    Halt,
    /// Skip the offending character and keep scanning. Read failures still stop.
    CollectAll,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LexerConfig {
    pub on_error: LexErrorMode,
}

impl LexerConfig {
    pub fn collect_all() -> Self {
        LexerConfig {
            on_error: LexErrorMode::CollectAll,
        }
    }
}

/// Pulls tokens from a [`CharSource`] one at a time.
///
/// Yields `Ok(token)` for each token up to and including `end-of-file`, and
/// `Err` for each lexical error. The iterator is fused: after `end-of-file`,
/// a read failure, or any error in [`LexErrorMode::Halt`] it yields `None`.
pub struct Lexer<S> {
    source: S,
    state: ScanState,
    config: LexerConfig,
    /// The previous call reported the illegal character in the lookahead.
    skip_pending: bool,
    finished: bool,
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: S, config: LexerConfig) -> Self {
        Lexer {
            source,
            state: ScanState::new(),
            config,
            skip_pending: false,
            finished: false,
        }
    }

    /// Rebind to a new input, clearing all scanning state.
    pub fn reset(&mut self, source: S) {
        self.source = source;
        self.state = ScanState::new();
        self.skip_pending = false;
        self.finished = false;
    }

    /// Whether an illegal character or a read failure has been seen.
    pub fn is_failed(&self) -> bool {
        self.state.is_failed()
    }

    pub fn is_in_comment(&self) -> bool {
        self.state.is_in_comment()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    fn fail(&mut self, err: &LexError) {
        debug!(%err, "lexical error");
        match (&err.kind, self.config.on_error) {
            (LexErrorKind::IllegalCharacter { found }, LexErrorMode::CollectAll) => {
                // Skip only a character still sitting in the lookahead.
                self.skip_pending = self.state.current() == Some(*found)
                    && self.state.position() == err.position;
            }
            _ => self.finished = true,
        }
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.skip_pending {
            self.skip_pending = false;
            if let Err(err) = advance(&mut self.state, &mut self.source) {
                self.fail(&err);
                return Some(Err(err));
            }
        }

        match scan_token(&mut self.state, &mut self.source) {
            Ok(token) => {
                trace!(?token, "token");
                if token.is_end_of_text() {
                    self.finished = true;
                }
                Some(Ok(token))
            }
            Err(err) => {
                self.fail(&err);
                Some(Err(err))
            }
        }
    }
}

impl<S: CharSource> FusedIterator for Lexer<S> {}

#[cfg(test)]
mod tests;

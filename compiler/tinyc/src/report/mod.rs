//! Everything the driver prints.
//!
//! The token and match traces always go to the output stream in their
//! classic one-line form. Errors follow the chosen [`Format`]: classic lines
//! on the output stream, or rich diagnostics on the diagnostic stream.

use std::io::{self, Write};

use tiny_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use tiny_diagnostic::{Diagnostic, ErrorCode};
use tiny_ir::{Position, Token};
use tiny_lexer::LexError;
use tiny_parse::{MatchEvent, SyntaxError};

use crate::cli::Format;
use crate::input::SourceFile;

/// `Position: <line:col>, Token Kind: <kind>, Value: <value>`
pub fn token_line(token: &Token) -> String {
    format!(
        "Position: {}, Token Kind: {}, Value: {}",
        token.position(),
        token.kind(),
        token.value()
    )
}

/// How the driver's output is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub format: Format,
    pub color: ColorMode,
    /// Whether the diagnostic stream is a terminal.
    pub is_tty: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            format: Format::Classic,
            color: ColorMode::Never,
            is_tty: false,
        }
    }
}

pub struct Reporter<W: Write, E: Write> {
    out: W,
    format: Format,
    emitter: TerminalEmitter<E>,
    errors: usize,
    warnings: usize,
}

impl<W: Write, E: Write> Reporter<W, E> {
    pub fn new(out: W, diag: E, style: Style, source: &SourceFile) -> Self {
        let emitter = TerminalEmitter::with_color_mode(diag, style.color, style.is_tty)
            .with_source(source.display_path(), &source.text);
        Reporter {
            out,
            format: style.format,
            emitter,
            errors: 0,
            warnings: 0,
        }
    }

    pub fn token(&mut self, token: &Token) -> io::Result<()> {
        writeln!(self.out, "{}", token_line(token))
    }

    pub fn matched(&mut self, event: &MatchEvent) -> io::Result<()> {
        writeln!(self.out, "{event}")
    }

    pub fn lex_error(&mut self, err: &LexError) -> io::Result<()> {
        self.errors += 1;
        match self.format {
            Format::Classic => writeln!(self.out, "{err}"),
            Format::Rich => {
                self.emitter.emit(&err.clone().into_diagnostic());
                Ok(())
            }
        }
    }

    pub fn syntax_error(&mut self, err: &SyntaxError) -> io::Result<()> {
        self.errors += 1;
        match self.format {
            Format::Classic => writeln!(self.out, "{err}"),
            Format::Rich => {
                self.emitter.emit(&err.clone().into_diagnostic());
                Ok(())
            }
        }
    }

    /// Warn that tokens before `program` were ignored. Rich format only.
    pub fn skipped_prefix(&mut self, count: usize, first: Position) {
        if self.format != Format::Rich {
            return;
        }
        self.warnings += 1;
        let noun = if count == 1 { "token" } else { "tokens" };
        self.emitter.emit(
            &Diagnostic::warning(ErrorCode::W1001)
                .with_message(format!("ignored {count} {noun} before `program`"))
                .with_label(first, "parsing starts at the first `program`"),
        );
    }

    /// A plain line on the output stream.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Print the rich summary and flush both streams.
    pub fn finish(mut self) -> io::Result<(W, E)> {
        if self.format == Format::Rich && self.errors + self.warnings > 0 {
            self.emitter.emit_summary(self.errors, self.warnings);
        }
        self.emitter.flush();
        self.out.flush()?;
        Ok((self.out, self.emitter.into_inner()))
    }
}

//! Command implementations.
//!
//! Every command writes through the streams it is given so the CLI tests can
//! capture them; `main` passes the locked standard streams.

mod check;
mod explain;
mod lex;

pub use check::check_source;
pub use explain::explain_code;
pub use lex::lex_file;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tiny_ir::TokenList;
use tiny_lexer::{Lexer, StrSource};

use crate::cli::{Command, RunArgs};
use crate::input::{locate_source, SourceFile};
use crate::report::{Reporter, Style};

/// Whether a command succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }

    pub fn exit_code(self) -> ExitCode {
        match self {
            Verdict::Accepted => ExitCode::SUCCESS,
            Verdict::Rejected => ExitCode::FAILURE,
        }
    }
}

/// Run `command` against the given streams.
///
/// `is_tty` says whether `stderr` is a terminal, for `--color auto`.
pub fn run<R: BufRead, W: Write, E: Write>(
    command: Command,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
    is_tty: bool,
) -> io::Result<Verdict> {
    match command {
        Command::Check(run) => {
            let Some(source) = source_for(&run, stdin, stdout, stderr)? else {
                return Ok(Verdict::Rejected);
            };
            check_source(&source, &run, style(&run, is_tty), stdout, stderr)
        }
        Command::Lex(run) => {
            let Some(source) = source_for(&run, stdin, stdout, stderr)? else {
                return Ok(Verdict::Rejected);
            };
            lex_file(&source, &run, style(&run, is_tty), stdout, stderr)
        }
        Command::Explain(code) => explain_code(&code, stdout, stderr),
    }
}

fn style(run: &RunArgs, is_tty: bool) -> Style {
    Style {
        format: run.format,
        color: run.color.into(),
        is_tty,
    }
}

/// Read the source named on the command line, or prompt for one.
///
/// `None` means no source could be read; the reason has been printed.
fn source_for<R: BufRead, W: Write, E: Write>(
    run: &RunArgs,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
) -> io::Result<Option<SourceFile>> {
    match locate_source(run.path.as_deref(), stdin, stdout) {
        Ok(source) => Ok(Some(source)),
        // Already reported by `locate_source`.
        Err(_) if run.path.is_some() => Ok(None),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            writeln!(stdout)?;
            writeln!(stderr, "error: {err}")?;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Scan `source`, printing the token trace unless `quiet` and every lexical error.
///
/// Returns the tokens, or `None` if any lexical error was reported.
fn scan<W: Write, E: Write>(
    source: &SourceFile,
    run: &RunArgs,
    quiet: bool,
    reporter: &mut Reporter<W, E>,
) -> io::Result<Option<TokenList>> {
    let mut tokens = TokenList::new();
    let mut failed = false;
    for result in Lexer::with_config(StrSource::new(&source.text), run.lexer_config()) {
        match result {
            Ok(token) => {
                if !quiet {
                    reporter.token(&token)?;
                }
                tokens.push(token);
            }
            Err(err) => {
                reporter.lex_error(&err)?;
                failed = true;
            }
        }
    }
    Ok(if failed { None } else { Some(tokens) })
}

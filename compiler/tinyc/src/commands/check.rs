//! The `check` command: lex and parse a file.

use std::io::{self, Write};

use tiny_parse::parse_with;
use tracing::debug;

use crate::cli::RunArgs;
use crate::input::SourceFile;
use crate::report::{Reporter, Style};

use super::{scan, Verdict};

/// Lex and parse `source`, printing the traces and the verdict line.
///
/// Lexical errors stop before parsing. `Parsing successful.` ends an
/// accepted program; after recovered syntax errors the last line is
/// `Parsing failed.`.
pub fn check_source<W: Write, E: Write>(
    source: &SourceFile,
    run: &RunArgs,
    style: Style,
    out: W,
    diag: E,
) -> io::Result<Verdict> {
    let mut reporter = Reporter::new(out, diag, style, source);

    let Some(tokens) = scan(source, run, run.quiet, &mut reporter)? else {
        reporter.finish()?;
        return Ok(Verdict::Rejected);
    };

    let outcome = parse_with(&tokens, run.parse_config());
    debug!(
        consumed = outcome.consumed,
        trailing = outcome.trailing,
        errors = outcome.errors.len(),
        "parsed"
    );

    for event in &outcome.trace {
        reporter.matched(event)?;
    }
    if outcome.skipped > 0 {
        if let Some(first) = tokens.get(0) {
            reporter.skipped_prefix(outcome.skipped, first.position());
        }
    }
    for error in &outcome.errors {
        reporter.syntax_error(error)?;
    }

    let verdict = if outcome.is_ok() {
        reporter.line("Parsing successful.")?;
        Verdict::Accepted
    } else {
        if run.recover {
            reporter.line("Parsing failed.")?;
        }
        Verdict::Rejected
    };
    reporter.finish()?;
    Ok(verdict)
}

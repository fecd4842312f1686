//! The `lex` command: print the token trace of a file.

use std::io::{self, Write};

use crate::cli::RunArgs;
use crate::input::SourceFile;
use crate::report::{Reporter, Style};

use super::{scan, Verdict};

/// Print one trace line per token, and every lexical error.
///
/// The trace is the point of this command, so `--quiet` is ignored.
pub fn lex_file<W: Write, E: Write>(
    source: &SourceFile,
    run: &RunArgs,
    style: Style,
    out: W,
    diag: E,
) -> io::Result<Verdict> {
    let mut reporter = Reporter::new(out, diag, style, source);
    let tokens = scan(source, run, false, &mut reporter)?;
    reporter.finish()?;
    Ok(match tokens {
        Some(_) => Verdict::Accepted,
        None => Verdict::Rejected,
    })
}

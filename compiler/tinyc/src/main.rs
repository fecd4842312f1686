//! Tiny CLI
//!
//! Lexes and recognizes Tiny programs.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use tinyc::cli::TinyArgs;
use tinyc::commands::run;
use tinyc::logging::init_tracing;

fn main() -> ExitCode {
    let command = TinyArgs::parse().into_command();
    init_tracing(command.log_tree());

    let is_tty = io::stderr().is_terminal();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match run(command, &mut stdin, &mut stdout, &mut stderr, is_tty) {
        Ok(verdict) => verdict.exit_code(),
        Err(err) => {
            let _ = writeln!(stderr, "error: {err}");
            ExitCode::FAILURE
        }
    }
}

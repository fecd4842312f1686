//! Command-line arguments.
//!
//! ```text
//! tiny [OPTIONS] [PATH]          check a program (same as `tiny check`)
//! tiny check [OPTIONS] [PATH]
//! tiny lex [OPTIONS] [PATH]      print the token trace only
//! tiny explain <CODE>            show documentation for an error code
//! ```
//!
//! Without PATH the file path is read from standard input.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tiny_diagnostic::emitter::ColorMode;
use tiny_lexer::LexerConfig;
use tiny_parse::ParseConfig;

/// Lexer and recognizer for the Tiny language
#[derive(Debug, Parser)]
#[command(name = "tiny", version, args_conflicts_with_subcommands = true)]
pub struct TinyArgs {
    #[command(subcommand)]
    pub command: Option<TinyCommand>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Debug, Subcommand)]
pub enum TinyCommand {
    /// Lex and parse a program
    #[command(name = "check")]
    Check(RunArgs),

    /// Lex a program and print its tokens
    #[command(name = "lex")]
    Lex(RunArgs),

    /// Show documentation for an error code
    #[command(name = "explain")]
    Explain {
        /// Error code, e.g. E1001
        #[arg()]
        code: String,
    },
}

/// Options shared by `check` and `lex`.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Source file; prompted for when omitted
    #[arg()]
    pub path: Option<PathBuf>,

    /// Keep parsing after a syntax error, skipping to the next synchronization point
    #[arg(long)]
    pub recover: bool,

    /// Report every illegal character instead of stopping at the first
    #[arg(long)]
    pub all_lex_errors: bool,

    /// Stop after this many syntax errors when recovering (0 = no limit)
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub error_limit: usize,

    /// Do not print the token and match traces
    #[arg(short, long)]
    pub quiet: bool,

    /// How to print errors
    #[arg(long, value_enum, default_value_t = Format::Classic)]
    pub format: Format,

    /// When to color rich output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Render RUST_LOG output as an indented tree
    #[arg(long)]
    pub log_tree: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        RunArgs {
            path: None,
            recover: false,
            all_lex_errors: false,
            error_limit: 10,
            quiet: false,
            format: Format::Classic,
            color: ColorChoice::Auto,
            log_tree: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line per error, as in the trace
    #[default]
    Classic,
    /// Diagnostics with codes and source excerpts
    Rich,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

/// What to run, with clap's optional subcommand resolved.
#[derive(Debug)]
pub enum Command {
    Check(RunArgs),
    Lex(RunArgs),
    Explain(String),
}

impl TinyArgs {
    pub fn into_command(self) -> Command {
        match self.command {
            None => Command::Check(self.run),
            Some(TinyCommand::Check(run)) => Command::Check(run),
            Some(TinyCommand::Lex(run)) => Command::Lex(run),
            Some(TinyCommand::Explain { code }) => Command::Explain(code),
        }
    }
}

impl Command {
    /// Whether logs should render as a tree.
    pub fn log_tree(&self) -> bool {
        match self {
            Command::Check(run) | Command::Lex(run) => run.log_tree,
            Command::Explain(_) => false,
        }
    }
}

impl RunArgs {
    pub fn lexer_config(&self) -> LexerConfig {
        if self.all_lex_errors {
            LexerConfig::collect_all()
        } else {
            LexerConfig::default()
        }
    }

    pub fn parse_config(&self) -> ParseConfig {
        let config = if self.recover {
            ParseConfig::panic_mode()
        } else {
            ParseConfig::default()
        };
        config
            .with_error_limit(self.error_limit)
            .with_match_trace(!self.quiet)
    }
}

#[cfg(test)]
mod tests;

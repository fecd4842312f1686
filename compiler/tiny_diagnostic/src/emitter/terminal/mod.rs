//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E1001]: expected `;`, found `ID`
//!   --> demo.tiny:3:3
//!    |
//!  3 |   y := 2;.
//!    |   ^ expected `;` here
//!    = note: while recognizing statements
//! ```

use std::io::Write;

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source text used to print the offending line under a diagnostic.
struct SourceView {
    path: String,
    lines: Vec<String>,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceView>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source so positions render with an excerpt.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: &str) -> Self {
        self.source = Some(SourceView {
            path: path.into(),
            lines: text.lines().map(str::to_owned).collect(),
        });
        self
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_location(&mut self, diagnostic: &Diagnostic) {
        let Some(position) = diagnostic.position else {
            return;
        };
        let path = self
            .source
            .as_ref()
            .map_or("<input>", |source| source.path.as_str())
            .to_owned();
        let _ = write!(self.writer, "  ");
        self.write_colored("-->", colors::SECONDARY);
        let _ = writeln!(self.writer, " {path}:{position}");

        let line_text = self.source.as_ref().and_then(|source| {
            let index = usize::try_from(position.line).ok()?.checked_sub(1)?;
            source.lines.get(index).cloned()
        });
        let Some(line_text) = line_text else {
            if let Some(label) = &diagnostic.label {
                let _ = write!(self.writer, "   = ");
                let label = label.clone();
                self.write_colored(&label, colors::ERROR);
                let _ = writeln!(self.writer);
            }
            return;
        };

        let gutter = position.line.to_string();
        let pad = " ".repeat(gutter.len());
        let _ = writeln!(self.writer, " {pad} |");
        let _ = writeln!(self.writer, " {gutter} | {line_text}");

        // Columns are 1-based; the end-of-file token may sit one past the text.
        let indent = " ".repeat(usize::try_from(position.column.saturating_sub(1)).unwrap_or(0));
        let _ = write!(self.writer, " {pad} | {indent}");
        let marker = match &diagnostic.label {
            Some(label) => format!("^ {label}"),
            None => "^".to_owned(),
        };
        self.write_colored(&marker, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        self.write_location(diagnostic);

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "   = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "   = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
mod tests;

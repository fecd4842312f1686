//! Finding and reading the program source.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

pub const PROMPT: &str = "Enter the path to the input file: ";

/// A source file read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn read(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        debug!(path = %path.display(), bytes = text.len(), "read source");
        Ok(SourceFile { path, text })
    }

    /// In-memory source, for tests and tools.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Prompt on `out` for a path read from `input` until a file can be read.
///
/// Each failure prints `Error reading file: <message>` and prompts again.
/// Returns `UnexpectedEof` if `input` ends first.
pub fn prompt_for_source<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<SourceFile> {
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no input file given",
            ));
        }

        match SourceFile::read(line.trim()) {
            Ok(source) => return Ok(source),
            Err(err) => writeln!(out, "Error reading file: {err}")?,
        }
    }
}

/// Read `path` if given, otherwise prompt for one.
///
/// A given path is not retried: a read failure is reported on `out` and
/// returned.
pub fn locate_source<R: BufRead, W: Write>(
    path: Option<&Path>,
    input: &mut R,
    out: &mut W,
) -> io::Result<SourceFile> {
    let Some(path) = path else {
        return prompt_for_source(input, out);
    };
    match SourceFile::read(path) {
        Ok(source) => Ok(source),
        Err(err) => {
            writeln!(out, "Error reading file: {err}")?;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests;

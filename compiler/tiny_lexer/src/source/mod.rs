//! Character sources for the scanner.
//!
//! The scanner pulls one character at a time. A source answers with the next
//! character, `None` at end of input, or an I/O error.

use std::io::{self, BufRead};
use std::str::Chars;

/// A stream of characters the scanner can pull from.
pub trait CharSource {
    /// Read the next character.
    ///
    /// Returns `Ok(None)` at end of input. Once `Ok(None)` has been returned
    /// every further call returns `Ok(None)` as well.
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        (**self).next_char()
    }
}

/// In-memory source over a string slice.
#[derive(Clone, Debug)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        StrSource { chars: text.chars() }
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// Line-buffered UTF-8 source over any [`BufRead`].
///
/// Invalid UTF-8 surfaces as an `InvalidData` I/O error for the line that
/// contains it.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    line: String,
    offset: usize,
    exhausted: bool,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader,
            line: String::new(),
            offset: 0,
            exhausted: false,
        }
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(c) = self.line[self.offset..].chars().next() {
                self.offset += c.len_utf8();
                return Ok(Some(c));
            }
            if self.exhausted {
                return Ok(None);
            }
            self.line.clear();
            self.offset = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                self.exhausted = true;
            }
        }
    }
}

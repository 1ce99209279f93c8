//! Line sources feeding the parser.
//!
//! The parser pulls decoded lines one at a time and never asks for pushback,
//! so a source only has to hand out the next line or report that none remain.

use std::io::{self, BufRead};

/// A supplier of decoded text lines.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` once exhausted.
    fn next_line(&mut self) -> Option<String>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> Option<String> {
        (**self).next_line()
    }
}

/// Lines of an in-memory string.
#[derive(Debug, Clone)]
pub struct StrLines<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> StrLines<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { lines: text.lines() }
    }
}

impl LineSource for StrLines<'_> {
    fn next_line(&mut self) -> Option<String> {
        self.lines.next().map(str::to_string)
    }
}

/// Lines of any iterator yielding strings.
#[derive(Debug, Clone)]
pub struct IterLines<I> {
    inner: I,
}

impl<I> IterLines<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I, T> LineSource for IterLines<I>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    fn next_line(&mut self) -> Option<String> {
        self.inner.next().map(Into::into)
    }
}

/// Lines of a buffered reader.
///
/// A read error ends the stream; the error is kept so the caller can tell an
/// I/O failure apart from a short document.
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    error: Option<io::Error>,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            error: None,
        }
    }

    /// Takes the I/O error that ended the stream, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(err) => {
                log::debug!("line source stopped on read error: {err}");
                self.error = Some(err);
                None
            }
        }
    }
}

use std::io::{self, Read, Write};

use bytes::BytesMut;

use crate::config::Limits;
use crate::error::InputError;
use crate::matcher::Regex;

const CHUNK_SIZE: usize = 8 * 1024;

/// Splits a byte stream into lines.
///
/// The stream is read chunk by chunk straight into one growable buffer and
/// each line is split off the front of it.
pub struct Lines<R> {
    reader: R,
    buf: BytesMut,
    /// Bytes at the front of `buf` already known not to contain a newline.
    searched: usize,
    eof: bool,
    line: usize,
}

impl<R: Read> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: BytesMut::with_capacity(CHUNK_SIZE),
            searched: 0,
            eof: false,
            line: 0,
        }
    }

    /// Number of the last line returned, starting at 1.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Returns the next line without its `\n` or `\r\n` terminator, or `None`
    /// at the end of input. The last line may lack a terminator.
    pub fn next_line(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(i) = self.buf[self.searched..].iter().position(|&b| b == b'\n') {
                let end = self.searched + i + 1;
                return self.take(end).map(Some);
            }
            self.searched = self.buf.len();
            if self.eof {
                if self.buf.is_empty() {
                    return Ok(None);
                }
                return self.take(self.buf.len()).map(Some);
            }
            self.fill()?;
        }
    }

    fn take(&mut self, end: usize) -> Result<String, InputError> {
        let raw = self.buf.split_to(end).freeze();
        self.searched = 0;
        self.line += 1;
        let text = std::str::from_utf8(&raw).map_err(|_| InputError::NotUtf8 { line: self.line })?;
        let text = text.strip_suffix('\n').unwrap_or(text);
        let text = text.strip_suffix('\r').unwrap_or(text);
        Ok(text.to_owned())
    }

    fn fill(&mut self) -> Result<(), InputError> {
        let filled = self.buf.len();
        self.buf.resize(filled + CHUNK_SIZE, 0);
        let read = loop {
            match self.reader.read(&mut self.buf[filled..]) {
                Ok(n) => break n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.buf.truncate(filled);
                    return Err(InputError::Read(err));
                }
            }
        };
        self.buf.truncate(filled + read);
        self.eof = read == 0;
        Ok(())
    }
}

/// Compile `pattern`, warning when it can never match.
pub fn compile(pattern: &str, limits: Limits) -> Regex {
    let regex = Regex::with_limits(pattern, limits);
    if let Err(err) = regex.validate() {
        log::warn!("pattern {:?} can never match: {}", pattern, err);
    }
    regex
}

/// Splits a `pattern|subject` line at its first `|`.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    line.split_once('|')
}

/// Evaluates every `pattern|subject` line, writing `True` or `False` for each.
///
/// Blank lines are skipped. A non-blank line without `|` stops the run with
/// an error; results for earlier lines have already been written by then.
pub fn evaluate<R: Read, W: Write>(lines: &mut Lines<R>, limits: Limits, out: &mut W) -> Result<(), InputError> {
    while let Some(line) = lines.next_line()? {
        if line.is_empty() {
            log::debug!("skipping blank line {}", lines.line_number());
            continue;
        }
        let (pattern, subject) = split_line(&line).ok_or_else(|| InputError::MissingSeparator {
            line: lines.line_number(),
            text: line.clone(),
        })?;
        let verdict = compile(pattern, limits).is_match(subject);
        writeln!(out, "{}", if verdict { "True" } else { "False" }).map_err(InputError::Write)?;
    }
    out.flush().map_err(InputError::Write)
}

/// Matches `regex` against the first line; no input at all is an empty subject.
pub fn match_first_line<R: Read>(regex: &Regex, lines: &mut Lines<R>) -> Result<bool, InputError> {
    let subject = lines.next_line()?.unwrap_or_default();
    Ok(regex.is_match(&subject))
}

//! Whitespace token scanner over a line-oriented reader.
//!
//! Reads behave like stream extraction: a successful read consumes one
//! token and leaves the rest of the line buffered for the next prompt.
//! After a rejected token the caller drops the remainder of the line
//! with [`Scanner::discard_line`], so bad input never lingers.

use std::io::{self, BufRead};
use tracing::debug;

/// Token reader used by the REPL for every prompt.
pub struct Scanner<R> {
    reader: R,
    line: String,
    raw: Vec<u8>,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            raw: Vec::new(),
            pos: 0,
        }
    }

    /// Next whitespace-delimited token, reading more lines as needed.
    ///
    /// Returns `Ok(None)` once the underlying reader is exhausted. Bytes
    /// that are not UTF-8 decode to U+FFFD, so they surface as a token
    /// that no prompt accepts rather than as an I/O error.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let end = trimmed
                    .find(char::is_whitespace)
                    .map_or(self.line.len(), |offset| start + offset);
                self.pos = end;
                return Ok(Some(self.line[start..end].to_string()));
            }

            self.line.clear();
            self.pos = 0;
            self.raw.clear();
            if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
                debug!("input exhausted");
                return Ok(None);
            }
            self.line.push_str(&String::from_utf8_lossy(&self.raw));
        }
    }

    /// Drop whatever is left of the current line.
    pub fn discard_line(&mut self) {
        if self.pos < self.line.len() {
            debug!(discarded = %self.line[self.pos..].trim_end(), "discarding rest of line");
        }
        self.line.clear();
        self.pos = 0;
    }
}

/// Parse a numeric literal token.
///
/// Accepts anything `f64` parses that begins like a number (digit, sign or
/// `.`) and stays finite. This rules out the `inf`/`nan` words as well as
/// literals that overflow, such as `1e400`.
pub fn parse_number(token: &str) -> Option<f64> {
    let body = token.strip_prefix(['+', '-']).unwrap_or(token);
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse a history selection token as a signed integer.
pub fn parse_selection(token: &str) -> Option<i64> {
    token.parse().ok()
}

//! Whitespace-delimited token input.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads whitespace-separated tokens from a buffered reader.
///
/// Tokens may share a line or be spread over several lines; blank lines are
/// skipped. Lines are pulled from the reader only when the buffered tokens
/// run out, so an interactive prompt is always written before the read that
/// answers it.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 decode to U+FFFD and only affect the token
    /// they sit in.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

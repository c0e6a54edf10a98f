//! Whitespace-token input for the interactive session.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use tracing::warn;

/// Reads whitespace-separated tokens, pulling more lines as needed.
///
/// Several answers can be typed on one line (`7` then `alice 50`, or all of
/// `7 alice 50`); leftover tokens are kept for the next read.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    return None;
                }
            }
        }
    }

    /// Next token parsed as `T`.
    ///
    /// The outer `None` means end of input; `Some(None)` means the token did
    /// not parse and was discarded.
    pub fn next_parsed<T: FromStr>(&mut self) -> Option<Option<T>> {
        self.next_token().map(|token| token.parse().ok())
    }

    /// Drop whatever is left of the current line.
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }
}

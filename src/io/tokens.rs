//! Token stream over a buffered reader.
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

use crate::error::ContainerError;

/// Failures while filling a container from text.
#[derive(Debug)]
pub enum TextIoError {
    Io(io::Error),
    /// Input ended after `read` of the `expected` tokens.
    UnexpectedEof { expected: usize, read: usize },
    /// Token at position `index` did not parse as the element type.
    Parse { index: usize, token: String },
    Container(ContainerError),
}

impl fmt::Display for TextIoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TextIoError::Io(_) => write!(f, "failed to read input"),
            TextIoError::UnexpectedEof { expected, read } => write!(
                f,
                "input ended after {} of {} expected values",
                read, expected
            ),
            TextIoError::Parse { index, token } => {
                write!(f, "invalid value '{}' at position {}", token, index)
            }
            TextIoError::Container(_) => write!(f, "invalid container dimensions"),
        }
    }
}

impl Error for TextIoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TextIoError::Io(err) => Some(err),
            TextIoError::Container(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TextIoError {
    fn from(value: io::Error) -> Self {
        TextIoError::Io(value)
    }
}

impl From<ContainerError> for TextIoError {
    fn from(value: ContainerError) -> Self {
        TextIoError::Container(value)
    }
}

/// Splits a reader into whitespace-separated tokens.
///
/// Tokens left over on a partially consumed line are kept for the next
/// call, so several containers can be read back to back from one stream.
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

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>, TextIoError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Parses the next token as `T`. `index` and `expected` only feed the
    /// error report.
    pub fn parse_next<T: FromStr>(&mut self, index: usize, expected: usize) -> Result<T, TextIoError> {
        let token = self
            .next_token()?
            .ok_or(TextIoError::UnexpectedEof {
                expected,
                read: index,
            })?;
        token
            .parse::<T>()
            .map_err(|_| TextIoError::Parse { index, token })
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<'a> TokenReader<&'a [u8]> {
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut tokens = TokenReader::from_text("1 2\n\n  3\t4\n");
        let mut seen = Vec::new();
        while let Some(token) = tokens.next_token().unwrap() {
            seen.push(token);
        }
        assert_eq!(seen, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn parse_error_reports_token() {
        let mut tokens = TokenReader::from_text("7 x");
        assert_eq!(tokens.parse_next::<i32>(0, 2).unwrap(), 7);
        match tokens.parse_next::<i32>(1, 2) {
            Err(TextIoError::Parse { index, token }) => {
                assert_eq!(index, 1);
                assert_eq!(token, "x");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn eof_reports_progress() {
        let mut tokens = TokenReader::from_text("5");
        let _: i32 = tokens.parse_next(0, 3).unwrap();
        match tokens.parse_next::<i32>(1, 3) {
            Err(TextIoError::UnexpectedEof { expected, read }) => {
                assert_eq!((expected, read), (3, 1));
            }
            other => panic!("expected eof, got {:?}", other),
        }
    }

    #[test]
    fn wrapped_errors_are_reported_once() {
        let err = TextIoError::from(ContainerError::SizeOutOfRange {
            requested: 0,
            max: 10,
        });
        assert_eq!(err.to_string(), "invalid container dimensions");
        let source = err.source().map(|inner| inner.to_string());
        assert_eq!(
            source.as_deref(),
            Some("size 0 is out of range, expected a value in 1..=10")
        );

        let io_err = TextIoError::from(io::Error::new(io::ErrorKind::Other, "disk gone"));
        assert_eq!(io_err.to_string(), "failed to read input");
        assert_eq!(io_err.source().map(|inner| inner.to_string()).as_deref(), Some("disk gone"));
    }
}

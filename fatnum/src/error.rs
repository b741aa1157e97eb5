//! Errors from BigInt construction, conversion and division.

use thiserror::Error;

/// Why a piece of text was rejected by the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input was the empty string.
    Empty,
    /// A sign was given with no digits after it.
    MissingDigits,
    /// A character that is not a decimal digit (byte offset into the input).
    InvalidDigit { ch: char, index: usize },
    /// A chunk whose length differs from the chunk width.
    ChunkLength {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A character inside a chunk that is not a hexadecimal digit.
    InvalidHexDigit { ch: char, index: usize },
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::Empty => write!(f, "empty input"),
            ParseErrorKind::MissingDigits => write!(f, "sign without digits"),
            ParseErrorKind::InvalidDigit { ch, index } => {
                write!(f, "invalid decimal digit {ch:?} at offset {index}")
            }
            ParseErrorKind::ChunkLength {
                index,
                expected,
                found,
            } => write!(
                f,
                "chunk {index} has {found} hex digits, expected {expected}"
            ),
            ParseErrorKind::InvalidHexDigit { ch, index } => {
                write!(f, "invalid hex digit {ch:?} in chunk {index}")
            }
        }
    }
}

/// Errors from BigInt operations.
///
/// Arithmetic between two well-formed values only fails on division by zero;
/// everything else here comes from parsing or narrowing conversions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        input: String,
        reason: ParseErrorKind,
    },
    #[error("BigInt division by zero")]
    DivisionByZero,
    #[error("BigInt value does not fit in {target}")]
    Overflow { target: &'static str },
    #[error("chunk width must be at least 1, got {0}")]
    InvalidChunkWidth(usize),
}

impl BigIntError {
    pub(crate) fn parse(input: &str, reason: ParseErrorKind) -> Self {
        BigIntError::Parse {
            input: input.to_string(),
            reason,
        }
    }
}

pub type BigIntResult<T> = Result<T, BigIntError>;

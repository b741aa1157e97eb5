//! Chunk width and the chunked hexadecimal view of a magnitude.

use std::fmt;

use crate::error::{BigIntError, BigIntResult, ParseErrorKind};
use crate::magnitude::{self, Chunk, WORKING_HEX_DIGITS};

/// Number of hexadecimal digits per chunk. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkWidth(usize);

impl ChunkWidth {
    /// 8 hex digits, i.e. 32 bits of magnitude per chunk.
    pub const DEFAULT: ChunkWidth = ChunkWidth(WORKING_HEX_DIGITS);

    /// Validate a chunk width.
    ///
    /// ```
    /// use fatnum::{BigIntError, ChunkWidth};
    ///
    /// assert_eq!(ChunkWidth::new(4).unwrap().get(), 4);
    /// assert_eq!(ChunkWidth::new(0), Err(BigIntError::InvalidChunkWidth(0)));
    /// ```
    pub fn new(width: usize) -> BigIntResult<Self> {
        if width == 0 {
            return Err(BigIntError::InvalidChunkWidth(width));
        }
        Ok(ChunkWidth(width))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Pick a chunk width for a decimal numeral of `decimal_len` digits.
    ///
    /// Short inputs keep the default; long inputs get wider chunks (16 hex
    /// digits at most) so the chunk count stays reasonable.
    pub fn suggested_for(decimal_len: usize) -> Self {
        let hex_len = decimal_len * 4 / 10;
        if hex_len <= Self::DEFAULT.0 {
            return Self::DEFAULT;
        }
        let width = (hex_len / 1000).clamp(Self::DEFAULT.0, 16);
        ChunkWidth(width.next_power_of_two())
    }
}

impl Default for ChunkWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for ChunkWidth {
    type Error = BigIntError;

    fn try_from(width: usize) -> BigIntResult<Self> {
        ChunkWidth::new(width)
    }
}

impl fmt::Display for ChunkWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Chunk view
// ============================================================================

/// Split minimal hex text into zero-padded groups of `width` digits,
/// most-significant first.
pub(crate) fn split_hex(hex: &str, width: ChunkWidth) -> Vec<String> {
    let w = width.get();
    let pad = (w - hex.len() % w) % w;
    let mut padded = String::with_capacity(hex.len() + pad);
    padded.extend(std::iter::repeat('0').take(pad));
    padded.push_str(hex);
    padded
        .as_bytes()
        .chunks(w)
        .map(|group| String::from_utf8_lossy(group).into_owned())
        .collect()
}

/// Parse a most-significant-first chunk sequence into a working magnitude.
pub(crate) fn parse_chunks<S: AsRef<str>>(
    chunks: &[S],
    width: ChunkWidth,
) -> BigIntResult<Vec<Chunk>> {
    let joined: String = chunks.iter().map(|c| c.as_ref()).collect();
    if chunks.is_empty() {
        return Err(BigIntError::parse(&joined, ParseErrorKind::Empty));
    }
    let mut nibbles = Vec::with_capacity(chunks.len() * width.get());
    for (index, chunk) in chunks.iter().enumerate() {
        let chunk = chunk.as_ref();
        let found = chunk.chars().count();
        if found != width.get() {
            return Err(BigIntError::parse(
                &joined,
                ParseErrorKind::ChunkLength {
                    index,
                    expected: width.get(),
                    found,
                },
            ));
        }
        for ch in chunk.chars() {
            let nibble = ch.to_digit(16).ok_or_else(|| {
                BigIntError::parse(&joined, ParseErrorKind::InvalidHexDigit { ch, index })
            })?;
            nibbles.push(nibble as u8);
        }
    }
    Ok(from_nibbles(&nibbles))
}

/// Pack big-endian hex nibbles into little-endian working chunks.
fn from_nibbles(nibbles: &[u8]) -> Vec<Chunk> {
    let mut mag: Vec<Chunk> = nibbles
        .rchunks(WORKING_HEX_DIGITS)
        .map(|group| group.iter().fold(0, |acc, &n| (acc << 4) | n as Chunk))
        .collect();
    magnitude::normalize(&mut mag);
    mag
}

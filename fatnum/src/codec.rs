//! Decimal and hexadecimal text codecs.
//!
//! Decimal input is folded into the magnitude nine digits at a time
//! (`mag = mag * 10^k + slice`), and decimal output peels off nine digits at
//! a time by dividing by 10^9. Neither direction passes through a fixed-width
//! machine integer, so there is no magnitude ceiling.

use crate::chunk::{self, ChunkWidth};
use crate::error::{BigIntError, BigIntResult, ParseErrorKind};
use crate::magnitude::{self, Chunk};

/// Largest power of ten that fits in a working chunk.
const DECIMAL_GROUP: Chunk = 1_000_000_000;
const DECIMAL_GROUP_DIGITS: usize = 9;

// ============================================================================
// Magnitude <-> text
// ============================================================================

/// Check that `digits` is a non-empty run of ASCII decimal digits.
///
/// `input` and `offset` locate `digits` inside the caller's original text so
/// errors point at the right byte.
pub(crate) fn validate_decimal(input: &str, digits: &str, offset: usize) -> BigIntResult<()> {
    if digits.is_empty() {
        let reason = if input.is_empty() {
            ParseErrorKind::Empty
        } else {
            ParseErrorKind::MissingDigits
        };
        return Err(BigIntError::parse(input, reason));
    }
    if let Some((index, ch)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(BigIntError::parse(
            input,
            ParseErrorKind::InvalidDigit {
                ch,
                index: offset + index,
            },
        ));
    }
    Ok(())
}

/// Fold validated ASCII decimal digits into a magnitude.
pub(crate) fn decimal_to_magnitude(digits: &str) -> Vec<Chunk> {
    let bytes = digits.as_bytes();
    let mut mag = vec![0];
    let head = match bytes.len() % DECIMAL_GROUP_DIGITS {
        0 => DECIMAL_GROUP_DIGITS.min(bytes.len()),
        n => n,
    };
    let (first, rest) = bytes.split_at(head);
    for group in std::iter::once(first).chain(rest.chunks(DECIMAL_GROUP_DIGITS)) {
        let value = group
            .iter()
            .fold(0 as Chunk, |acc, &b| acc * 10 + (b - b'0') as Chunk);
        let scale = (10 as Chunk).pow(group.len() as u32);
        magnitude::mul_add_small(&mut mag, scale, value);
    }
    mag
}

pub(crate) fn magnitude_to_decimal(mag: &[Chunk]) -> String {
    if magnitude::is_zero(mag) {
        return "0".to_string();
    }
    let mut groups = Vec::with_capacity(mag.len() * 10 / 9 + 1);
    let mut cur = mag.to_vec();
    while !magnitude::is_zero(&cur) {
        let (q, r) = magnitude::divrem_small(&cur, DECIMAL_GROUP);
        groups.push(r);
        cur = q;
    }
    let mut out = String::with_capacity(groups.len() * DECIMAL_GROUP_DIGITS);
    let mut iter = groups.iter().rev();
    if let Some(top) = iter.next() {
        out.push_str(&top.to_string());
    }
    for group in iter {
        out.push_str(&format!("{:0width$}", group, width = DECIMAL_GROUP_DIGITS));
    }
    out
}

/// Minimal lowercase hex, `"0"` for zero.
pub(crate) fn magnitude_to_hex(mag: &[Chunk]) -> String {
    if magnitude::is_zero(mag) {
        return "0".to_string();
    }
    let mut hex = String::with_capacity(mag.len() * magnitude::WORKING_HEX_DIGITS);
    let mut started = false;
    for &c in mag.iter().rev() {
        if !started {
            if c != 0 {
                hex.push_str(&format!("{:x}", c));
                started = true;
            }
        } else {
            hex.push_str(&format!("{:08x}", c));
        }
    }
    hex
}

// ============================================================================
// Text <-> chunk sequences
// ============================================================================

/// Convert an unsigned decimal numeral into hex chunks of `width` digits,
/// most-significant first.
///
/// ```
/// use fatnum::codec::decimal_to_chunks;
/// use fatnum::ChunkWidth;
///
/// let chunks = decimal_to_chunks("255", ChunkWidth::new(2).unwrap()).unwrap();
/// assert_eq!(chunks, vec!["ff"]);
/// ```
pub fn decimal_to_chunks(text: &str, width: ChunkWidth) -> BigIntResult<Vec<String>> {
    validate_decimal(text, text, 0)?;
    let mag = decimal_to_magnitude(text);
    Ok(chunk::split_hex(&magnitude_to_hex(&mag), width))
}

/// Render a chunk sequence as decimal text without leading zeros.
///
/// The chunk width is taken from the first chunk; all chunks must share it.
pub fn chunks_to_decimal<S: AsRef<str>>(chunks: &[S]) -> BigIntResult<String> {
    let width = chunks.first().map_or(1, |c| c.as_ref().chars().count().max(1));
    let mag = chunk::parse_chunks(chunks, ChunkWidth::new(width)?)?;
    Ok(magnitude_to_decimal(&mag))
}

/// Concatenate chunks and strip non-significant leading zeros.
///
/// Chunks are validated the same way as [`chunks_to_decimal`].
pub fn chunks_to_hex<S: AsRef<str>>(chunks: &[S]) -> BigIntResult<String> {
    let width = chunks.first().map_or(1, |c| c.as_ref().chars().count().max(1));
    let mag = chunk::parse_chunks(chunks, ChunkWidth::new(width)?)?;
    Ok(magnitude_to_hex(&mag))
}

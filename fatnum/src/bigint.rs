//! Arbitrary-precision signed integers stored as fixed-width hex chunks.
//!
//! Values are immutable: every operation returns a new normalized `BigInt`.
//! Arithmetic always runs at the 8-hex-digit working width; the chunk width a
//! value carries only shapes its chunked view. Binary operations take the
//! chunk width of the left operand.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::chunk::{self, ChunkWidth};
use crate::codec;
use crate::error::{BigIntError, BigIntResult};
use crate::magnitude::{self, Chunk};

/// Sign of a BigInt. Zero is always `Positive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    fn product(self, other: Sign) -> Self {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Arbitrary-precision signed integer.
///
/// The magnitude is kept in little-endian working chunks; [`BigInt::chunks`]
/// renders it most-significant first at the value's own chunk width.
/// Equality, ordering and hashing look at the numeric value only, not at the
/// chunk width.
#[derive(Clone)]
pub struct BigInt {
    sign: Sign,
    magnitude: Vec<Chunk>,
    chunk_width: ChunkWidth,
}

// ============================================================================
// Construction
// ============================================================================

impl BigInt {
    /// Build a value, restoring all invariants.
    fn from_parts(sign: Sign, mut mag: Vec<Chunk>, chunk_width: ChunkWidth) -> Self {
        magnitude::normalize(&mut mag);
        let sign = if magnitude::is_zero(&mag) {
            Sign::Positive
        } else {
            sign
        };
        Self {
            sign,
            magnitude: mag,
            chunk_width,
        }
    }

    /// A result of `self op other`: keeps `self`'s chunk width.
    fn derive(&self, sign: Sign, mag: Vec<Chunk>) -> Self {
        Self::from_parts(sign, mag, self.chunk_width)
    }

    /// Zero at the default chunk width.
    ///
    /// ```
    /// use fatnum::BigInt;
    ///
    /// let z = BigInt::zero();
    /// assert!(z.is_zero());
    /// assert_eq!(z.chunks(), vec!["00000000"]);
    /// ```
    pub fn zero() -> Self {
        Self::from_parts(Sign::Positive, vec![0], ChunkWidth::DEFAULT)
    }

    pub fn one() -> Self {
        Self::from_parts(Sign::Positive, vec![1], ChunkWidth::DEFAULT)
    }

    /// Parse decimal text at the default chunk width.
    ///
    /// Accepts an optional leading `-` or `+` followed by one or more ASCII
    /// digits. Whitespace is not trimmed.
    ///
    /// ```
    /// use fatnum::BigInt;
    ///
    /// let b = BigInt::parse("-255").unwrap();
    /// assert_eq!(b.to_decimal_string(), "-255");
    /// assert_eq!(b.to_hex_string(), "ff");
    /// assert!(BigInt::parse("+").is_err());
    /// ```
    pub fn parse(text: &str) -> BigIntResult<Self> {
        Self::parse_with_width(text, ChunkWidth::DEFAULT)
    }

    /// Parse decimal text with an explicit chunk width.
    pub fn parse_with_width(text: &str, chunk_width: ChunkWidth) -> BigIntResult<Self> {
        let (sign, digits) = match text.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &text[1..]),
            Some(b'+') => (Sign::Positive, &text[1..]),
            _ => (Sign::Positive, text),
        };
        codec::validate_decimal(text, digits, text.len() - digits.len())?;
        Ok(Self::from_parts(
            sign,
            codec::decimal_to_magnitude(digits),
            chunk_width,
        ))
    }

    /// Parse decimal text, choosing the chunk width from the input length.
    pub fn parse_auto(text: &str) -> BigIntResult<Self> {
        let digits = text.trim_start_matches(['-', '+']).len();
        Self::parse_with_width(text, ChunkWidth::suggested_for(digits))
    }

    /// Rebuild a value from its chunk sequence (most-significant first).
    ///
    /// ```
    /// use fatnum::{BigInt, ChunkWidth, Sign};
    ///
    /// let w = ChunkWidth::new(2).unwrap();
    /// let b = BigInt::from_chunks(Sign::Negative, &["01", "00"], w).unwrap();
    /// assert_eq!(b.to_decimal_string(), "-256");
    /// ```
    pub fn from_chunks<S: AsRef<str>>(
        sign: Sign,
        chunks: &[S],
        chunk_width: ChunkWidth,
    ) -> BigIntResult<Self> {
        let mag = chunk::parse_chunks(chunks, chunk_width)?;
        Ok(Self::from_parts(sign, mag, chunk_width))
    }

    pub fn from_i128_with_width(value: i128, chunk_width: ChunkWidth) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::from_parts(sign, magnitude::from_u128(value.unsigned_abs()), chunk_width)
    }

    pub fn from_u128_with_width(value: u128, chunk_width: ChunkWidth) -> Self {
        Self::from_parts(Sign::Positive, magnitude::from_u128(value), chunk_width)
    }

    /// The same value viewed at another chunk width.
    pub fn rechunk(&self, chunk_width: ChunkWidth) -> Self {
        log::trace!("rechunk {} -> {}", self.chunk_width, chunk_width);
        Self {
            chunk_width,
            ..self.clone()
        }
    }

    /// Like [`BigInt::rechunk`], validating a raw width.
    pub fn with_chunk_width(&self, width: usize) -> BigIntResult<Self> {
        Ok(self.rechunk(ChunkWidth::new(width)?))
    }

    pub(crate) fn magnitude(&self) -> &[Chunk] {
        &self.magnitude
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl BigInt {
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn chunk_width(&self) -> ChunkWidth {
        self.chunk_width
    }

    /// The magnitude as zero-padded hex groups, most-significant first.
    ///
    /// Never empty; zero is a single all-zero chunk.
    ///
    /// ```
    /// use fatnum::{BigInt, ChunkWidth};
    ///
    /// let w = ChunkWidth::new(4).unwrap();
    /// let b = BigInt::parse_with_width("74565", w).unwrap(); // 0x12345
    /// assert_eq!(b.chunks(), vec!["0001", "2345"]);
    /// ```
    pub fn chunks(&self) -> Vec<String> {
        chunk::split_hex(&self.to_hex_string(), self.chunk_width)
    }

    pub fn num_chunks(&self) -> usize {
        let hex_len = self.to_hex_string().len();
        hex_len.div_ceil(self.chunk_width.get())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        magnitude::is_zero(&self.magnitude)
    }

    /// Strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Number of bits in the magnitude (0 for zero).
    pub fn bit_len(&self) -> u64 {
        magnitude::bit_len(&self.magnitude)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl BigInt {
    pub fn abs(&self) -> Self {
        self.derive(Sign::Positive, self.magnitude.clone())
    }

    pub fn negate(&self) -> Self {
        self.derive(self.sign.flip(), self.magnitude.clone())
    }

    /// Compare absolute values.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        magnitude::cmp(&self.magnitude, &other.magnitude)
    }

    fn add_signed(&self, other: &Self, other_sign: Sign) -> Self {
        if self.sign == other_sign {
            return self.derive(
                self.sign,
                magnitude::add(&self.magnitude, &other.magnitude),
            );
        }
        match self.cmp_magnitude(other) {
            Ordering::Less => self.derive(
                other_sign,
                magnitude::sub(&other.magnitude, &self.magnitude),
            ),
            _ => self.derive(
                self.sign,
                magnitude::sub(&self.magnitude, &other.magnitude),
            ),
        }
    }

    fn mul_signed(&self, other: &Self) -> Self {
        self.derive(
            self.sign.product(other.sign),
            magnitude::mul(&self.magnitude, &other.magnitude),
        )
    }

    /// Multiply by `16^(chunk_width * n)`: append `n` zero chunks.
    ///
    /// Fails with [`BigIntError::Overflow`] when the shift does not fit in a
    /// `u64` bit count.
    pub fn shl_chunks(&self, n: usize) -> BigIntResult<Self> {
        let bits = (self.chunk_width.get() as u64)
            .checked_mul(n as u64)
            .and_then(|digits| digits.checked_mul(4))
            .ok_or(BigIntError::Overflow {
                target: "shift amount",
            })?;
        Ok(self.derive(self.sign, magnitude::shl_bits(&self.magnitude, bits)))
    }

    /// Truncating division: returns `(quotient, remainder)`.
    ///
    /// `self = quotient * divisor + remainder`, `|remainder| < |divisor|`, and
    /// the remainder takes the sign of `self`.
    ///
    /// ```
    /// use fatnum::{BigInt, BigIntError};
    ///
    /// let a = BigInt::from(-17);
    /// let (q, r) = a.div_rem(&BigInt::from(5)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-2)));
    ///
    /// assert_eq!(a.div_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> BigIntResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let (q, r) = magnitude::divrem(&self.magnitude, &divisor.magnitude);
        log::debug!(
            "div_rem: {} / {} chunks -> quotient {} chunks",
            self.magnitude.len(),
            divisor.magnitude.len(),
            q.len()
        );
        Ok((
            self.derive(self.sign.product(divisor.sign), q),
            self.derive(self.sign, r),
        ))
    }

    /// Truncating quotient. Errors on division by zero.
    pub fn quotient(&self, divisor: &Self) -> BigIntResult<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder with the sign of `self`. Errors on division by zero.
    pub fn remainder(&self, divisor: &Self) -> BigIntResult<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl BigInt {
    /// Decimal text: `-` only for non-zero negatives, no leading zeros.
    pub fn to_decimal_string(&self) -> String {
        let digits = codec::magnitude_to_decimal(&self.magnitude);
        if self.is_negative() {
            format!("-{digits}")
        } else {
            digits
        }
    }

    /// Minimal lowercase hex of the magnitude, without sign or prefix.
    ///
    /// ```
    /// use fatnum::BigInt;
    ///
    /// assert_eq!(BigInt::from(-255).to_hex_string(), "ff");
    /// assert_eq!(BigInt::zero().to_hex_string(), "0");
    /// ```
    pub fn to_hex_string(&self) -> String {
        codec::magnitude_to_hex(&self.magnitude)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.cmp_magnitude(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.magnitude.hash(state);
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.cmp_magnitude(other),
            (Sign::Negative, Sign::Negative) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> BigIntResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = codec::magnitude_to_decimal(&self.magnitude);
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.to_hex_string())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "BigInt({sign}0x{})", self.to_hex_string())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

/// Implement a binary operator for every owned/borrowed operand pair.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident => |$a:ident, $b:ident| $body:expr) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = (&*self).$method(rhs);
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign => |a, b| a.add_signed(b, b.sign));
forward_binop!(impl Sub, sub, SubAssign, sub_assign => |a, b| a.add_signed(b, b.sign.flip()));
forward_binop!(impl Mul, mul, MulAssign, mul_assign => |a, b| a.mul_signed(b));

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn big(s: &str) -> BigInt {
        BigInt::parse(s).unwrap()
    }

    fn width(n: usize) -> ChunkWidth {
        ChunkWidth::new(n).unwrap()
    }

    // --- Construction ---

    #[test]
    fn test_zero_is_positive_single_chunk() {
        let z = BigInt::zero();
        assert_eq!(z.sign(), Sign::Positive);
        assert_eq!(z.chunks(), vec!["00000000"]);
        assert_eq!(z.num_chunks(), 1);
    }

    #[test]
    fn test_negative_zero_normalizes() {
        for s in ["-0", "-000", "+0"] {
            let z = big(s);
            assert_eq!(z.sign(), Sign::Positive);
            assert!(z.is_zero());
            assert_eq!(z.to_decimal_string(), "0");
        }
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!(big("+42"), big("42"));
        assert_eq!(big("-42").sign(), Sign::Negative);
        assert_eq!(big("-42").to_decimal_string(), "-42");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            BigInt::parse(""),
            Err(BigIntError::parse("", ParseErrorKind::Empty))
        );
        assert_eq!(
            BigInt::parse("-"),
            Err(BigIntError::parse("-", ParseErrorKind::MissingDigits))
        );
        assert_eq!(
            BigInt::parse("-12x"),
            Err(BigIntError::parse(
                "-12x",
                ParseErrorKind::InvalidDigit { ch: 'x', index: 3 }
            ))
        );
        // No whitespace trimming, no double sign
        assert!(BigInt::parse(" 1").is_err());
        assert!(BigInt::parse("1 ").is_err());
        assert!(BigInt::parse("--1").is_err());
    }

    #[test]
    fn test_parse_with_width_255() {
        let b = BigInt::parse_with_width("255", width(2)).unwrap();
        assert_eq!(b.chunks(), vec!["ff"]);
        assert_eq!(b.to_hex_string(), "ff");
        assert_eq!(b.to_decimal_string(), "255");
    }

    #[test]
    fn test_parse_auto_width() {
        assert_eq!(BigInt::parse_auto("-12").unwrap().chunk_width(), ChunkWidth::DEFAULT);
        let long = "7".repeat(25_000);
        let b = BigInt::parse_auto(&long).unwrap();
        assert_eq!(b.chunk_width().get(), 16);
        assert_eq!(b.to_decimal_string(), long);
    }

    #[test]
    fn test_from_chunks_roundtrip() {
        let b = BigInt::parse_with_width("-123456789012345678901234567890", width(5)).unwrap();
        let rebuilt = BigInt::from_chunks(b.sign(), &b.chunks(), b.chunk_width()).unwrap();
        assert_eq!(rebuilt, b);
        assert_eq!(rebuilt.chunks(), b.chunks());
    }

    #[test]
    fn test_from_chunks_negative_zero() {
        let z = BigInt::from_chunks(Sign::Negative, &["000", "000"], width(3)).unwrap();
        assert_eq!(z.sign(), Sign::Positive);
        assert_eq!(z.chunks(), vec!["000"]);
    }

    #[test]
    fn test_rechunk_keeps_value() {
        let b = big("1000000000000"); // 0xe8d4a51000
        let r = b.rechunk(width(3));
        assert_eq!(r, b);
        assert_eq!(r.chunk_width().get(), 3);
        assert_eq!(r.chunks(), vec!["00e", "8d4", "a51", "000"]);
        assert_eq!(r.num_chunks(), 4);
    }

    #[test]
    fn test_with_chunk_width_rejects_zero() {
        assert_eq!(
            big("5").with_chunk_width(0),
            Err(BigIntError::InvalidChunkWidth(0))
        );
    }

    // --- Comparison ---

    #[test]
    fn test_ordering_across_signs() {
        let mut values = vec![big("3"), big("-10"), big("0"), big("-2"), big("10000000000")];
        values.sort();
        let sorted: Vec<String> = values.iter().map(|v| v.to_decimal_string()).collect();
        assert_eq!(sorted, vec!["-10", "-2", "0", "3", "10000000000"]);
    }

    #[test]
    fn test_equality_ignores_chunk_width() {
        let a = BigInt::parse_with_width("4096", width(1)).unwrap();
        let b = BigInt::parse_with_width("4096", width(7)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.chunks(), b.chunks());
    }

    #[test]
    fn test_cmp_magnitude() {
        assert_eq!(big("-9").cmp_magnitude(&big("5")), Ordering::Greater);
        assert_eq!(big("-9").cmp(&big("5")), Ordering::Less);
    }

    // --- Add / Sub ---

    #[test]
    fn test_add_carry_chain() {
        let r = big("999999999999999999") + big("1");
        assert_eq!(r.to_decimal_string(), "1000000000000000000");
    }

    #[test]
    fn test_add_mixed_signs() {
        assert_eq!(big("5") + big("-7"), big("-2"));
        assert_eq!(big("-5") + big("7"), big("2"));
        assert_eq!(big("-5") + big("5"), BigInt::zero());
        assert_eq!((big("-5") + big("5")).sign(), Sign::Positive);
    }

    #[test]
    fn test_sub() {
        assert_eq!((big("5") - big("7")).to_decimal_string(), "-2");
        assert_eq!(big("-5") - big("-7"), big("2"));
        assert_eq!(big("-5") - big("7"), big("-12"));
    }

    #[test]
    fn test_assign_ops() {
        let mut x = big("10");
        x += big("5");
        x -= &big("20");
        x *= big("-3");
        assert_eq!(x, big("15"));
    }

    #[test]
    fn test_result_takes_left_chunk_width() {
        let a = BigInt::parse_with_width("300", width(2)).unwrap();
        let b = BigInt::parse_with_width("1", width(5)).unwrap();
        let sum = &a + &b;
        assert_eq!(sum.chunk_width().get(), 2);
        assert_eq!(sum.chunks(), vec!["01", "2d"]);
        assert_eq!((&b + &a).chunk_width().get(), 5);
    }

    #[test]
    fn test_abs_negate_signum() {
        let n = big("-12");
        assert_eq!(n.abs(), big("12"));
        assert_eq!(n.negate(), big("12"));
        assert_eq!(-&n, big("12"));
        assert_eq!(n.signum(), -1);
        assert_eq!(BigInt::zero().signum(), 0);
        assert_eq!(BigInt::zero().negate().sign(), Sign::Positive);
        assert!(big("1").is_positive());
        assert!(!BigInt::zero().is_positive());
    }

    // --- Mul ---

    #[test]
    fn test_mul() {
        let r = big("123456789") * big("987654321");
        assert_eq!(r.to_decimal_string(), "121932631112635269");
        assert_eq!(big("-3") * big("4"), big("-12"));
        assert_eq!(big("-3") * big("-4"), big("12"));
    }

    #[test]
    fn test_mul_zero_is_positive() {
        let r = big("-123") * BigInt::zero();
        assert!(r.is_zero());
        assert_eq!(r.sign(), Sign::Positive);
    }

    #[test]
    fn test_shl_chunks() {
        let b = BigInt::parse_with_width("255", width(2)).unwrap();
        let shifted = b.shl_chunks(2).unwrap();
        assert_eq!(shifted.chunks(), vec!["ff", "00", "00"]);
        assert_eq!(shifted, big("16711680"));
        assert_eq!(BigInt::zero().shl_chunks(3).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_shl_chunks_huge_width_overflows() {
        let b = BigInt::one().rechunk(width(1 << 62));
        assert_eq!(
            b.shl_chunks(4),
            Err(BigIntError::Overflow {
                target: "shift amount"
            })
        );
        assert!(BigInt::one().shl_chunks(usize::MAX).is_err());
    }

    #[test]
    fn test_bit_len() {
        assert_eq!(BigInt::zero().bit_len(), 0);
        assert_eq!(big("-255").bit_len(), 8);
        assert_eq!(big("4294967296").bit_len(), 33);
    }

    // --- Div ---

    #[test]
    fn test_div_rem_basic() {
        let (q, r) = big("17").div_rem(&big("5")).unwrap();
        assert_eq!(q.to_decimal_string(), "3");
        assert_eq!(r.to_decimal_string(), "2");
    }

    #[test]
    fn test_div_rem_truncates_toward_zero() {
        let cases = [(17, 5), (-17, 5), (17, -5), (-17, -5), (4, 7), (-4, 7)];
        for (a, b) in cases {
            let (q, r) = BigInt::from(a).div_rem(&BigInt::from(b)).unwrap();
            assert_eq!(q, BigInt::from(a / b), "{a} / {b}");
            assert_eq!(r, BigInt::from(a % b), "{a} % {b}");
        }
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            big("7").div_rem(&big("0")),
            Err(BigIntError::DivisionByZero)
        );
        assert_eq!(big("7").quotient(&BigInt::zero()), Err(BigIntError::DivisionByZero));
        assert_eq!(big("7").remainder(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_div_by_one() {
        let a = big("-98765432109876543210");
        assert_eq!(a.quotient(&big("1")).unwrap(), a);
        assert_eq!(a.quotient(&big("-1")).unwrap(), a.negate());
        assert!(a.remainder(&big("-1")).unwrap().is_zero());
    }

    #[test]
    fn test_div_smaller_dividend() {
        let (q, r) = big("-5").div_rem(&big("100000000000000000000")).unwrap();
        assert!(q.is_zero());
        assert_eq!(q.sign(), Sign::Positive);
        assert_eq!(r, big("-5"));
    }

    #[test]
    fn test_div_multi_chunk() {
        let a = big("121932631112635269000000000000000000017");
        let b = big("987654321000000000000");
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.to_decimal_string(), "123456789000000000");
        assert_eq!(r.to_decimal_string(), "17");
    }

    // --- Rendering ---

    #[test]
    fn test_display_and_hex() {
        let n = big("-255");
        assert_eq!(format!("{n}"), "-255");
        assert_eq!(format!("{n:x}"), "-ff");
        assert_eq!(format!("{:#x}", big("255")), "0xff");
        assert_eq!(format!("{:>6}", big("42")), "    42");
        assert_eq!(format!("{n:?}"), "BigInt(-0xff)");
    }

    #[test]
    fn test_from_str() {
        let b: BigInt = "-340282366920938463463374607431768211457".parse().unwrap();
        assert_eq!(b.to_decimal_string(), "-340282366920938463463374607431768211457");
        assert!("abc".parse::<BigInt>().is_err());
    }

    #[test]
    fn test_sum_and_product() {
        let xs = [big("1"), big("2"), big("3"), big("4")];
        assert_eq!(xs.iter().sum::<BigInt>(), big("10"));
        assert_eq!(xs.iter().product::<BigInt>(), big("24"));
        assert_eq!(Vec::<BigInt>::new().into_iter().product::<BigInt>(), big("1"));
    }
}

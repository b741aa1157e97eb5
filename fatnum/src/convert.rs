//! Conversions between BigInt and primitive integers.
//!
//! Widening into a BigInt never fails. Narrowing back fails with
//! `BigIntError::Overflow` instead of truncating.

use crate::bigint::{BigInt, Sign};
use crate::chunk::ChunkWidth;
use crate::error::{BigIntError, BigIntResult};
use crate::magnitude;

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_i128_with_width(value as i128, ChunkWidth::DEFAULT)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_u128_with_width(value as u128, ChunkWidth::DEFAULT)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl BigInt {
    /// The value as an `i128`, if it fits.
    fn to_i128_checked(&self) -> Option<i128> {
        let mag = magnitude::to_u128(self.magnitude())?;
        match self.sign() {
            Sign::Positive => i128::try_from(mag).ok(),
            Sign::Negative if mag == i128::MIN.unsigned_abs() => Some(i128::MIN),
            Sign::Negative => i128::try_from(mag).ok().map(|v| -v),
        }
    }

    /// The value as a `u128`, if it fits.
    fn to_u128_checked(&self) -> Option<u128> {
        if self.is_negative() {
            return None;
        }
        magnitude::to_u128(self.magnitude())
    }

    /// ```
    /// use fatnum::{BigInt, BigIntError};
    ///
    /// assert_eq!(BigInt::from(-7).to_i64(), Ok(-7));
    /// let big: BigInt = "9223372036854775808".parse().unwrap();
    /// assert_eq!(big.to_i64(), Err(BigIntError::Overflow { target: "i64" }));
    /// ```
    pub fn to_i64(&self) -> BigIntResult<i64> {
        i64::try_from(self)
    }

    pub fn to_u64(&self) -> BigIntResult<u64> {
        u64::try_from(self)
    }
}

macro_rules! impl_try_into_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: &BigInt) -> BigIntResult<$t> {
                value
                    .to_i128_checked()
                    .and_then(|v| <$t>::try_from(v).ok())
                    .ok_or(BigIntError::Overflow { target: stringify!($t) })
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: BigInt) -> BigIntResult<$t> {
                <$t>::try_from(&value)
            }
        }
    )*};
}

macro_rules! impl_try_into_unsigned {
    ($($t:ty),*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: &BigInt) -> BigIntResult<$t> {
                value
                    .to_u128_checked()
                    .and_then(|v| <$t>::try_from(v).ok())
                    .ok_or(BigIntError::Overflow { target: stringify!($t) })
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: BigInt) -> BigIntResult<$t> {
                <$t>::try_from(&value)
            }
        }
    )*};
}

impl_try_into_signed!(i8, i16, i32, i64, i128, isize);
impl_try_into_unsigned!(u8, u16, u32, u64, u128, usize);

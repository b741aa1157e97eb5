//! Arbitrary-precision signed integers stored as fixed-width hexadecimal chunks.

pub mod bigint;
pub mod chunk;
pub mod codec;
pub mod error;

mod convert;
mod magnitude;
mod serde_impl;

pub use bigint::{BigInt, Sign};
pub use chunk::ChunkWidth;
pub use error::{BigIntError, BigIntResult, ParseErrorKind};

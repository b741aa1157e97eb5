use anyhow::{Context, Result};
use fatnum::{BigInt, Sign};

use crate::config::CliConfig;

/// Describe a decimal value: sign, decimal, hex, chunks and bit length.
pub fn show(value: &str, config: &CliConfig) -> Result<String> {
    let width = config.chunk_width()?;
    let b = BigInt::parse_with_width(value, width).context("Invalid value")?;
    let sign = match b.sign() {
        Sign::Positive => "positive",
        Sign::Negative => "negative",
    };
    Ok(format!(
        "sign:    {sign}\n\
         decimal: {}\n\
         hex:     {}\n\
         chunks:  [{}] (width {width}, {} chunks)\n\
         bits:    {}",
        b.to_decimal_string(),
        b.to_hex_string(),
        b.chunks().join(" "),
        b.num_chunks(),
        b.bit_len(),
    ))
}

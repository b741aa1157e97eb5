pub mod calc;
pub mod show;

use fatnum::BigInt;

use crate::config::OutputFormat;

/// Render a value in the requested output format.
pub fn render(value: &BigInt, format: OutputFormat) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    match format {
        OutputFormat::Decimal => value.to_decimal_string(),
        OutputFormat::Hex => format!("{sign}0x{}", value.to_hex_string()),
        OutputFormat::Chunks => format!("{sign}[{}]", value.chunks().join(" ")),
    }
}

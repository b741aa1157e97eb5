use std::cmp::Ordering;

use anyhow::{Context, Result};
use clap::ValueEnum;
use fatnum::BigInt;

use super::render;
use crate::config::CliConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Divrem,
    Cmp,
}

/// Apply `op` to two decimal operands and render the result.
///
/// `divrem` renders `quotient remainder`; `cmp` renders `-1`, `0` or `1`.
pub fn calc(lhs: &str, op: Op, rhs: &str, config: &CliConfig) -> Result<String> {
    let width = config.chunk_width()?;
    let a = BigInt::parse_with_width(lhs, width).context("Invalid left operand")?;
    let b = BigInt::parse_with_width(rhs, width).context("Invalid right operand")?;
    log::debug!("calc {op:?}: {} x {} chunks", a.num_chunks(), b.num_chunks());

    let out = match op {
        Op::Add => render(&(&a + &b), config.format),
        Op::Sub => render(&(&a - &b), config.format),
        Op::Mul => render(&(&a * &b), config.format),
        Op::Div => render(&a.quotient(&b).context("Division failed")?, config.format),
        Op::Rem => render(&a.remainder(&b).context("Division failed")?, config.format),
        Op::Divrem => {
            let (q, r) = a.div_rem(&b).context("Division failed")?;
            format!("{} {}", render(&q, config.format), render(&r, config.format))
        }
        Op::Cmp => match a.cmp(&b) {
            Ordering::Less => "-1".to_string(),
            Ordering::Equal => "0".to_string(),
            Ordering::Greater => "1".to_string(),
        },
    };
    Ok(out)
}

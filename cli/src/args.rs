use clap::{Parser, Subcommand};
use cli::commands::calc::Op;
use cli::config::OutputFormat;

#[derive(Parser)]
#[command(name = "fnum")]
#[command(about = "Arbitrary-precision integer calculator", long_about = None)]
pub struct Cli {
    /// Hex digits per chunk (overrides the config file)
    #[arg(long, global = true)]
    pub chunk_width: Option<usize>,
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
    /// TOML config file with `chunk_width` and `format`
    #[arg(long, global = true)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a binary operation to two decimal integers
    Calc {
        /// Left operand (decimal, optional sign)
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// Operation
        #[arg(value_enum)]
        op: Op,
        /// Right operand (decimal, optional sign)
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Show sign, decimal, hex and chunk renderings of a decimal integer
    Show {
        /// Value (decimal, optional sign)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

use anyhow::Result;
use clap::Parser;

mod args;

use args::{Cli, Commands};
use cli::commands::{calc, show};
use cli::config::CliConfig;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(cli.chunk_width, cli.format);

    let output = match &cli.command {
        Commands::Calc { lhs, op, rhs } => calc::calc(lhs, *op, rhs, &config)?,
        Commands::Show { value } => show::show(value, &config)?,
    };
    println!("{output}");
    Ok(())
}

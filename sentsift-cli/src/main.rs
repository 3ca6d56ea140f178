//! sentsift command-line entry point

use clap::Parser;
use sentsift_cli::commands::Commands;

/// Build English sentence corpora from PDF documents
#[derive(Debug, Parser)]
#[command(name = "sentsift", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

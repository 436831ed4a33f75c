//! morfema command-line interface
//!
//! Tools for working with the Lithuanian positional tagset: generating
//! numeral paradigms as CoNLL-U lexicon rows and decoding tags by hand.

use clap::Parser;
use morfema_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(
    name = "morfema",
    version,
    about = "Lithuanian morphology toolkit",
    long_about = "Generate numeral paradigms and decode positional morphological tags."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    }
}

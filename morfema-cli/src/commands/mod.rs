//! CLI command implementations

use clap::Subcommand;

pub mod generate;
pub mod inspect;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate numeral paradigms as CoNLL-U lexicon rows
    Generate(generate::GenerateArgs),

    /// Decode positional tags and print their contents
    Inspect(inspect::InspectArgs),
}

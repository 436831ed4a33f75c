//! Generate command implementation

use crate::error::{CliError, CliResult};
use crate::inventory::{default_inventory, parse_inventory};
use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use morfema_core::numeral::generate_paradigm;
use morfema_core::LexiconRow;
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Lexeme inventory file (lemma<TAB>num_type[<TAB>degree] per line);
    /// built-in inventory when omitted
    #[arg(short, long, value_name = "FILE")]
    pub lexemes: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        let seeds = match &self.lexemes {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("cannot read inventory {}", path.display()))?;
                parse_inventory(&contents)?
            }
            None => default_inventory(),
        };
        log::info!("Generating paradigms for {} lexemes", seeds.len());

        let bar = if self.quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(seeds.len() as u64);
            bar.set_style(
                ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        };

        let rows: Vec<LexiconRow> = seeds
            .par_iter()
            .map(|seed| {
                let rows = generate_paradigm(seed);
                if rows.is_empty() {
                    log::warn!("no paradigm for lexeme {:?}, skipped", seed.lemma);
                }
                bar.inc(1);
                rows
            })
            .flatten()
            .collect();
        bar.finish_and_clear();
        log::info!("Generated {} lexicon rows", rows.len());

        self.write_rows(&rows)
    }

    fn write_rows(&self, rows: &[LexiconRow]) -> CliResult<()> {
        let mut out: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .map_err(|e| CliError::OutputError(format!("{}: {e}", path.display())))?,
            ),
            None => Box::new(std::io::stdout().lock()),
        };
        for row in rows {
            writeln!(out, "{row}").map_err(|e| CliError::OutputError(e.to_string()))?;
        }
        out.flush().map_err(|e| CliError::OutputError(e.to_string()))?;
        Ok(())
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

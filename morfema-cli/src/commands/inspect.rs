//! Inspect command implementation

use crate::error::{CliError, CliResult};
use anyhow::Context;
use clap::{Args, ValueEnum};
use morfema_core::{PosKind, Record};
use serde::Serialize;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Part of speech the tags belong to
    #[arg(short, long, value_enum)]
    pub kind: Kind,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Positional tags to decode, e.g. "dkt.vyr.vns.V."
    #[arg(required = true, value_name = "TAG")]
    pub tags: Vec<String>,
}

/// Part-of-speech selector for tag decoding
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    Noun,
    Verb,
    Adjective,
    Pronoun,
    Numeral,
    Adverb,
}

impl Kind {
    fn pos_kind(self) -> PosKind {
        match self {
            Kind::Noun => PosKind::Noun,
            Kind::Verb => PosKind::Verb,
            Kind::Adjective => PosKind::Adjective,
            Kind::Pronoun => PosKind::Pronoun,
            Kind::Numeral => PosKind::Numeral,
            Kind::Adverb => PosKind::Adverb,
        }
    }
}

/// Output format for decoded tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct Decoded {
    tag: String,
    xpos: String,
    upos: &'static str,
    feats: String,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let kind = self.kind.pos_kind();
        let mut decoded = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            let record = Record::decode(tag, kind, "", "")
                .map_err(|e| CliError::BadTag(format!("{tag}: {e}")))?;
            decoded.push(Decoded {
                tag: tag.clone(),
                xpos: record.xpos(),
                upos: record.upos(),
                feats: record.ufeats(),
            });
        }

        match self.format {
            Format::Text => {
                for item in &decoded {
                    println!("{}", item.tag);
                    println!("  canonical: {}", item.xpos);
                    println!("  upos:      {}", item.upos);
                    println!("  feats:     {}", item.feats);
                }
            }
            Format::Json => {
                let json = serde_json::to_string_pretty(&decoded)
                    .context("cannot serialize decoded tags")?;
                println!("{json}");
            }
        }
        Ok(())
    }
}

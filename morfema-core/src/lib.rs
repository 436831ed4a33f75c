//! Lithuanian morphological tag model and paradigm generator
//!
//! This crate holds the pure-computation layer of the morfema toolkit:
//!
//! - a typed feature-record model for the six open parts of speech the
//!   positional Jablonskis-style tagset covers ([`record`]),
//! - a bidirectional codec between records and the compact XPOS strings
//!   plus Universal Dependencies feature strings (methods on [`Record`]),
//! - a rule-table numeral declension engine producing complete inflectional
//!   paradigms ([`numeral`]),
//! - CoNLL-U style lexicon row output ([`conllu`]).
//!
//! Everything here is deterministic and free of I/O; records are immutable
//! value objects, so all operations are safe to run concurrently.
//!
//! # Example
//!
//! ```
//! use morfema_core::{PosKind, Record};
//!
//! let rec = Record::decode("dkt.vyr.vns.V.", PosKind::Noun, "vyras", "vyras")?;
//! assert_eq!(rec.upos(), "NOUN");
//! assert_eq!(rec.ufeats(), "Case=Nom|Gender=Masc|Number=Sing");
//! assert_eq!(rec.xpos(), "dkt.vyr.vns.V.");
//! # Ok::<(), morfema_core::CoreError>(())
//! ```

pub mod attr;
pub mod conllu;
mod error;
pub mod numeral;
pub mod record;
mod tag;

pub use attr::{
    Attr, Case, Definiteness, Degree, Gender, Mood, NumForm, NumType, Number, Person, Polarity,
    Tense, VerbForm, Voice,
};
pub use conllu::LexiconRow;
pub use error::{CoreError, Result};
pub use record::{Adjective, Adverb, Noun, Numeral, PosKind, Pronoun, Record, Verb};

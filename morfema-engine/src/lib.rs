//! Candidate production and tag disambiguation
//!
//! This crate orchestrates the pieces around the pure tag model in
//! `morfema-core`:
//!
//! - [`analyzer`] adapts raw hunspell-style analyzer output into candidate
//!   analyses,
//! - [`lexicon`] defines the injected dictionary repository plus a
//!   memoizing cache,
//! - [`disambiguate`] reconciles a tagger's prediction with the merged
//!   candidates,
//! - [`PostFilter`] ties the three together behind one call per token.
//!
//! Per-word analyzer or lexicon failures degrade to "no candidates" for
//! that word only and never abort a sentence or batch.

pub mod analyzer;
pub mod candidate;
pub mod disambiguate;
mod error;
pub mod filter;
pub mod lexicon;

pub use analyzer::{adapt, Analyzer};
pub use candidate::{merge_candidates, Candidate};
pub use disambiguate::{disambiguate, Alternative, Prediction};
pub use error::{AnalyzerError, EngineError, LookupError, Result};
pub use filter::{PostFilter, PostFilterBuilder};
pub use lexicon::{CachedLexicon, Lexicon, LookupOutcome};

//! Post-filter front object
//!
//! Bundles the lexicon, the optional analyzer and the disambiguation
//! cascade behind one call per token. Tokens are fully independent: the
//! filter keeps no cross-token state beyond the lookup memo, so a sentence
//! or a whole batch can be filtered from concurrent workers.

use crate::analyzer::{adapt, Analyzer};
use crate::candidate::merge_candidates;
use crate::disambiguate::{disambiguate, Alternative, Prediction};
use crate::error::EngineError;
use crate::lexicon::{CachedLexicon, Lexicon};
use tracing::warn;

/// Reconciles tagger predictions with lexicon and analyzer candidates
pub struct PostFilter<L> {
    lexicon: CachedLexicon<L>,
    analyzer: Option<Box<dyn Analyzer + Send + Sync>>,
}

impl<L: Lexicon> PostFilter<L> {
    pub fn builder() -> PostFilterBuilder<L> {
        PostFilterBuilder::new()
    }

    /// Disambiguate a single token
    pub fn filter_token(
        &self,
        word: &str,
        pred: &Prediction,
        alternatives: &[Alternative],
    ) -> Prediction {
        let outcome = self.lexicon.lookup_cached(word);
        let mut candidates = outcome.candidates().to_vec();

        if let Some(analyzer) = &self.analyzer {
            match analyzer.analyze(word) {
                Ok(raw) => {
                    if let Some(extra) = adapt(word, &raw) {
                        merge_candidates(&mut candidates, extra);
                    }
                }
                Err(err) => {
                    warn!(%word, %err, "analyzer failed, continuing without its candidates");
                }
            }
        }

        disambiguate(pred, alternatives, &candidates)
    }

    /// Disambiguate a whole sentence, token by token
    pub fn filter_sentence(
        &self,
        words: &[&str],
        preds: &[Prediction],
        alternatives: &[Vec<Alternative>],
    ) -> Vec<Prediction> {
        words
            .iter()
            .zip(preds)
            .enumerate()
            .map(|(i, (word, pred))| {
                let alts = alternatives.get(i).map(Vec::as_slice).unwrap_or(&[]);
                self.filter_token(word, pred, alts)
            })
            .collect()
    }
}

/// Builder for [`PostFilter`]; the lexicon is required, the analyzer is not
pub struct PostFilterBuilder<L> {
    lexicon: Option<L>,
    analyzer: Option<Box<dyn Analyzer + Send + Sync>>,
}

impl<L: Lexicon> PostFilterBuilder<L> {
    pub fn new() -> Self {
        Self {
            lexicon: None,
            analyzer: None,
        }
    }

    pub fn lexicon(mut self, lexicon: L) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn analyzer(mut self, analyzer: impl Analyzer + Send + Sync + 'static) -> Self {
        self.analyzer = Some(Box::new(analyzer));
        self
    }

    pub fn build(self) -> Result<PostFilter<L>, EngineError> {
        let lexicon = self.lexicon.ok_or(EngineError::MissingLexicon)?;
        Ok(PostFilter {
            lexicon: CachedLexicon::new(lexicon),
            analyzer: self.analyzer,
        })
    }
}

impl<L: Lexicon> Default for PostFilterBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

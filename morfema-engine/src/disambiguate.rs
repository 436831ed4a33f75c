//! Tag disambiguation cascade
//!
//! Reconciles a tagger's per-token prediction with the candidate analyses
//! the lexicon and analyzer produced. The cascade never touches the lemma
//! and always yields a complete (UPOS, XPOS, UFeats) triple — either an
//! adopted candidate or the prediction unchanged.
//!
//! A predicted XPOS containing the `*` wildcard marker is kept even when a
//! candidate's feats are adopted; the tagger's positional vote is more
//! trustworthy than a candidate tag in that case. Adoptions whose `Hyph=Yes`
//! flag disagrees with the prediction are vetoed outright — multiword
//! numeral tokens are left to the tagger.

use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};

/// The tagger's output for one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub upos: String,
    pub xpos: String,
    pub feats: String,
}

impl Prediction {
    pub fn new(
        upos: impl Into<String>,
        xpos: impl Into<String>,
        feats: impl Into<String>,
    ) -> Self {
        Self {
            upos: upos.into(),
            xpos: xpos.into(),
            feats: feats.into(),
        }
    }
}

/// One ranked alternative UPOS label with its best predicted feats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub upos: String,
    pub feats: String,
}

impl Alternative {
    pub fn new(upos: impl Into<String>, feats: impl Into<String>) -> Self {
        Self {
            upos: upos.into(),
            feats: feats.into(),
        }
    }
}

/// Disambiguate one token's prediction against its candidate analyses
pub fn disambiguate(
    pred: &Prediction,
    alternatives: &[Alternative],
    candidates: &[Candidate],
) -> Prediction {
    if candidates.is_empty() {
        return pred.clone();
    }
    let wildcard = pred.xpos.contains('*');

    if candidates.iter().any(|c| c.upos == pred.upos) {
        // exact hit: the prediction is already a known analysis
        let exact = candidates
            .iter()
            .any(|c| c.upos == pred.upos && c.xpos == pred.xpos && c.feats == pred.feats);
        if exact {
            return pred.clone();
        }

        let sharing: Vec<&Candidate> =
            candidates.iter().filter(|c| c.upos == pred.upos).collect();

        // single analysis for this UPOS, or unanimous feats across them
        let unanimous = sharing.windows(2).all(|w| w[0].feats == w[1].feats);
        if sharing.len() == 1 || unanimous {
            let chosen = sharing[0];
            let xpos = if wildcard {
                pred.xpos.clone()
            } else {
                chosen.xpos.clone()
            };
            return veto(
                pred,
                Prediction::new(pred.upos.clone(), xpos, chosen.feats.clone()),
            );
        }

        // feats agree with one candidate: trust its xpos
        if let Some(chosen) = sharing.iter().find(|c| c.feats == pred.feats) {
            if chosen.xpos != pred.xpos && !wildcard {
                return Prediction::new(
                    pred.upos.clone(),
                    chosen.xpos.clone(),
                    pred.feats.clone(),
                );
            }
            return pred.clone();
        }

        // xpos agrees with one candidate: trust its feats
        if let Some(chosen) = sharing.iter().find(|c| c.xpos == pred.xpos) {
            return veto(
                pred,
                Prediction::new(pred.upos.clone(), pred.xpos.clone(), chosen.feats.clone()),
            );
        }

        // nothing matches even partially; keep the prediction
        return pred.clone();
    }

    // the predicted UPOS is not a known analysis at all: fall back to the
    // ranked alternatives
    for alternative in alternatives {
        let sharing: Vec<&Candidate> = candidates
            .iter()
            .filter(|c| c.upos == alternative.upos)
            .collect();
        if sharing.is_empty() {
            continue;
        }
        let chosen = sharing
            .iter()
            .find(|c| c.feats == alternative.feats)
            .copied()
            .unwrap_or(sharing[0]);
        return veto(
            pred,
            Prediction::new(
                chosen.upos.clone(),
                chosen.xpos.clone(),
                chosen.feats.clone(),
            ),
        );
    }

    pred.clone()
}

/// Reject an adoption whose multiword flag disagrees with the prediction
fn veto(pred: &Prediction, adopted: Prediction) -> Prediction {
    let pred_hyph = pred.feats.contains("Hyph=Yes");
    let adopted_hyph = adopted.feats.contains("Hyph=Yes");
    if pred_hyph != adopted_hyph {
        pred.clone()
    } else {
        adopted
    }
}

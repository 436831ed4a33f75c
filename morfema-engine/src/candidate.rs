//! Candidate analyses
//!
//! A candidate is one possible analysis of a surface word, produced by the
//! lexicon or the analyzer adapter and consumed only by the disambiguation
//! cascade. Candidate lists are either absent or non-empty; "found nothing"
//! is always normalized to absence by the producers.

use serde::{Deserialize, Serialize};

/// One candidate analysis of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub feats: String,
}

impl Candidate {
    pub fn new(
        lemma: impl Into<String>,
        upos: impl Into<String>,
        xpos: impl Into<String>,
        feats: impl Into<String>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            upos: upos.into(),
            xpos: xpos.into(),
            feats: feats.into(),
        }
    }
}

/// Append `extra` candidates, skipping any whose (UPOS, UFeats) pair is
/// already represented
pub fn merge_candidates(into: &mut Vec<Candidate>, extra: Vec<Candidate>) {
    for candidate in extra {
        let seen = into
            .iter()
            .any(|c| c.upos == candidate.upos && c.feats == candidate.feats);
        if !seen {
            into.push(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_skips_duplicate_pairs() {
        let mut base = vec![Candidate::new("du", "NUM", "x1", "f1")];
        merge_candidates(
            &mut base,
            vec![
                Candidate::new("du", "NUM", "x2", "f1"),
                Candidate::new("du", "NUM", "x2", "f2"),
            ],
        );
        assert_eq!(base.len(), 2);
        assert_eq!(base[1].feats, "f2");
    }
}

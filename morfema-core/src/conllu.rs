//! Lexicon row output
//!
//! Generated paradigms are loaded in bulk by external tooling that expects
//! the ten tab-separated CoNLL-U columns. Columns the generator cannot fill
//! hold the `_` placeholder; the id column is fixed at `0` for generated
//! forms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One generated lexicon entry, one output line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconRow {
    pub word: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub feats: String,
}

impl LexiconRow {
    pub fn new(word: &str, lemma: &str, upos: &str, xpos: &str, feats: &str) -> Self {
        Self {
            word: word.to_string(),
            lemma: lemma.to_string(),
            upos: upos.to_string(),
            xpos: xpos.to_string(),
            feats: feats.to_string(),
        }
    }
}

impl fmt::Display for LexiconRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0\t{}\t{}\t{}\t{}\t{}\t_\t_\t_\t_",
            self.word, self.lemma, self.upos, self.xpos, self.feats
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_has_ten_columns() {
        let row = LexiconRow::new("du", "du", "NUM", "sktv.raid.kiek.vyr.V.", "Case=Nom");
        let line = row.to_string();
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 10);
        assert_eq!(fields[0], "0");
        assert_eq!(fields[1], "du");
        assert_eq!(fields[5], "Case=Nom");
        assert_eq!(fields[9], "_");
    }
}

//! End-to-end tests for the post-filter pipeline
//!
//! Drives the public API the way a tagger integration would: an in-memory
//! lexicon, a canned hunspell-style analyzer, and per-token predictions
//! with ranked alternatives.

use morfema_engine::analyzer::Analyzer;
use morfema_engine::candidate::Candidate;
use morfema_engine::disambiguate::{Alternative, Prediction};
use morfema_engine::filter::PostFilter;
use morfema_engine::lexicon::Lexicon;
use morfema_engine::{AnalyzerError, LookupError};
use std::collections::HashMap;

struct MapLexicon(HashMap<String, Vec<Candidate>>);

impl MapLexicon {
    fn new(entries: &[(&str, &str, &str, &str, &str)]) -> Self {
        let mut map: HashMap<String, Vec<Candidate>> = HashMap::new();
        for (word, lemma, upos, xpos, feats) in entries {
            map.entry(word.to_string())
                .or_default()
                .push(Candidate::new(*lemma, *upos, *xpos, *feats));
        }
        Self(map)
    }
}

impl Lexicon for MapLexicon {
    fn lookup(&self, word: &str) -> Result<Option<Vec<Candidate>>, LookupError> {
        Ok(self.0.get(word).cloned())
    }
}

struct CannedAnalyzer(HashMap<String, Vec<String>>);

impl CannedAnalyzer {
    fn new(entries: &[(&str, &[&str])]) -> Self {
        let map = entries
            .iter()
            .map(|(word, lines)| {
                (
                    word.to_string(),
                    lines.iter().map(|l| l.to_string()).collect(),
                )
            })
            .collect();
        Self(map)
    }
}

impl Analyzer for CannedAnalyzer {
    fn analyze(&self, word: &str) -> Result<Vec<String>, AnalyzerError> {
        Ok(self.0.get(word).cloned().unwrap_or_default())
    }
}

fn ranked() -> Vec<Alternative> {
    ["NOUN", "VERB", "ADJ", "ADV", "PRON", "NUM", "X"]
        .iter()
        .map(|upos| Alternative::new(*upos, "_"))
        .collect()
}

#[test]
fn test_lexicon_candidate_corrects_prediction() {
    let lexicon = MapLexicon::new(&[(
        "vyras",
        "vyras",
        "NOUN",
        "dkt.vyr.vns.V.",
        "Case=Nom|Gender=Masc|Number=Sing",
    )]);
    let filter = PostFilter::builder().lexicon(lexicon).build().unwrap();

    let pred = Prediction::new("NOUN", "dkt.vyr.dgs.V.", "Case=Nom|Gender=Masc|Number=Plur");
    let out = filter.filter_token("vyras", &pred, &ranked());
    assert_eq!(out.xpos, "dkt.vyr.vns.V.");
    assert_eq!(out.feats, "Case=Nom|Gender=Masc|Number=Sing");
}

#[test]
fn test_analyzer_fills_lexicon_gap() {
    let filter = PostFilter::builder()
        .lexicon(MapLexicon::new(&[]))
        .analyzer(CannedAnalyzer::new(&[(
            "Vilniuje",
            &["st:Vilnius po:noun_geographic_name is:Masc_Sg_Loc"],
        )]))
        .build()
        .unwrap();

    let pred = Prediction::new("VERB", "vksm.asm.", "VerbForm=Fin");
    let out = filter.filter_token("Vilniuje", &pred, &ranked());
    assert_eq!(out.upos, "PROPN");
    assert!(out.xpos.contains("tikr"));
    assert!(out.feats.contains("Case=Loc"));
}

#[test]
fn test_lexicon_and_analyzer_candidates_merge() {
    // the analyzer repeats the lexicon reading and adds a second one;
    // the duplicate (UPOS, UFeats) pair must collapse so the noun set
    // stays unanimous and the lexicon xpos is adopted
    let lexicon = MapLexicon::new(&[(
        "namas",
        "namas",
        "NOUN",
        "dkt.vyr.vns.V.",
        "Case=Nom|Gender=Masc|Number=Sing",
    )]);
    let filter = PostFilter::builder()
        .lexicon(lexicon)
        .analyzer(CannedAnalyzer::new(&[(
            "namas",
            &["st:namas po:noun is:Masc_Sg_Nom"],
        )]))
        .build()
        .unwrap();

    let pred = Prediction::new("NOUN", "dkt.*.", "_");
    let out = filter.filter_token("namas", &pred, &ranked());
    // wildcard prediction keeps its xpos but adopts the unanimous feats
    assert_eq!(out.xpos, "dkt.*.");
    assert_eq!(out.feats, "Case=Nom|Gender=Masc|Number=Sing");
}

#[test]
fn test_alternative_rank_overrides_wrong_upos() {
    let filter = PostFilter::builder()
        .lexicon(MapLexicon::new(&[]))
        .analyzer(CannedAnalyzer::new(&[(
            "su",
            &["st:su po:preposition_Inst"],
        )]))
        .build()
        .unwrap();

    let pred = Prediction::new("NOUN", "dkt.", "_");
    let mut alternatives = ranked();
    alternatives.push(Alternative::new("ADP", "_"));
    let out = filter.filter_token("su", &pred, &alternatives);
    assert_eq!(out.upos, "ADP");
    assert_eq!(out.xpos, "prl.Įn.");
    assert_eq!(out.feats, "AdpType=Prep|Case=Ins");
}

#[test]
fn test_unknown_word_keeps_prediction() {
    let filter = PostFilter::builder()
        .lexicon(MapLexicon::new(&[]))
        .analyzer(CannedAnalyzer::new(&[]))
        .build()
        .unwrap();

    let pred = Prediction::new("NOUN", "dkt.vyr.vns.V.", "Case=Nom");
    let out = filter.filter_token("nežinomažodis", &pred, &ranked());
    assert_eq!(out, pred);
}

#[test]
fn test_capitalized_form_uses_lowercase_entry() {
    let lexicon = MapLexicon::new(&[(
        "metai",
        "metai",
        "NOUN",
        "dkt.vyr.dgs.V.",
        "Case=Nom|Gender=Masc|Number=Plur",
    )]);
    let filter = PostFilter::builder().lexicon(lexicon).build().unwrap();

    let pred = Prediction::new("NOUN", "dkt.*.", "_");
    let out = filter.filter_token("Metai", &pred, &ranked());
    assert_eq!(out.feats, "Case=Nom|Gender=Masc|Number=Plur");
}

#[test]
fn test_sentence_level_filtering() {
    let lexicon = MapLexicon::new(&[
        (
            "du",
            "du",
            "NUM",
            "sktv.raid.kiek.vyr.dgs.V.",
            "Case=Nom|Gender=Masc|Number=Plur|NumForm=Word|NumType=Card",
        ),
        (
            "vyrai",
            "vyras",
            "NOUN",
            "dkt.vyr.dgs.V.",
            "Case=Nom|Gender=Masc|Number=Plur",
        ),
    ]);
    let filter = PostFilter::builder().lexicon(lexicon).build().unwrap();

    let preds = vec![
        Prediction::new("NUM", "sktv.*.", "_"),
        Prediction::new("NOUN", "dkt.vyr.vns.V.", "Case=Nom|Gender=Masc|Number=Sing"),
        Prediction::new("VERB", "vksm.asm.tiesiog.es.dgs.3.", "Mood=Ind"),
    ];
    let alternatives = vec![ranked(), ranked(), ranked()];
    let out = filter.filter_sentence(&["du", "vyrai", "eina"], &preds, &alternatives);

    assert_eq!(out.len(), 3);
    assert!(out[0].feats.contains("NumType=Card"));
    assert_eq!(out[0].xpos, "sktv.*.");
    assert_eq!(out[1].xpos, "dkt.vyr.dgs.V.");
    // no lexicon entry for the verb; its prediction passes through
    assert_eq!(out[2], preds[2]);
}

#[test]
fn test_multiword_numeral_part_is_left_alone() {
    let lexicon = MapLexicon::new(&[(
        "dvidešimt",
        "dvidešimt pirmas",
        "NUM",
        "sktv.raid.kelint.vyr.vns.V.",
        "Case=Nom|Gender=Masc|Hyph=Yes|NumForm=Word|NumType=Ord|Number=Sing",
    )]);
    let filter = PostFilter::builder().lexicon(lexicon).build().unwrap();

    let pred = Prediction::new("NUM", "sktv.x.", "NumForm=Word|NumType=Card");
    let out = filter.filter_token("dvidešimt", &pred, &ranked());
    assert_eq!(out, pred);
}

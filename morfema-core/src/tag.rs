//! XPOS/UFeats codec
//!
//! XPOS strings are dot-separated lowercase tokens with a POS-kind prefix
//! and a mandatory trailing dot (`dkt.vyr.vns.V.`). Token order per kind is
//! a hard contract: `decode(encode(r)) == r` for every validly constructed
//! record. UFeats strings are pipe-separated `Key=Value` pairs, keys unique
//! and lexicographically sorted, or the literal `_` when nothing applies.
//!
//! Decoding tolerates unrecognized tokens by dropping them silently; the
//! stored corpora contain tag variants the closed tables never covered, and
//! failing on those would reject whole documents. A leading token that is a
//! *different* kind's prefix is an error, not a droppable token.

use crate::attr::{
    Attr, Case, Definiteness, Degree, Gender, Mood, NumForm, NumType, Number, Person, Polarity,
    Tense, VerbForm, Voice,
};
use crate::error::{CoreError, Result};
use crate::record::{Adjective, Adverb, Noun, Numeral, PosKind, Pronoun, Record, Verb};
use std::collections::BTreeMap;

impl Record {
    /// Decode a positional XPOS string into a record of the given kind
    ///
    /// The surface form and lemma are not part of the tag and must be
    /// supplied by the caller.
    pub fn decode(
        xpos: &str,
        kind: PosKind,
        word: impl Into<String>,
        lemma: impl Into<String>,
    ) -> Result<Record> {
        let mut tokens: Vec<&str> = xpos.split('.').filter(|t| !t.is_empty()).collect();
        if let Some(first) = tokens.first() {
            match PosKind::from_prefix(first) {
                Some(k) if k == kind => {
                    tokens.remove(0);
                }
                Some(other) => {
                    return Err(CoreError::Decode {
                        tag: xpos.to_string(),
                        kind: kind.name(),
                        reason: format!("tag carries the {other} prefix"),
                    });
                }
                None => {}
            }
        }
        match kind {
            PosKind::Noun => decode_noun(&tokens, word.into(), lemma.into()),
            PosKind::Verb => decode_verb(&tokens, word.into(), lemma.into()),
            PosKind::Adjective => decode_adjective(&tokens, word.into(), lemma.into()),
            PosKind::Pronoun => decode_pronoun(&tokens, xpos, word.into(), lemma.into()),
            PosKind::Numeral => decode_numeral(&tokens, word.into(), lemma.into()),
            PosKind::Adverb => decode_adverb(&tokens, word.into(), lemma.into()),
        }
    }

    /// Encode the record as a positional XPOS string, trailing dot included
    pub fn xpos(&self) -> String {
        let mut out = String::from(self.kind().prefix());
        out.push('.');
        match self {
            Record::Noun(r) => {
                if r.reflexive {
                    out.push_str("sngr.");
                }
                if r.proper {
                    out.push_str("tikr.");
                }
                push_codes(&mut out, &self.attributes());
            }
            Record::Verb(r) => {
                if r.definiteness == Some(Definiteness::Definite) {
                    out.push_str("įvardž.");
                }
                push_codes(&mut out, &self.attributes());
                if r.reflexive {
                    out.push_str("sngr.");
                }
                if r.polarity == Polarity::Negative {
                    out.push_str("neig.");
                }
            }
            Record::Adjective(r) => {
                if let Some(d) = r.degree {
                    out.push_str(d.code());
                    out.push('.');
                }
                if r.definite {
                    out.push_str("įvardž.");
                }
                let attrs: Vec<Attr> = self
                    .attributes()
                    .into_iter()
                    .filter(|a| !matches!(a, Attr::Degree(_)))
                    .collect();
                push_codes(&mut out, &attrs);
            }
            Record::Pronoun(_) | Record::Adverb(_) => {
                push_codes(&mut out, &self.attributes());
            }
            Record::Numeral(r) => {
                if let Some(f) = r.num_form {
                    out.push_str(f.code());
                    out.push('.');
                }
                out.push_str(r.num_type.code());
                out.push('.');
                if let Some(d) = r.degree {
                    out.push_str(d.code());
                    out.push('.');
                }
                if r.definite {
                    out.push_str("įvardž.");
                }
                let attrs: Vec<Attr> = self
                    .attributes()
                    .into_iter()
                    .filter(|a| {
                        !matches!(a, Attr::NumForm(_) | Attr::NumType(_) | Attr::Degree(_))
                    })
                    .collect();
                push_codes(&mut out, &attrs);
            }
        }
        out
    }

    /// Render the record's Universal Dependencies feature string
    pub fn ufeats(&self) -> String {
        let mut feats: BTreeMap<&'static str, &'static str> = BTreeMap::new();
        for attr in self.attributes() {
            if let Some((key, value)) = attr.ud_pair() {
                feats.insert(key, value);
            }
        }
        match self {
            Record::Noun(r) => {
                if r.reflexive {
                    feats.insert("Reflex", "Yes");
                }
            }
            Record::Verb(r) => {
                if let Some(tense) = r.tense {
                    let resultative = tense == Tense::PastResultative
                        && r.verb_form == Some(VerbForm::Participle)
                        && r.voice == Some(Voice::Passive);
                    if !resultative {
                        feats.insert("Tense", tense.ud());
                        if let Some(aspect) = tense.aspect() {
                            feats.insert("Aspect", aspect);
                        }
                    }
                }
                if let Some(d) = r.definiteness {
                    feats.insert("Definite", d.ud());
                }
                if r.reflexive {
                    feats.insert("Reflex", "Yes");
                }
                if r.polarity == Polarity::Negative {
                    feats.insert("Polarity", "Neg");
                }
            }
            Record::Adjective(r) => {
                feats.insert("Definite", if r.definite { "Def" } else { "Ind" });
            }
            Record::Numeral(r) => {
                if r.definite {
                    feats.insert("Definite", "Def");
                } else if r.num_type == NumType::Ordinal {
                    feats.insert("Definite", "Ind");
                }
            }
            Record::Adverb(r) => {
                if let Some(pron_type) = &r.pron_type {
                    // unknown codes render as the demonstrative value
                    feats.insert("PronType", pron_type_ud(pron_type));
                }
            }
            Record::Pronoun(_) => {}
        }
        if feats.is_empty() {
            return "_".to_string();
        }
        feats
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// The coarse Universal POS tag this record maps to
    pub fn upos(&self) -> &'static str {
        match self {
            Record::Noun(r) if r.proper => "PROPN",
            Record::Noun(_) => "NOUN",
            Record::Verb(_) => "VERB",
            Record::Adjective(_) => "ADJ",
            Record::Pronoun(_) => "PRON",
            Record::Numeral(_) => "NUM",
            Record::Adverb(_) => "ADV",
        }
    }
}

fn push_codes(out: &mut String, attrs: &[Attr]) {
    for attr in attrs {
        out.push_str(attr.code());
        out.push('.');
    }
}

/// UD `PronType` values the adverb slot carries; anything else passes as `Dem`
fn pron_type_ud(code: &str) -> &'static str {
    match code {
        "Int" => "Int",
        "Neg" => "Neg",
        "Ind" => "Ind",
        "Tot" => "Tot",
        _ => "Dem",
    }
}

fn decode_noun(tokens: &[&str], word: String, lemma: String) -> Result<Record> {
    let mut rec = Noun::new(word, lemma);
    for token in tokens {
        match *token {
            "sngr" => rec.reflexive = true,
            "tikr" => rec.proper = true,
            t => {
                set_first(&mut rec.gender, Gender::from_code(t))
                    || set_first(&mut rec.number, Number::from_code(t))
                    || set_first(&mut rec.case, Case::from_code(t));
            }
        }
    }
    Ok(Record::Noun(rec))
}

fn decode_verb(tokens: &[&str], word: String, lemma: String) -> Result<Record> {
    let mut rec = Verb::new(word, lemma);
    for token in tokens {
        match *token {
            "sngr" => rec.reflexive = true,
            "neig" => rec.polarity = Polarity::Negative,
            t => {
                set_first(&mut rec.gender, Gender::from_code(t))
                    || set_first(&mut rec.number, Number::from_code(t))
                    || set_first(&mut rec.person, Person::from_code(t))
                    || set_first(&mut rec.case, Case::from_code(t))
                    || set_first(&mut rec.tense, Tense::from_code(t))
                    || set_first(&mut rec.mood, Mood::from_code(t))
                    || set_first(&mut rec.voice, Voice::from_code(t))
                    || set_first(&mut rec.verb_form, VerbForm::from_code(t))
                    || set_first(&mut rec.definiteness, Definiteness::from_code(t));
            }
        }
    }
    // A passive past participle is the resultative construction; its tense
    // collapses to the dedicated code.
    if rec.verb_form == Some(VerbForm::Participle)
        && rec.voice == Some(Voice::Passive)
        && rec.tense == Some(Tense::Past)
    {
        rec.tense = Some(Tense::PastResultative);
    }
    if rec.verb_form == Some(VerbForm::Participle) && rec.definiteness.is_none() {
        rec.definiteness = Some(Definiteness::Indefinite);
    }
    Ok(Record::Verb(rec))
}

fn decode_adjective(tokens: &[&str], word: String, lemma: String) -> Result<Record> {
    let mut rec = Adjective::new(word, lemma);
    for token in tokens {
        match *token {
            "įvardž" => rec.definite = true,
            t => {
                set_first(&mut rec.degree, Degree::from_code(t))
                    || set_first(&mut rec.gender, Gender::from_code(t))
                    || set_first(&mut rec.number, Number::from_code(t))
                    || set_first(&mut rec.case, Case::from_code(t));
            }
        }
    }
    Ok(Record::Adjective(rec))
}

fn decode_pronoun(tokens: &[&str], xpos: &str, word: String, lemma: String) -> Result<Record> {
    let mut gender = None;
    let mut number = None;
    let mut case = None;
    for token in tokens {
        set_first(&mut gender, Gender::from_code(token))
            || set_first(&mut number, Number::from_code(token))
            || set_first(&mut case, Case::from_code(token));
    }
    let (Some(gender), Some(number), Some(case)) = (gender, number, case) else {
        return Err(CoreError::Decode {
            tag: xpos.to_string(),
            kind: PosKind::Pronoun.name(),
            reason: "gender, number and case are all required".to_string(),
        });
    };
    Ok(Record::Pronoun(Pronoun::new(word, lemma, gender, number, case)))
}

fn decode_numeral(tokens: &[&str], word: String, lemma: String) -> Result<Record> {
    let mut num_form = None;
    let mut num_type = None;
    let mut degree = None;
    let mut gender = None;
    let mut number = None;
    let mut case = None;
    let mut definite = false;
    for token in tokens {
        match *token {
            "įvardž" => definite = true,
            t => {
                set_first(&mut num_form, NumForm::from_code(t))
                    || set_first(&mut num_type, NumType::from_code(t))
                    || set_first(&mut degree, Degree::from_code(t))
                    || set_first(&mut gender, Gender::from_code(t))
                    || set_first(&mut number, Number::from_code(t))
                    || set_first(&mut case, Case::from_code(t));
            }
        }
    }
    let num_type = num_type.ok_or_else(|| CoreError::missing(NumType::label()))?;
    let mut rec = Numeral::new(word, lemma, num_type);
    rec.num_form = num_form;
    rec.degree = degree;
    rec.gender = gender;
    rec.number = number;
    rec.case = case;
    rec.definite = definite;
    Ok(Record::Numeral(rec))
}

fn decode_adverb(tokens: &[&str], word: String, lemma: String) -> Result<Record> {
    let mut rec = Adverb::new(word, lemma);
    for token in tokens {
        if let Some(degree) = Degree::from_code(token) {
            rec.degree = degree;
        }
    }
    Ok(Record::Adverb(rec))
}

/// Assign `value` to `slot` when the token parsed and the slot is still
/// empty; reports whether the token was consumed
fn set_first<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(v) => {
            if slot.is_none() {
                *slot = Some(v);
            }
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_noun() {
        let rec = Record::decode("dkt.tikr.vyr.vns.K.", PosKind::Noun, "Vilniaus", "Vilnius")
            .unwrap();
        let Record::Noun(noun) = &rec else {
            panic!("expected a noun");
        };
        assert!(noun.proper);
        assert_eq!(noun.gender, Some(Gender::Masculine));
        assert_eq!(noun.case, Some(Case::Genitive));
        assert_eq!(rec.upos(), "PROPN");
        assert_eq!(rec.xpos(), "dkt.tikr.vyr.vns.K.");
    }

    #[test]
    fn test_decode_rejects_foreign_prefix() {
        let err = Record::decode("vksm.vyr.", PosKind::Noun, "x", "x").unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }

    #[test]
    fn test_decode_drops_unknown_tokens() {
        let rec = Record::decode("dkt.nosuch.mot.dgs.V.", PosKind::Noun, "moterys", "moteris")
            .unwrap();
        assert_eq!(rec.xpos(), "dkt.mot.dgs.V.");
    }

    #[test]
    fn test_resultative_collapse() {
        let rec = Record::decode(
            "vksm.mot.vns.V.būt-k.neveik.dlv.",
            PosKind::Verb,
            "rašyta",
            "rašyti",
        )
        .unwrap();
        let Record::Verb(verb) = &rec else {
            panic!("expected a verb");
        };
        assert_eq!(verb.tense, Some(Tense::PastResultative));
        assert_eq!(verb.definiteness, Some(Definiteness::Indefinite));
        // no Tense key but the participle still shows
        let feats = rec.ufeats();
        assert!(!feats.contains("Tense"));
        assert!(feats.contains("VerbForm=Part"));
    }

    #[test]
    fn test_finite_verb_round_trip() {
        let tag = "vksm.dgs.3.es.tiesiog.veik.asm.";
        let rec = Record::decode(tag, PosKind::Verb, "eina", "eiti").unwrap();
        assert_eq!(rec.xpos(), tag);
        assert_eq!(
            rec.ufeats(),
            "Mood=Ind|Number=Plur|Person=3|Tense=Pres|VerbForm=Fin|Voice=Act"
        );
    }

    #[test]
    fn test_past_tense_carries_aspect() {
        let rec = Record::decode(
            "vksm.vns.3.būt-k.tiesiog.asm.",
            PosKind::Verb,
            "ėjo",
            "eiti",
        )
        .unwrap();
        let feats = rec.ufeats();
        assert!(feats.contains("Aspect=Perf"));
        assert!(feats.contains("Tense=Past"));
    }

    #[test]
    fn test_adjective_definiteness() {
        let tag = "bdv.aukšč.įvardž.vyr.vns.V.";
        let rec = Record::decode(tag, PosKind::Adjective, "geriausiasis", "geras").unwrap();
        assert_eq!(rec.xpos(), tag);
        assert!(rec.ufeats().contains("Definite=Def"));
        assert!(rec.ufeats().contains("Degree=Sup"));

        let plain = Record::decode("bdv.vyr.vns.V.", PosKind::Adjective, "geras", "geras").unwrap();
        assert!(plain.ufeats().contains("Definite=Ind"));
    }

    #[test]
    fn test_pronoun_requires_all_slots() {
        assert!(Record::decode("įv.vyr.vns.", PosKind::Pronoun, "jis", "jis").is_err());
        let rec = Record::decode("įv.vyr.vns.V.", PosKind::Pronoun, "jis", "jis").unwrap();
        assert_eq!(rec.ufeats(), "Case=Nom|Gender=Masc|Number=Sing");
    }

    #[test]
    fn test_numeral_round_trip() {
        let tag = "sktv.raid.kelint.įvardž.vyr.vns.K.";
        let rec = Record::decode(tag, PosKind::Numeral, "pirmojo", "pirmas").unwrap();
        assert_eq!(rec.xpos(), tag);
        assert!(rec.ufeats().contains("Definite=Def"));
        assert!(rec.ufeats().contains("NumType=Ord"));
    }

    #[test]
    fn test_indefinite_ordinal_renders_ind() {
        let rec = Record::decode("sktv.raid.kelint.vyr.vns.V.", PosKind::Numeral, "pirmas", "pirmas")
            .unwrap();
        assert!(rec.ufeats().contains("Definite=Ind"));
        let cardinal =
            Record::decode("sktv.raid.kiek.vyr.dgs.V.", PosKind::Numeral, "du", "du").unwrap();
        assert!(!cardinal.ufeats().contains("Definite"));
    }

    #[test]
    fn test_numeral_requires_type() {
        let err = Record::decode("sktv.vyr.vns.V.", PosKind::Numeral, "du", "du").unwrap_err();
        assert!(matches!(err, CoreError::InvalidAttribute { .. }));
    }

    #[test]
    fn test_adverb() {
        let rec = Record::decode("prv.aukšt.", PosKind::Adverb, "greičiau", "greitai").unwrap();
        assert_eq!(rec.xpos(), "prv.aukšt.");
        assert_eq!(rec.ufeats(), "Degree=Cmp");
    }

    #[test]
    fn test_reflexive_and_negative_flags() {
        let tag = "vksm.vns.3.es.tiesiog.asm.sngr.neig.";
        let rec = Record::decode(tag, PosKind::Verb, "nesijuokia", "juoktis").unwrap();
        assert_eq!(rec.xpos(), tag);
        let feats = rec.ufeats();
        assert!(feats.contains("Polarity=Neg"));
        assert!(feats.contains("Reflex=Yes"));
    }

    #[test]
    fn test_ufeats_keys_sorted() {
        let rec = Record::decode(
            "vksm.įvardž.mot.dgs.K.es.veik.dlv.",
            PosKind::Verb,
            "einančiųjų",
            "eiti",
        )
        .unwrap();
        let feats = rec.ufeats();
        let keys: Vec<&str> = feats.split('|').map(|kv| kv.split('=').next().unwrap()).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }
}

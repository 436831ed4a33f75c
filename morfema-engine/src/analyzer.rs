//! Morphological analyzer adapter
//!
//! An external hunspell-style analyzer returns raw parse lines of the form
//! `st:<stem> po:<category> is:<Tag>_<Tag>_…`. [`adapt`] maps those lines
//! into candidate analyses through the core tag model: the category label
//! selects the Universal POS tag, the attribute tags are translated into
//! tagset codes and decoded into a record, and the record supplies the
//! canonical XPOS and UFeats strings.
//!
//! A parse whose category is unknown is discarded alone; if nothing
//! survives, the adapter reports absence rather than an empty list.

use crate::candidate::Candidate;
use crate::error::AnalyzerError;
use morfema_core::{Adverb, Degree, PosKind, Record};
use tracing::debug;

/// The external analyzer: one raw parse line per reading, empty when the
/// word is unknown. Calls may block on I/O.
pub trait Analyzer {
    fn analyze(&self, word: &str) -> Result<Vec<String>, AnalyzerError>;
}

/// One tokenized raw parse line
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawParse {
    stem: String,
    category: String,
    tags: Vec<String>,
}

impl RawParse {
    fn parse(line: &str) -> Option<Self> {
        let mut stem = None;
        let mut category = None;
        let mut tags = Vec::new();
        for field in line.split_whitespace() {
            if let Some(value) = field.strip_prefix("st:") {
                stem = Some(value.to_string());
            } else if let Some(value) = field.strip_prefix("po:") {
                // adposition categories embed their case after an underscore
                match value.split_once('_') {
                    Some(("preposition", case)) => {
                        category = Some("preposition".to_string());
                        tags.push(case.to_string());
                    }
                    _ => category = Some(value.to_string()),
                }
            } else if let Some(value) = field.strip_prefix("is:") {
                tags.extend(value.split('_').map(str::to_string));
            }
        }
        Some(Self {
            stem: stem?,
            category: category?,
            tags,
        })
    }

    fn has(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Adapt raw analyzer output for `word` into candidate analyses
///
/// Returns `None` when no parse survives mapping.
pub fn adapt(word: &str, raw: &[String]) -> Option<Vec<Candidate>> {
    let mut candidates = Vec::new();
    for line in raw {
        let Some(parse) = RawParse::parse(line) else {
            debug!(%word, %line, "malformed analyzer line, skipping");
            continue;
        };
        candidates.extend(adapt_parse(word, &parse));
    }
    if candidates.is_empty() {
        None
    } else {
        Some(candidates)
    }
}

fn adapt_parse(word: &str, parse: &RawParse) -> Vec<Candidate> {
    let Some(upos) = category_upos(&parse.category) else {
        debug!(%word, category = %parse.category, "unmapped analyzer category, discarding parse");
        return Vec::new();
    };
    // the supine has no slot in the target tagset
    if parse.has("Supine") {
        return Vec::new();
    }

    match upos {
        "PART" => vec![Candidate::new(&parse.stem, "PART", "dll.", "_")],
        "ADP" => adposition(parse).into_iter().collect(),
        "X" => {
            let xpos = if is_acronym(&parse.category) {
                "akr."
            } else {
                "sutr."
            };
            vec![Candidate::new(&parse.stem, "X", xpos, "Abbr=Yes")]
        }
        // a proper-name reading with no attributes at all is almost always
        // a foreign word the dictionary happens to capitalize
        "PROPN" if parse.tags.is_empty() => {
            vec![Candidate::new(&parse.stem, "X", "užs.", "Foreign=Yes")]
        }
        "NOUN" | "PROPN" => noun(word, parse, upos).into_iter().collect(),
        "ADJ" => adjective(word, parse).into_iter().collect(),
        "ADV" => vec![adverb(word, parse)],
        "VERB" => verb(word, parse),
        _ => Vec::new(),
    }
}

fn adposition(parse: &RawParse) -> Option<Candidate> {
    let raw_case = parse.tags.first()?;
    let code = tag_code(raw_case)?;
    let ud = if raw_case == "Inst" { "Ins" } else { raw_case };
    Some(Candidate::new(
        &parse.stem,
        "ADP",
        format!("prl.{code}."),
        format!("AdpType=Prep|Case={ud}"),
    ))
}

fn noun(word: &str, parse: &RawParse, upos: &str) -> Option<Candidate> {
    let mut tokens = mapped_tokens(parse);
    if is_reflexive_category(&parse.category) {
        tokens.push("sngr");
    }
    if upos == "PROPN" {
        tokens.push("tikr");
    }
    decoded(word, parse, PosKind::Noun, &tokens)
}

fn adjective(word: &str, parse: &RawParse) -> Option<Candidate> {
    let mut tokens = mapped_tokens(parse);
    if !parse.has("Comp") && !parse.has("Super") {
        tokens.push("nelygin");
    }
    decoded(word, parse, PosKind::Adjective, &tokens)
}

fn adverb(word: &str, parse: &RawParse) -> Candidate {
    let mut rec = Adverb::new(word, &parse.stem);
    rec.degree = if parse.has("Comp") {
        Degree::Comparative
    } else if parse.has("Super") {
        Degree::Superlative
    } else {
        Degree::Positive
    };
    let rec = Record::Adverb(rec);
    Candidate::new(&parse.stem, rec.upos(), rec.xpos(), rec.ufeats())
}

fn verb(word: &str, parse: &RawParse) -> Vec<Candidate> {
    let reflexive = is_reflexive_category(&parse.category);
    let negative = is_negative_category(&parse.category);

    // the manner converb functions as an adverb and keeps only polarity
    if parse.has("Vadv") {
        let mut xpos = String::from("vksm.");
        if negative {
            xpos.push_str("neig.");
        }
        xpos.push_str("būdn.");
        let polarity = if negative { "Neg" } else { "Pos" };
        return vec![Candidate::new(
            &parse.stem,
            "ADV",
            xpos,
            format!("Polarity={polarity}|VerbForm=Conv"),
        )];
    }

    let mut tokens = mapped_tokens(parse);
    if parse.has("Indic") || parse.has("Subj") || parse.has("Imper") {
        tokens.push("asm");
    }
    if reflexive {
        tokens.push("sngr");
    }
    if negative {
        tokens.push("neig");
    }

    // third-person forms do not distinguish number; emit both readings
    if parse.has("III") {
        let mut out = Vec::new();
        for number in ["vns", "dgs"] {
            let mut t = tokens.clone();
            t.push(number);
            out.extend(decoded(word, parse, PosKind::Verb, &t));
        }
        out
    } else {
        decoded(word, parse, PosKind::Verb, &tokens).into_iter().collect()
    }
}

fn mapped_tokens(parse: &RawParse) -> Vec<&'static str> {
    parse.tags.iter().filter_map(|t| tag_code(t)).collect()
}

fn decoded(word: &str, parse: &RawParse, kind: PosKind, tokens: &[&str]) -> Option<Candidate> {
    let mut tag = tokens.join(".");
    tag.push('.');
    match Record::decode(&tag, kind, word, &parse.stem) {
        Ok(rec) => Some(Candidate::new(
            &parse.stem,
            rec.upos(),
            rec.xpos(),
            rec.ufeats(),
        )),
        Err(err) => {
            debug!(%word, %tag, %err, "analyzer tags did not decode, discarding parse");
            None
        }
    }
}

/// Analyzer category label to Universal POS tag
fn category_upos(category: &str) -> Option<&'static str> {
    let upos = match category {
        "noun_family_name"
        | "noun_proper_name"
        | "noun_first_name_substandard"
        | "noun_family_name_substandard"
        | "noun_geographic_name"
        | "noun_geographic_name_obscene"
        | "noun_proper_name_substandard"
        | "noun_first_name" => "PROPN",
        "noun"
        | "noun_reflexive"
        | "noun_reflexive_substandard"
        | "noun_reflexive_obscene"
        | "noun_substandard"
        | "noun_obscene" => "NOUN",
        "verb"
        | "verb_substandard"
        | "verb_obscene"
        | "verb_reflexive"
        | "verb_reflexive_substandard"
        | "verb_reflexive_obscene"
        | "verb_negative"
        | "verb_negative_substandard"
        | "verb_negative_obscene"
        | "verb_reflexive_negative"
        | "verb_reflexive_negative_substandard"
        | "verb_reflexive_negative_obscene" => "VERB",
        "adjective" | "adjective_substandard" | "adjective_obscene" => "ADJ",
        "adverb" | "adverb_substandard" | "adverb_obscene" => "ADV",
        "abbreviation" | "abbreviation_substandard" | "abbreviation_obscene" | "acronym"
        | "acronym_substandard" => "X",
        "preposition" => "ADP",
        "particle" => "PART",
        _ => return None,
    };
    Some(upos)
}

fn is_reflexive_category(category: &str) -> bool {
    matches!(
        category,
        "noun_reflexive"
            | "noun_reflexive_substandard"
            | "noun_reflexive_obscene"
            | "verb_reflexive"
            | "verb_reflexive_substandard"
            | "verb_reflexive_obscene"
            | "verb_reflexive_negative"
            | "verb_reflexive_negative_substandard"
            | "verb_reflexive_negative_obscene"
    )
}

fn is_negative_category(category: &str) -> bool {
    matches!(
        category,
        "verb_negative"
            | "verb_negative_substandard"
            | "verb_negative_obscene"
            | "verb_reflexive_negative"
            | "verb_reflexive_negative_substandard"
            | "verb_reflexive_negative_obscene"
    )
}

fn is_acronym(category: &str) -> bool {
    matches!(category, "acronym" | "acronym_substandard")
}

/// Analyzer attribute tag to internal tagset code
fn tag_code(tag: &str) -> Option<&'static str> {
    let code = match tag {
        "Fem" => "mot",
        "Masc" => "vyr",
        "Neut" => "bev",
        "Sg" => "vns",
        "Pl" => "dgs",
        "Nom" => "V",
        "Gen" => "K",
        "Dat" => "N",
        "Acc" => "G",
        "Inst" => "Įn",
        "Loc" | "Loc_short" => "Vt",
        "Voc" => "Š",
        "Il" => "Il",
        "Pres" => "es",
        "Past" => "būt-k",
        "PastFreq" => "būt-d",
        "Fut" => "būs",
        "Indic" => "tiesiog",
        "Subj" => "tar",
        "Imper" => "liep",
        "Nec" => "reik",
        "Pass" => "neveik",
        "Act" => "veik",
        "Part" => "dlv",
        "Gerund" => "pad",
        "HalfPart" => "pusd",
        "Inf" => "bndr",
        "Vadv" => "būdn",
        "Def" => "įvardž",
        "Comp" => "aukšt",
        "Super" => "aukšč",
        "I" => "1",
        "II" => "2",
        "III" => "3",
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_noun_parse() {
        let raw = lines(&["st:vyras po:noun is:Masc_Sg_Nom"]);
        let cands = adapt("vyras", &raw).unwrap();
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].upos, "NOUN");
        assert_eq!(cands[0].xpos, "dkt.vyr.vns.V.");
        assert_eq!(cands[0].feats, "Case=Nom|Gender=Masc|Number=Sing");
    }

    #[test]
    fn test_proper_noun_parse() {
        let raw = lines(&["st:Vilnius po:noun_geographic_name is:Masc_Sg_Loc"]);
        let cands = adapt("Vilniuje", &raw).unwrap();
        assert_eq!(cands[0].upos, "PROPN");
        assert!(cands[0].xpos.contains("tikr"));
    }

    #[test]
    fn test_propn_without_tags_is_foreign() {
        let raw = lines(&["st:Reuters po:noun_proper_name"]);
        let cands = adapt("Reuters", &raw).unwrap();
        assert_eq!(cands[0].upos, "X");
        assert_eq!(cands[0].xpos, "užs.");
        assert_eq!(cands[0].feats, "Foreign=Yes");
    }

    #[test]
    fn test_unmapped_category_discarded() {
        let raw = lines(&[
            "st:x po:interjection_unknown is:Masc",
            "st:namas po:noun is:Masc_Sg_Nom",
        ]);
        let cands = adapt("namas", &raw).unwrap();
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].lemma, "namas");
    }

    #[test]
    fn test_all_unmapped_is_absent() {
        let raw = lines(&["st:x po:interjection_unknown"]);
        assert!(adapt("x", &raw).is_none());
    }

    #[test]
    fn test_preposition_case_correction() {
        let raw = lines(&["st:su po:preposition_Inst"]);
        let cands = adapt("su", &raw).unwrap();
        assert_eq!(cands[0].upos, "ADP");
        assert_eq!(cands[0].xpos, "prl.Įn.");
        assert_eq!(cands[0].feats, "AdpType=Prep|Case=Ins");
    }

    #[test]
    fn test_particle() {
        let raw = lines(&["st:gi po:particle"]);
        let cands = adapt("gi", &raw).unwrap();
        assert_eq!(cands[0].xpos, "dll.");
        assert_eq!(cands[0].feats, "_");
    }

    #[test]
    fn test_acronym_and_abbreviation() {
        let raw = lines(&["st:JAV po:acronym"]);
        let cands = adapt("JAV", &raw).unwrap();
        assert_eq!(cands[0].xpos, "akr.");
        assert_eq!(cands[0].feats, "Abbr=Yes");

        let raw = lines(&["st:pvz po:abbreviation"]);
        let cands = adapt("pvz", &raw).unwrap();
        assert_eq!(cands[0].xpos, "sutr.");
    }

    #[test]
    fn test_third_person_emitted_twice() {
        let raw = lines(&["st:eiti po:verb is:Pres_Indic_III_Act"]);
        let cands = adapt("eina", &raw).unwrap();
        assert_eq!(cands.len(), 2);
        assert!(cands[0].xpos.contains("vns"));
        assert!(cands[1].xpos.contains("dgs"));
        assert!(cands[0].feats.contains("Person=3"));
    }

    #[test]
    fn test_converb_becomes_adverb() {
        let raw = lines(&["st:juoktis po:verb_reflexive is:Vadv"]);
        let cands = adapt("juokiantis", &raw).unwrap();
        assert_eq!(cands[0].upos, "ADV");
        assert_eq!(cands[0].feats, "Polarity=Pos|VerbForm=Conv");
    }

    #[test]
    fn test_supine_skipped() {
        let raw = lines(&["st:eiti po:verb is:Supine"]);
        assert!(adapt("eitų", &raw).is_none());
    }

    #[test]
    fn test_resultative_participle() {
        let raw = lines(&["st:rašyti po:verb is:Past_Part_Pass_Fem_Sg_Nom"]);
        let cands = adapt("rašyta", &raw).unwrap();
        assert!(cands[0].xpos.contains("būt."));
        assert!(!cands[0].feats.contains("Tense"));
    }

    #[test]
    fn test_negative_reflexive_verb_flags() {
        let raw = lines(&["st:juoktis po:verb_reflexive_negative is:Pres_Indic_II_Sg_Act"]);
        let cands = adapt("nesijuoki", &raw).unwrap();
        assert!(cands[0].xpos.contains("sngr"));
        assert!(cands[0].xpos.contains("neig"));
        assert!(cands[0].feats.contains("Polarity=Neg"));
        assert!(cands[0].feats.contains("Reflex=Yes"));
    }
}

//! Numeral declension and paradigm generation
//!
//! A lemma is first classified into a lexeme class by closed membership and
//! suffix tests; the class selects a transform table in [`tables`]. A table
//! miss is a missing paradigm cell and yields `None` — paradigm generation
//! is partial by design, and `None` is never the unchanged lemma.
//!
//! Multiword lemmas (`dvidešimt vienas`) decline their final word; the
//! invariant head words pass through unchanged.

mod tables;

use crate::attr::{Case, Degree, Gender, NumType, Number};
use crate::conllu::LexiconRow;
use crate::record::{Numeral, Record};
use tracing::debug;

/// Which irregular small-cardinal row a lemma belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallKind {
    Two,
    Three,
    FourToNine,
    Eji,
    Eri,
}

/// Lexeme class selecting the declension table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeClass {
    /// 11–19, `-lika`; uninflected for gender and number
    Teen,
    /// 2–9 and the `-eji`/`-eri` cardinal plurals; gendered, no number slot
    SmallCardinal(SmallKind),
    /// `vienas`, irregular per cell
    One,
    /// `-dešimtis` feminine tens stems
    Tens,
    /// `tūkstantis`, t→č stem alternation
    Thousand,
    /// `-etas` collectives and the hundred group, masculine only
    HundredGroup,
    /// generic `-as` declinable stems, degree-sensitive
    StemAs,
    /// generic `-is` declinable stems
    StemIs,
}

const FOUR_TO_NINE: [&str; 6] = ["keturi", "penki", "šeši", "septyni", "aštuoni", "devyni"];
const HUNDRED_GROUP: [&str; 3] = ["šimtas", "milijonas", "milijardas"];

/// Classify a lemma; check order is part of the contract, since the suffix
/// tests overlap (`dešimtis` and `tūkstantis` both end in `is`)
pub fn classify(lemma: &str, num_type: NumType) -> Option<LexemeClass> {
    if lemma.ends_with("lika") {
        return Some(LexemeClass::Teen);
    }
    if lemma == "du" {
        return Some(LexemeClass::SmallCardinal(SmallKind::Two));
    }
    if lemma == "trys" {
        return Some(LexemeClass::SmallCardinal(SmallKind::Three));
    }
    if FOUR_TO_NINE.contains(&lemma) {
        return Some(LexemeClass::SmallCardinal(SmallKind::FourToNine));
    }
    if lemma.ends_with("eji") {
        return Some(LexemeClass::SmallCardinal(SmallKind::Eji));
    }
    if lemma.ends_with("eri") {
        return Some(LexemeClass::SmallCardinal(SmallKind::Eri));
    }
    if lemma == "vienas" {
        return Some(LexemeClass::One);
    }
    if lemma.ends_with("dešimtis") {
        return Some(LexemeClass::Tens);
    }
    if lemma == "tūkstantis" {
        return Some(LexemeClass::Thousand);
    }
    if lemma.ends_with("etas")
        || lemma == "ketvertas"
        || (num_type == NumType::Cardinal && HUNDRED_GROUP.contains(&lemma))
    {
        return Some(LexemeClass::HundredGroup);
    }
    if lemma.ends_with("as") {
        return Some(LexemeClass::StemAs);
    }
    if lemma.ends_with("is") {
        return Some(LexemeClass::StemIs);
    }
    None
}

/// Decline a numeral into the requested (case, number, gender) slot
///
/// Unsupplied number and gender fall back to the seed's own values; a slot
/// the lexeme class cannot fill returns `None`.
pub fn decline(
    num: &Numeral,
    case: Case,
    number: Option<Number>,
    gender: Option<Gender>,
) -> Option<Numeral> {
    let (head, last) = split_lemma(&num.lemma);
    let class = classify(last, num.num_type)?;

    let slot_number = number.or(num.number);
    let slot_gender = gender.or(num.gender);
    // masculine is the fallback paradigm when no gender is known
    let table_gender = match slot_gender {
        Some(Gender::Feminine) => Gender::Feminine,
        _ => Gender::Masculine,
    };
    let table_number = slot_number.unwrap_or(Number::Singular);
    let degree = num.degree.unwrap_or(Degree::Positive);

    let word = match class {
        LexemeClass::Teen => tables::teen(case)?.apply(last),
        LexemeClass::SmallCardinal(kind) => {
            // the 2–9 row carries no number slot; gender defaults feminine
            // to mirror the paired masculine nominatives being lemmas
            let g = match slot_gender {
                Some(Gender::Masculine) => Gender::Masculine,
                _ => Gender::Feminine,
            };
            tables::small(kind, case, g)?.apply(last)
        }
        LexemeClass::One => tables::vienas(case, table_number, table_gender)?.to_string(),
        LexemeClass::Tens => {
            if table_gender != Gender::Feminine {
                return None;
            }
            tables::tens(case, table_number)?.apply(last)
        }
        LexemeClass::Thousand => {
            if table_gender == Gender::Feminine {
                return None;
            }
            tables::thousand(case, table_number)?.apply(last)
        }
        LexemeClass::HundredGroup => {
            if table_gender == Gender::Feminine {
                return None;
            }
            match tables::hundred_group(case, table_number) {
                Some(t) => t.apply(last),
                None => {
                    let suffix = tables::stem_as(case, table_number, table_gender, degree)?;
                    strip_append(last, 2, suffix)
                }
            }
        }
        LexemeClass::StemAs => {
            let suffix = tables::stem_as(case, table_number, table_gender, degree)?;
            strip_append(last, 2, suffix)
        }
        LexemeClass::StemIs => {
            let suffix = tables::stem_is(case, table_number, table_gender)?;
            strip_append(last, 2, suffix)
        }
    };

    let mut out = num.clone();
    out.word = join_head(head, &word);
    out.gender = slot_gender;
    out.number = slot_number;
    out.case = Some(case);
    Some(out)
}

/// Decline an ordinal numeral into its pronominal (definite) paradigm
///
/// Non-ordinals have no definite forms; comparative ordinals use the
/// `-esnis` stem and its own table.
pub fn define_ordinal(
    num: &Numeral,
    gender: Gender,
    number: Number,
    case: Case,
) -> Option<Numeral> {
    if num.num_type != NumType::Ordinal {
        return None;
    }
    let (head, last) = split_lemma(&num.lemma);

    let word = match num.degree {
        Some(Degree::Comparative) => {
            let stem = strip_append(last, 2, "esnis");
            tables::definite_comparative(case, number, gender)?.apply(&stem)
        }
        Some(Degree::Superlative) => {
            // the rewritten stem ends in -ias, so the soft plural suffixes apply
            let stem = strip_append(last, 2, "iausias");
            let soft = stem.ends_with("ias");
            tables::definite(case, number, gender, soft)?.apply(&stem)
        }
        _ => {
            if !last.ends_with("as") {
                return None;
            }
            let soft = last.ends_with("ias");
            tables::definite(case, number, gender, soft)?.apply(last)
        }
    };

    let mut out = num.clone();
    out.word = join_head(head, &word);
    out.gender = Some(gender);
    out.number = Some(number);
    out.case = Some(case);
    out.definite = true;
    Some(out)
}

const CASES: [Case; 6] = [
    Case::Nominative,
    Case::Genitive,
    Case::Dative,
    Case::Accusative,
    Case::Instrumental,
    Case::Locative,
];
const NUMBERS: [Number; 2] = [Number::Singular, Number::Plural];
const GENDERS: [Gender; 2] = [Gender::Masculine, Gender::Feminine];

/// Generate every inflected surface form of a numeral lexeme as lexicon rows
///
/// Missing cells are skipped silently. Multiword surfaces are split into one
/// row per token; non-final tokens carry `Hyph=Yes` in their features.
pub fn generate_paradigm(seed: &Numeral) -> Vec<LexiconRow> {
    let (_, last) = split_lemma(&seed.lemma);
    let Some(class) = classify(last, seed.num_type) else {
        debug!(lemma = %seed.lemma, "no declension class, skipping lexeme");
        return Vec::new();
    };

    let mut records = Vec::new();
    match class {
        LexemeClass::Teen => {
            for case in CASES {
                records.extend(decline(seed, case, None, None));
            }
        }
        LexemeClass::SmallCardinal(_) => {
            for gender in GENDERS {
                for case in CASES {
                    records.extend(decline(seed, case, None, Some(gender)));
                }
            }
        }
        _ => {
            for number in NUMBERS {
                for gender in GENDERS {
                    for case in CASES {
                        records.extend(decline(seed, case, Some(number), Some(gender)));
                    }
                }
            }
        }
    }
    if seed.num_type == NumType::Ordinal {
        for number in NUMBERS {
            for gender in GENDERS {
                for case in CASES {
                    records.extend(define_ordinal(seed, gender, number, case));
                }
            }
        }
    }

    let mut rows = Vec::new();
    for numeral in records {
        let record = Record::Numeral(numeral);
        let upos = record.upos();
        let xpos = record.xpos();
        let feats = record.ufeats();
        let tokens: Vec<&str> = record.word().split_whitespace().collect();
        let last_idx = tokens.len().saturating_sub(1);
        for (i, token) in tokens.iter().enumerate() {
            let token_feats = if i < last_idx {
                with_hyph(&feats)
            } else {
                feats.clone()
            };
            rows.push(LexiconRow::new(
                *token,
                record.lemma(),
                upos,
                &xpos,
                &token_feats,
            ));
        }
    }
    rows
}

/// Append `Hyph=Yes` to a feature string, keeping keys sorted
fn with_hyph(feats: &str) -> String {
    if feats == "_" {
        return "Hyph=Yes".to_string();
    }
    let mut pairs: Vec<&str> = feats.split('|').collect();
    pairs.push("Hyph=Yes");
    pairs.sort_unstable();
    pairs.join("|")
}

fn split_lemma(lemma: &str) -> (Option<&str>, &str) {
    match lemma.rsplit_once(' ') {
        Some((head, last)) => (Some(head), last),
        None => (None, lemma),
    }
}

fn join_head(head: Option<&str>, word: &str) -> String {
    match head {
        Some(head) => format!("{head} {word}"),
        None => word.to_string(),
    }
}

fn strip_append(lemma: &str, strip: usize, suffix: &str) -> String {
    let keep = lemma.chars().count().saturating_sub(strip);
    let mut word: String = lemma.chars().take(keep).collect();
    word.push_str(suffix);
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::NumForm;

    fn seed(lemma: &str, num_type: NumType) -> Numeral {
        Numeral::new(lemma, lemma, num_type).with_form(NumForm::Word)
    }

    #[test]
    fn test_teen_nominative_unchanged() {
        let n = seed("vienuolika", NumType::Cardinal);
        let out = decline(&n, Case::Nominative, None, None).unwrap();
        assert_eq!(out.word, "vienuolika");
        assert_eq!(out.case, Some(Case::Nominative));
        assert_eq!(out.gender, None);
    }

    #[test]
    fn test_teen_genitive() {
        let n = seed("vienuolika", NumType::Cardinal);
        let out = decline(&n, Case::Genitive, None, None).unwrap();
        assert_eq!(out.word, "vienuolikos");
    }

    #[test]
    fn test_two_masculine() {
        let mut n = seed("du", NumType::Cardinal);
        n.gender = Some(Gender::Masculine);
        let nom = decline(&n, Case::Nominative, None, Some(Gender::Masculine)).unwrap();
        assert_eq!(nom.word, "du");
        let gen = decline(&n, Case::Genitive, None, None).unwrap();
        assert_eq!(gen.word, "dviejų");
    }

    #[test]
    fn test_two_feminine() {
        let n = seed("du", NumType::Cardinal);
        let out = decline(&n, Case::Nominative, None, Some(Gender::Feminine)).unwrap();
        assert_eq!(out.word, "dvi");
    }

    #[test]
    fn test_thousand_stem_alternation() {
        let n = seed("tūkstantis", NumType::Cardinal);
        let gen = decline(&n, Case::Genitive, Some(Number::Singular), Some(Gender::Masculine))
            .unwrap();
        assert_eq!(gen.word, "tūkstančio");
        let acc = decline(&n, Case::Accusative, Some(Number::Singular), Some(Gender::Masculine))
            .unwrap();
        assert_eq!(acc.word, "tūkstantį");
        assert!(decline(&n, Case::Nominative, Some(Number::Singular), Some(Gender::Feminine))
            .is_none());
    }

    #[test]
    fn test_tens_feminine_only() {
        let n = seed("dvidešimtis", NumType::Fractional);
        let gen = decline(&n, Case::Genitive, Some(Number::Singular), Some(Gender::Feminine))
            .unwrap();
        assert_eq!(gen.word, "dvidešimties");
        assert!(
            decline(&n, Case::Genitive, Some(Number::Singular), Some(Gender::Masculine)).is_none()
        );
    }

    #[test]
    fn test_hundred_group_cells() {
        let n = seed("šimtas", NumType::Cardinal);
        let dat = decline(&n, Case::Dative, Some(Number::Singular), Some(Gender::Masculine))
            .unwrap();
        assert_eq!(dat.word, "šimtui");
        let loc_pl = decline(&n, Case::Locative, Some(Number::Plural), Some(Gender::Masculine))
            .unwrap();
        assert_eq!(loc_pl.word, "šimtuose");
        assert!(decline(&n, Case::Dative, Some(Number::Singular), Some(Gender::Feminine))
            .is_none());
    }

    #[test]
    fn test_ordinal_declension() {
        let n = seed("pirmas", NumType::Ordinal);
        let gen = decline(&n, Case::Genitive, Some(Number::Singular), Some(Gender::Masculine))
            .unwrap();
        assert_eq!(gen.word, "pirmo");
        let fem = decline(&n, Case::Nominative, Some(Number::Singular), Some(Gender::Feminine))
            .unwrap();
        assert_eq!(fem.word, "pirma");
    }

    #[test]
    fn test_definite_ordinal() {
        let n = seed("pirmas", NumType::Ordinal);
        let nom = define_ordinal(&n, Gender::Masculine, Number::Singular, Case::Nominative)
            .unwrap();
        assert_eq!(nom.word, "pirmasis");
        assert!(nom.definite);
        let gen = define_ordinal(&n, Gender::Masculine, Number::Singular, Case::Genitive)
            .unwrap();
        assert_eq!(gen.word, "pirmojo");
        let nom_pl = define_ordinal(&n, Gender::Masculine, Number::Plural, Case::Nominative)
            .unwrap();
        assert_eq!(nom_pl.word, "pirmieji");
    }

    #[test]
    fn test_definite_rejects_cardinals() {
        let n = seed("du", NumType::Cardinal);
        assert!(define_ordinal(&n, Gender::Masculine, Number::Singular, Case::Nominative)
            .is_none());
    }

    #[test]
    fn test_definite_superlative_plural_uses_soft_suffixes() {
        let mut n = seed("pirmas", NumType::Ordinal);
        n.degree = Some(Degree::Superlative);
        let nom = define_ordinal(&n, Gender::Masculine, Number::Plural, Case::Nominative)
            .unwrap();
        assert_eq!(nom.word, "pirmiausieji");
        let dat = define_ordinal(&n, Gender::Masculine, Number::Plural, Case::Dative)
            .unwrap();
        assert_eq!(dat.word, "pirmiausiesiems");
        let sing = define_ordinal(&n, Gender::Masculine, Number::Singular, Case::Nominative)
            .unwrap();
        assert_eq!(sing.word, "pirmiausiasis");
    }

    #[test]
    fn test_definite_comparative_stem() {
        let mut n = seed("pirmas", NumType::Ordinal);
        n.degree = Some(Degree::Comparative);
        let nom = define_ordinal(&n, Gender::Masculine, Number::Singular, Case::Nominative)
            .unwrap();
        assert_eq!(nom.word, "pirmesnysis");
    }

    #[test]
    fn test_multiword_declines_final_word() {
        let n = seed("dvidešimt vienas", NumType::Cardinal);
        let gen = decline(&n, Case::Genitive, Some(Number::Singular), Some(Gender::Masculine))
            .unwrap();
        assert_eq!(gen.word, "dvidešimt vieno");
    }

    #[test]
    fn test_paradigm_rows_and_hyph_flag() {
        let n = seed("dvidešimt vienas", NumType::Cardinal);
        let rows = generate_paradigm(&n);
        assert!(!rows.is_empty());
        let head = rows.iter().find(|r| r.word == "dvidešimt").unwrap();
        assert!(head.feats.contains("Hyph=Yes"));
        let tail = rows.iter().find(|r| r.word == "vieno").unwrap();
        assert!(!tail.feats.contains("Hyph=Yes"));
        // keys stay sorted after the flag is spliced in
        let keys: Vec<&str> = head
            .feats
            .split('|')
            .map(|kv| kv.split('=').next().unwrap())
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_unknown_lexeme_generates_nothing() {
        let n = seed("septyniese", NumType::Cardinal);
        assert!(generate_paradigm(&n).is_empty());
    }
}

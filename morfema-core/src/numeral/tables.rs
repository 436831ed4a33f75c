//! Declension transform tables
//!
//! One table per lexeme class, keyed by the requested (case, number, gender,
//! degree) slot. A table miss means the cell does not exist in the paradigm
//! (the vocative and illative never do), which is distinct from the identity
//! transform returned for uninflected cells.

use crate::attr::{Case, Degree, Gender, Number};
use crate::numeral::SmallKind;

/// A single declension step applied to a lemma
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transform {
    /// The lemma is the surface form
    Keep,
    /// A whole-word irregular form
    Literal(&'static str),
    /// Strip `strip` trailing characters, then append `suffix`
    Suffix {
        strip: usize,
        suffix: &'static str,
    },
}

impl Transform {
    pub(crate) fn apply(&self, lemma: &str) -> String {
        match self {
            Transform::Keep => lemma.to_string(),
            Transform::Literal(word) => (*word).to_string(),
            Transform::Suffix { strip, suffix } => {
                let keep = lemma.chars().count().saturating_sub(*strip);
                let mut word: String = lemma.chars().take(keep).collect();
                word.push_str(suffix);
                word
            }
        }
    }
}

const fn sfx(strip: usize, suffix: &'static str) -> Transform {
    Transform::Suffix { strip, suffix }
}

/// Teens (`-lika`), uninflected for gender and number
pub(crate) fn teen(case: Case) -> Option<Transform> {
    match case {
        Case::Nominative => Some(Transform::Keep),
        Case::Genitive => Some(sfx(1, "os")),
        Case::Dative => Some(sfx(1, "ai")),
        Case::Accusative => Some(sfx(1, "ą")),
        Case::Instrumental => Some(sfx(1, "a")),
        Case::Locative => Some(sfx(1, "oje")),
        Case::Vocative | Case::Illative => None,
    }
}

/// Small gendered cardinals (2–9) and the `-eji`/`-eri` cardinal plurals
pub(crate) fn small(kind: SmallKind, case: Case, gender: Gender) -> Option<Transform> {
    use Case::*;
    use SmallKind::*;
    use Transform::{Keep, Literal};
    let t = match (gender, case, kind) {
        (Gender::Feminine, ..) => match (case, kind) {
            (Nominative, Two) => Literal("dvi"),
            (Nominative, Three) => Literal("trys"),
            (Nominative, FourToNine) => sfx(0, "os"),
            (Nominative, Eji) => sfx(1, "os"),
            (Nominative, Eri) => sfx(0, "os"),
            (Genitive, Two) => Literal("dviejų"),
            (Genitive, Three) => Literal("trijų"),
            (Genitive, FourToNine) => sfx(0, "ų"),
            (Genitive, Eji) => sfx(1, "ų"),
            (Genitive, Eri) => sfx(0, "ų"),
            (Dative, Two) => Literal("dviem"),
            (Dative, Three) => Literal("trim"),
            (Dative, FourToNine) => sfx(0, "oms"),
            (Dative, Eji) => sfx(1, "oms"),
            (Dative, Eri) => sfx(0, "oms"),
            (Accusative, Two) => Literal("dvi"),
            (Accusative, Three) => Literal("tris"),
            (Accusative, FourToNine) => sfx(0, "as"),
            (Accusative, Eji) => sfx(1, "as"),
            (Accusative, Eri) => sfx(0, "as"),
            (Instrumental, Two) => Literal("dviem"),
            (Instrumental, Three) => Literal("trimis"),
            (Instrumental, FourToNine) => sfx(0, "omis"),
            (Instrumental, Eji) => sfx(1, "omis"),
            (Instrumental, Eri) => sfx(0, "omis"),
            (Locative, Two) => Literal("dviejose"),
            (Locative, Three) => Literal("trijose"),
            (Locative, FourToNine) => sfx(0, "ose"),
            (Locative, Eji) => sfx(1, "ose"),
            (Locative, Eri) => sfx(0, "ose"),
            (Vocative | Illative, _) => return None,
        },
        (_, Nominative, _) => Keep,
        (_, Genitive, Two) => Literal("dviejų"),
        (_, Genitive, Three) => Literal("trijų"),
        (_, Genitive, FourToNine) => sfx(0, "ų"),
        (_, Genitive, Eji) => sfx(1, "ų"),
        (_, Genitive, Eri) => sfx(0, "ų"),
        (_, Dative, Two) => Literal("dviem"),
        (_, Dative, Three) => Literal("trims"),
        (_, Dative, FourToNine | Eji | Eri) => sfx(0, "ems"),
        (_, Accusative, Two) => Literal("du"),
        (_, Accusative, Three) => Literal("tris"),
        (_, Accusative, FourToNine) => sfx(0, "s"),
        (_, Accusative, Eji) => sfx(1, "us"),
        (_, Accusative, Eri) => sfx(0, "us"),
        (_, Instrumental, Two) => Literal("dviem"),
        (_, Instrumental, Three) => Literal("trimis"),
        (_, Instrumental, FourToNine) => sfx(0, "ais"),
        (_, Instrumental, Eji) => sfx(1, "ais"),
        (_, Instrumental, Eri) => sfx(0, "ais"),
        (_, Locative, Two) => Literal("dviejuose"),
        (_, Locative, Three) => Literal("trijuose"),
        (_, Locative, FourToNine) => sfx(0, "uose"),
        (_, Locative, Eji) => sfx(1, "uose"),
        (_, Locative, Eri) => sfx(0, "uose"),
        (_, Vocative | Illative, _) => return None,
    };
    Some(t)
}

/// `vienas`, irregular cell-by-cell
pub(crate) fn vienas(case: Case, number: Number, gender: Gender) -> Option<&'static str> {
    use Case::*;
    let word = match (number, gender, case) {
        (Number::Singular, Gender::Feminine, Nominative) => "viena",
        (Number::Singular, Gender::Feminine, Genitive) => "vienos",
        (Number::Singular, Gender::Feminine, Dative) => "vienai",
        (Number::Singular, Gender::Feminine, Accusative) => "vieną",
        (Number::Singular, Gender::Feminine, Instrumental) => "viena",
        (Number::Singular, Gender::Feminine, Locative) => "vienoje",
        (Number::Singular, _, Nominative) => "vienas",
        (Number::Singular, _, Genitive) => "vieno",
        (Number::Singular, _, Dative) => "vienam",
        (Number::Singular, _, Accusative) => "vieną",
        (Number::Singular, _, Instrumental) => "vienu",
        (Number::Singular, _, Locative) => "viename",
        (Number::Plural, Gender::Feminine, Nominative) => "vienos",
        (Number::Plural, Gender::Feminine, Genitive) => "vienų",
        (Number::Plural, Gender::Feminine, Dative) => "vienoms",
        (Number::Plural, Gender::Feminine, Accusative) => "vienas",
        (Number::Plural, Gender::Feminine, Instrumental) => "vienomis",
        (Number::Plural, Gender::Feminine, Locative) => "vienose",
        (Number::Plural, _, Nominative) => "vieni",
        (Number::Plural, _, Genitive) => "vienų",
        (Number::Plural, _, Dative) => "vieniems",
        (Number::Plural, _, Accusative) => "vienus",
        (Number::Plural, _, Instrumental) => "vienais",
        (Number::Plural, _, Locative) => "vienuose",
        (_, _, Vocative | Illative) => return None,
    };
    Some(word)
}

/// Feminine tens stems (`-dešimtis`); the caller rejects masculine slots
pub(crate) fn tens(case: Case, number: Number) -> Option<Transform> {
    use Case::*;
    let t = match (number, case) {
        (Number::Singular, Nominative) => Transform::Keep,
        (Number::Singular, Genitive) => sfx(2, "ies"),
        (Number::Singular, Dative) => sfx(3, "čiai"),
        (Number::Singular, Accusative) => sfx(2, "į"),
        (Number::Singular, Instrumental) => sfx(2, "imi"),
        (Number::Singular, Locative) => sfx(2, "yje"),
        (Number::Plural, Nominative) => sfx(2, "ys"),
        (Number::Plural, Genitive) => sfx(3, "čių"),
        (Number::Plural, Dative) => sfx(2, "ims"),
        (Number::Plural, Accusative) => Transform::Keep,
        (Number::Plural, Instrumental) => sfx(2, "imis"),
        (Number::Plural, Locative) => sfx(2, "yse"),
        (_, Vocative | Illative) => return None,
    };
    Some(t)
}

/// `tūkstantis`, with the t→č stem alternation; masculine only
pub(crate) fn thousand(case: Case, number: Number) -> Option<Transform> {
    use Case::*;
    let t = match (number, case) {
        (Number::Singular, Nominative) => Transform::Keep,
        (Number::Singular, Genitive) => sfx(3, "čio"),
        (Number::Singular, Dative) => sfx(3, "čiui"),
        (Number::Singular, Accusative) => sfx(3, "tį"),
        (Number::Singular, Instrumental) => sfx(3, "čiu"),
        (Number::Singular, Locative) => sfx(3, "tyje"),
        (Number::Plural, Nominative) => sfx(3, "čiai"),
        (Number::Plural, Genitive) => sfx(3, "čių"),
        (Number::Plural, Dative) => sfx(3, "čiams"),
        (Number::Plural, Accusative) => sfx(3, "čius"),
        (Number::Plural, Instrumental) => sfx(3, "čiais"),
        (Number::Plural, Locative) => sfx(3, "čiuose"),
        (_, Vocative | Illative) => return None,
    };
    Some(t)
}

/// The `-etas`/hundred-group cells that deviate from the plain `-as`
/// declension; cells absent here fall back to [`stem_as`]
pub(crate) fn hundred_group(case: Case, number: Number) -> Option<Transform> {
    use Case::*;
    match (number, case) {
        (Number::Singular, Dative) => Some(sfx(2, "ui")),
        (Number::Singular, Locative) => Some(sfx(2, "e")),
        (Number::Plural, Nominative) => Some(sfx(2, "ai")),
        (Number::Plural, Genitive) => Some(sfx(2, "ų")),
        (Number::Plural, Dative) => Some(sfx(2, "ams")),
        (Number::Plural, Accusative) => Some(sfx(2, "us")),
        (Number::Plural, Instrumental) => Some(sfx(2, "ais")),
        _ => None,
    }
}

/// Generic `-as` stems; the suffix replaces the stripped `as` ending and
/// already carries the degree stem (`esn-`, `iausi-`)
pub(crate) fn stem_as(
    case: Case,
    number: Number,
    gender: Gender,
    degree: Degree,
) -> Option<&'static str> {
    use Case::*;
    use Degree::*;
    let suffix = match (number, gender, case, degree) {
        (Number::Singular, Gender::Feminine, Nominative, Positive) => "a",
        (Number::Singular, Gender::Feminine, Nominative, Comparative) => "esnė",
        (Number::Singular, Gender::Feminine, Nominative, Superlative) => "iausia",
        (Number::Singular, Gender::Feminine, Genitive, Positive) => "os",
        (Number::Singular, Gender::Feminine, Genitive, Comparative) => "esnės",
        (Number::Singular, Gender::Feminine, Genitive, Superlative) => "iausios",
        (Number::Singular, Gender::Feminine, Dative, Positive) => "ai",
        (Number::Singular, Gender::Feminine, Dative, Comparative) => "esnei",
        (Number::Singular, Gender::Feminine, Dative, Superlative) => "iausiai",
        (Number::Singular, Gender::Feminine, Accusative, Positive) => "ą",
        (Number::Singular, Gender::Feminine, Accusative, Comparative) => "esnę",
        (Number::Singular, Gender::Feminine, Accusative, Superlative) => "iausią",
        (Number::Singular, Gender::Feminine, Instrumental, Positive) => "a",
        (Number::Singular, Gender::Feminine, Instrumental, Comparative) => "esne",
        (Number::Singular, Gender::Feminine, Instrumental, Superlative) => "iausia",
        (Number::Singular, Gender::Feminine, Locative, Positive) => "oje",
        (Number::Singular, Gender::Feminine, Locative, Comparative) => "esnėje",
        (Number::Singular, Gender::Feminine, Locative, Superlative) => "iausioje",
        (Number::Singular, _, Nominative, Positive) => "as",
        (Number::Singular, _, Nominative, Comparative) => "esnis",
        (Number::Singular, _, Nominative, Superlative) => "iausias",
        (Number::Singular, _, Genitive, Positive) => "o",
        (Number::Singular, _, Genitive, Comparative) => "esnio",
        (Number::Singular, _, Genitive, Superlative) => "iausio",
        (Number::Singular, _, Dative, Positive) => "am",
        (Number::Singular, _, Dative, Comparative) => "esniam",
        (Number::Singular, _, Dative, Superlative) => "iausiam",
        (Number::Singular, _, Accusative, Positive) => "ą",
        (Number::Singular, _, Accusative, Comparative) => "esnį",
        (Number::Singular, _, Accusative, Superlative) => "iausią",
        (Number::Singular, _, Instrumental, Positive) => "u",
        (Number::Singular, _, Instrumental, Comparative) => "esniu",
        (Number::Singular, _, Instrumental, Superlative) => "iausiu",
        (Number::Singular, _, Locative, Positive) => "ame",
        (Number::Singular, _, Locative, Comparative) => "esniame",
        (Number::Singular, _, Locative, Superlative) => "iausiame",
        (Number::Plural, Gender::Feminine, Nominative, Positive) => "os",
        (Number::Plural, Gender::Feminine, Nominative, Comparative) => "esnės",
        (Number::Plural, Gender::Feminine, Nominative, Superlative) => "iausios",
        (Number::Plural, Gender::Feminine, Genitive, Positive) => "ų",
        (Number::Plural, Gender::Feminine, Genitive, Comparative) => "esnių",
        (Number::Plural, Gender::Feminine, Genitive, Superlative) => "iausių",
        (Number::Plural, Gender::Feminine, Dative, Positive) => "oms",
        (Number::Plural, Gender::Feminine, Dative, Comparative) => "esnėms",
        (Number::Plural, Gender::Feminine, Dative, Superlative) => "iausioms",
        (Number::Plural, Gender::Feminine, Accusative, Positive) => "as",
        (Number::Plural, Gender::Feminine, Accusative, Comparative) => "esnes",
        (Number::Plural, Gender::Feminine, Accusative, Superlative) => "iausias",
        (Number::Plural, Gender::Feminine, Instrumental, Positive) => "omis",
        (Number::Plural, Gender::Feminine, Instrumental, Comparative) => "esnėmis",
        (Number::Plural, Gender::Feminine, Instrumental, Superlative) => "iausiomis",
        (Number::Plural, Gender::Feminine, Locative, Positive) => "ose",
        (Number::Plural, Gender::Feminine, Locative, Comparative) => "esnėse",
        (Number::Plural, Gender::Feminine, Locative, Superlative) => "iausiose",
        (Number::Plural, _, Nominative, Positive) => "i",
        (Number::Plural, _, Nominative, Comparative) => "esni",
        (Number::Plural, _, Nominative, Superlative) => "iausi",
        (Number::Plural, _, Genitive, Positive) => "ų",
        (Number::Plural, _, Genitive, Comparative) => "esnių",
        (Number::Plural, _, Genitive, Superlative) => "iausių",
        (Number::Plural, _, Dative, Positive) => "iems",
        (Number::Plural, _, Dative, Comparative) => "esniems",
        (Number::Plural, _, Dative, Superlative) => "iausiems",
        (Number::Plural, _, Accusative, Positive) => "us",
        (Number::Plural, _, Accusative, Comparative) => "esnius",
        (Number::Plural, _, Accusative, Superlative) => "iausius",
        (Number::Plural, _, Instrumental, Positive) => "ais",
        (Number::Plural, _, Instrumental, Comparative) => "esniais",
        (Number::Plural, _, Instrumental, Superlative) => "iausiais",
        (Number::Plural, _, Locative, Positive) => "uose",
        (Number::Plural, _, Locative, Comparative) => "esniuose",
        (Number::Plural, _, Locative, Superlative) => "iausiuose",
        (_, _, Vocative | Illative, _) => return None,
    };
    Some(suffix)
}

/// Generic `-is` stems; the suffix replaces the stripped `is` ending
pub(crate) fn stem_is(case: Case, number: Number, gender: Gender) -> Option<&'static str> {
    use Case::*;
    let suffix = match (number, gender, case) {
        (Number::Singular, Gender::Feminine, Nominative) => "ė",
        (Number::Singular, Gender::Feminine, Genitive) => "ės",
        (Number::Singular, Gender::Feminine, Dative) => "ei",
        (Number::Singular, Gender::Feminine, Accusative) => "ę",
        (Number::Singular, Gender::Feminine, Instrumental) => "e",
        (Number::Singular, Gender::Feminine, Locative) => "ėje",
        (Number::Singular, _, Nominative) => "is",
        (Number::Singular, _, Genitive) => "io",
        (Number::Singular, _, Dative) => "iam",
        (Number::Singular, _, Accusative) => "į",
        (Number::Singular, _, Instrumental) => "iu",
        (Number::Singular, _, Locative) => "iame",
        (Number::Plural, Gender::Feminine, Nominative) => "ės",
        (Number::Plural, Gender::Feminine, Genitive) => "ių",
        (Number::Plural, Gender::Feminine, Dative) => "ėms",
        (Number::Plural, Gender::Feminine, Accusative) => "es",
        (Number::Plural, Gender::Feminine, Instrumental) => "ėmis",
        (Number::Plural, Gender::Feminine, Locative) => "ėse",
        (Number::Plural, _, Nominative) => "i",
        (Number::Plural, _, Genitive) => "ių",
        (Number::Plural, _, Dative) => "iems",
        (Number::Plural, _, Accusative) => "ius",
        (Number::Plural, _, Instrumental) => "iais",
        (Number::Plural, _, Locative) => "iuose",
        (_, _, Vocative | Illative) => return None,
    };
    Some(suffix)
}

/// The pronominal (definite) ordinal paradigm over an `-as`/`-ias` stem
pub(crate) fn definite(
    case: Case,
    number: Number,
    gender: Gender,
    soft_stem: bool,
) -> Option<Transform> {
    use Case::*;
    let t = match (number, gender, case) {
        (Number::Singular, Gender::Feminine, Nominative) => sfx(2, "oji"),
        (Number::Singular, Gender::Feminine, Genitive) => sfx(2, "osios"),
        (Number::Singular, Gender::Feminine, Dative) => sfx(2, "ajai"),
        (Number::Singular, Gender::Feminine, Accusative) => sfx(2, "ąją"),
        (Number::Singular, Gender::Feminine, Instrumental) => sfx(2, "ąja"),
        (Number::Singular, Gender::Feminine, Locative) => sfx(2, "ojoje"),
        (Number::Singular, _, Nominative) => sfx(0, "is"),
        (Number::Singular, _, Genitive) => sfx(2, "ojo"),
        (Number::Singular, _, Dative) => sfx(2, "ajam"),
        (Number::Singular, _, Accusative) => sfx(2, "ąjį"),
        (Number::Singular, _, Instrumental) => sfx(2, "uoju"),
        (Number::Singular, _, Locative) => sfx(2, "ajame"),
        (Number::Plural, Gender::Feminine, Nominative) => sfx(2, "osios"),
        (Number::Plural, Gender::Feminine, Genitive) => sfx(2, "ųjų"),
        (Number::Plural, Gender::Feminine, Dative) => sfx(2, "osioms"),
        (Number::Plural, Gender::Feminine, Accusative) => sfx(2, "ąsias"),
        (Number::Plural, Gender::Feminine, Instrumental) => sfx(2, "osiomis"),
        (Number::Plural, Gender::Feminine, Locative) => sfx(2, "osiose"),
        (Number::Plural, _, Nominative) => sfx(2, if soft_stem { "eji" } else { "ieji" }),
        (Number::Plural, _, Genitive) => sfx(2, "ųjų"),
        (Number::Plural, _, Dative) => sfx(2, if soft_stem { "esiems" } else { "iesiems" }),
        (Number::Plural, _, Accusative) => sfx(2, "uosius"),
        (Number::Plural, _, Instrumental) => sfx(2, "aisiais"),
        (Number::Plural, _, Locative) => sfx(2, "uosiuose"),
        (_, _, Vocative | Illative) => return None,
    };
    Some(t)
}

/// The pronominal paradigm over the comparative `-esnis` stem
pub(crate) fn definite_comparative(
    case: Case,
    number: Number,
    gender: Gender,
) -> Option<Transform> {
    use Case::*;
    let t = match (number, gender, case) {
        (Number::Singular, Gender::Feminine, Nominative) => sfx(2, "ioji"),
        (Number::Singular, Gender::Feminine, Genitive) => sfx(2, "iosios"),
        (Number::Singular, Gender::Feminine, Dative) => sfx(2, "iajai"),
        (Number::Singular, Gender::Feminine, Accusative) => sfx(2, "iąją"),
        (Number::Singular, Gender::Feminine, Instrumental) => sfx(2, "iąja"),
        (Number::Singular, Gender::Feminine, Locative) => sfx(2, "iojoje"),
        (Number::Singular, _, Nominative) => sfx(2, "ysis"),
        (Number::Singular, _, Genitive) => sfx(2, "iojo"),
        (Number::Singular, _, Dative) => sfx(2, "iajam"),
        (Number::Singular, _, Accusative) => sfx(2, "įjį"),
        (Number::Singular, _, Instrumental) => sfx(2, "iuoju"),
        (Number::Singular, _, Locative) => sfx(2, "iajame"),
        (Number::Plural, Gender::Feminine, Nominative) => sfx(2, "iosios"),
        (Number::Plural, Gender::Feminine, Genitive) => sfx(2, "iųjų"),
        (Number::Plural, Gender::Feminine, Dative) => sfx(2, "iosioms"),
        (Number::Plural, Gender::Feminine, Accusative) => sfx(2, "iąsias"),
        (Number::Plural, Gender::Feminine, Instrumental) => sfx(2, "iosiomis"),
        (Number::Plural, Gender::Feminine, Locative) => sfx(2, "iosiose"),
        (Number::Plural, _, Nominative) => sfx(2, "ieji"),
        (Number::Plural, _, Genitive) => sfx(2, "iųjų"),
        (Number::Plural, _, Dative) => sfx(2, "iesiems"),
        (Number::Plural, _, Accusative) => sfx(2, "iuosius"),
        (Number::Plural, _, Instrumental) => sfx(2, "iaisiais"),
        (Number::Plural, _, Locative) => sfx(2, "iuosiuose"),
        (_, _, Vocative | Illative) => return None,
    };
    Some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_strip_counts_characters() {
        // ą is two bytes; stripping must count characters, not bytes
        let t = sfx(2, "ies");
        assert_eq!(t.apply("dešimtis"), "dešimties");
        assert_eq!(sfx(3, "čio").apply("tūkstantis"), "tūkstančio");
    }

    #[test]
    fn test_missing_cells() {
        assert!(teen(Case::Vocative).is_none());
        assert!(hundred_group(Case::Genitive, Number::Singular).is_none());
        assert!(stem_as(
            Case::Illative,
            Number::Singular,
            Gender::Masculine,
            Degree::Positive
        )
        .is_none());
    }
}

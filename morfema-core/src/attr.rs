//! Closed attribute domains of the positional tagset
//!
//! Every attribute value carries two spellings: the compact tagset code
//! used inside XPOS strings (`code`) and the Universal Dependencies value
//! name used in UFeats (`ud`). Both directions are closed tables; a code
//! outside its table is rejected at the string boundary, so a constructed
//! value is valid by type.

use serde::{Deserialize, Serialize};

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $code:literal, $ud:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Parse the tagset code
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The compact tagset code used in XPOS strings
            pub fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// The Universal Dependencies value name
            pub fn ud(self) -> &'static str {
                match self {
                    $(Self::$variant => $ud,)+
                }
            }

            /// The attribute name, for diagnostics
            pub fn label() -> &'static str {
                $label
            }
        }
    };
}

attribute_enum! {
    /// Grammatical gender
    Gender, "gender" {
        Feminine => "mot", "Fem";
        Masculine => "vyr", "Masc";
        Neuter => "bev", "Neut";
    }
}

attribute_enum! {
    /// Grammatical number
    Number, "number" {
        Singular => "vns", "Sing";
        Plural => "dgs", "Plur";
    }
}

attribute_enum! {
    /// Grammatical case, including the illative still alive in spoken use
    Case, "case" {
        Nominative => "V", "Nom";
        Genitive => "K", "Gen";
        Dative => "N", "Dat";
        Accusative => "G", "Acc";
        Instrumental => "Įn", "Ins";
        Locative => "Vt", "Loc";
        Vocative => "Š", "Voc";
        Illative => "Il", "Il";
    }
}

attribute_enum! {
    /// Degree of comparison
    Degree, "degree" {
        Positive => "nelygin", "Pos";
        Comparative => "aukšt", "Cmp";
        Superlative => "aukšč", "Sup";
    }
}

attribute_enum! {
    /// Verb mood, with the necessitative kept as its own value
    Mood, "mood" {
        Indicative => "tiesiog", "Ind";
        Conditional => "tar", "Cnd";
        Imperative => "liep", "Imp";
        Necessitative => "reik", "Nec";
    }
}

attribute_enum! {
    /// Verb voice
    Voice, "voice" {
        Active => "veik", "Act";
        Passive => "neveik", "Pass";
    }
}

attribute_enum! {
    /// Verb form. The half-participle and the manner converb keep distinct
    /// tagset codes while both rendering the UD value `Conv`.
    VerbForm, "verb form" {
        Finite => "asm", "Fin";
        Participle => "dlv", "Part";
        Gerund => "pad", "Ger";
        GenitiveGerund => "padlv", "Ger";
        HalfParticiple => "pusd", "Conv";
        Infinitive => "bndr", "Inf";
        Converb => "būdn", "Conv";
    }
}

/// Verb tense
///
/// `PastResultative` is the collapsed code a passive past participle
/// carries instead of the generic past; its UFeats rendering is handled
/// by the codec, not by [`Tense::ud`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Present,
    Past,
    PastHabitual,
    Future,
    PastResultative,
}

impl Tense {
    /// Parse the tagset code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Tense::Present),
            "būt-k" => Some(Tense::Past),
            "būt-d" => Some(Tense::PastHabitual),
            "būs" => Some(Tense::Future),
            "būt" => Some(Tense::PastResultative),
            _ => None,
        }
    }

    /// The compact tagset code used in XPOS strings
    pub fn code(self) -> &'static str {
        match self {
            Tense::Present => "es",
            Tense::Past => "būt-k",
            Tense::PastHabitual => "būt-d",
            Tense::Future => "būs",
            Tense::PastResultative => "būt",
        }
    }

    /// The UD `Tense` value (every past flavour is plain `Past`)
    pub fn ud(self) -> &'static str {
        match self {
            Tense::Present => "Pres",
            Tense::Future => "Fut",
            Tense::Past | Tense::PastHabitual | Tense::PastResultative => "Past",
        }
    }

    /// The extra UD `Aspect` value some tenses imply
    pub fn aspect(self) -> Option<&'static str> {
        match self {
            Tense::Past => Some("Perf"),
            Tense::PastHabitual => Some("Hab"),
            _ => None,
        }
    }
}

attribute_enum! {
    /// Grammatical person
    Person, "person" {
        First => "1", "1";
        Second => "2", "2";
        Third => "3", "3";
    }
}

attribute_enum! {
    /// Numeral type
    NumType, "numeral type" {
        Cardinal => "kiek", "Card";
        Ordinal => "kelint", "Ord";
        Multiplicative => "daugin", "Mult";
        Collective => "kuopin", "Sets";
        Fractional => "trup", "Frac";
    }
}

attribute_enum! {
    /// Numeral surface form
    NumForm, "numeral form" {
        Digit => "arab", "Digit";
        Roman => "rom", "Roman";
        Combi => "mišr", "Combi";
        Word => "raid", "Word";
    }
}

attribute_enum! {
    /// Definiteness of participles (adjectives and numerals use a plain
    /// boolean flag instead; see the codec)
    Definiteness, "definiteness" {
        Definite => "įvardž", "Def";
        Indefinite => "neįvardž", "Ind";
    }
}

attribute_enum! {
    /// Polarity; positive is the unmarked default and is never rendered
    Polarity, "polarity" {
        Positive => "teig", "Pos";
        Negative => "neig", "Neg";
    }
}

/// One set attribute of a record, tagged with its kind
///
/// [`crate::Record::attributes`] returns these in the variant's canonical
/// XPOS order; the codec is the only consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr {
    Gender(Gender),
    Number(Number),
    Case(Case),
    Degree(Degree),
    Person(Person),
    Tense(Tense),
    Mood(Mood),
    Voice(Voice),
    VerbForm(VerbForm),
    NumForm(NumForm),
    NumType(NumType),
    Definiteness(Definiteness),
}

impl Attr {
    /// The tagset code of the wrapped value
    pub fn code(self) -> &'static str {
        match self {
            Attr::Gender(v) => v.code(),
            Attr::Number(v) => v.code(),
            Attr::Case(v) => v.code(),
            Attr::Degree(v) => v.code(),
            Attr::Person(v) => v.code(),
            Attr::Tense(v) => v.code(),
            Attr::Mood(v) => v.code(),
            Attr::Voice(v) => v.code(),
            Attr::VerbForm(v) => v.code(),
            Attr::NumForm(v) => v.code(),
            Attr::NumType(v) => v.code(),
            Attr::Definiteness(v) => v.code(),
        }
    }

    /// The UD feature key and value, if the attribute renders as one
    ///
    /// Tense is excluded: its rendering depends on sibling attributes and
    /// lives in the codec.
    pub fn ud_pair(self) -> Option<(&'static str, &'static str)> {
        match self {
            Attr::Gender(v) => Some(("Gender", v.ud())),
            Attr::Number(v) => Some(("Number", v.ud())),
            Attr::Case(v) => Some(("Case", v.ud())),
            Attr::Degree(v) => Some(("Degree", v.ud())),
            Attr::Person(v) => Some(("Person", v.ud())),
            Attr::Mood(v) => Some(("Mood", v.ud())),
            Attr::Voice(v) => Some(("Voice", v.ud())),
            Attr::VerbForm(v) => Some(("VerbForm", v.ud())),
            Attr::NumForm(v) => Some(("NumForm", v.ud())),
            Attr::NumType(v) => Some(("NumType", v.ud())),
            Attr::Definiteness(v) => Some(("Definite", v.ud())),
            Attr::Tense(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for case in [
            Case::Nominative,
            Case::Genitive,
            Case::Dative,
            Case::Accusative,
            Case::Instrumental,
            Case::Locative,
            Case::Vocative,
            Case::Illative,
        ] {
            assert_eq!(Case::from_code(case.code()), Some(case));
        }
        assert_eq!(Case::from_code("Įn"), Some(Case::Instrumental));
        assert_eq!(Case::from_code("xyz"), None);
    }

    #[test]
    fn test_tense_codes_are_distinct() {
        assert_eq!(Tense::from_code("būt"), Some(Tense::PastResultative));
        assert_eq!(Tense::from_code("būt-k"), Some(Tense::Past));
        assert_eq!(Tense::Past.ud(), "Past");
        assert_eq!(Tense::Past.aspect(), Some("Perf"));
        assert_eq!(Tense::PastResultative.aspect(), None);
    }

    #[test]
    fn test_converb_forms_share_ud_value() {
        assert_eq!(VerbForm::HalfParticiple.ud(), "Conv");
        assert_eq!(VerbForm::Converb.ud(), "Conv");
        assert_ne!(VerbForm::HalfParticiple.code(), VerbForm::Converb.code());
    }
}

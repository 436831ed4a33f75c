//! Typed morphosyntactic records
//!
//! One immutable value object per word analysis. Each part of speech is a
//! struct carrying exactly its declared attribute set; [`Record`] is the
//! tagged union over them. Transformations (declension, definiteness
//! derivation) always build a new record, nothing mutates in place.
//!
//! The single introspection point is [`Record::attributes`], which returns
//! the set value attributes in the variant's canonical positional order.
//! Boolean flags (proper, reflexive, definite, negative polarity) are not
//! attributes; the codec handles them per variant.

use crate::attr::{
    Attr, Case, Definiteness, Degree, Gender, Mood, NumForm, NumType, Number, Person, Polarity,
    Tense, VerbForm, Voice,
};
use serde::{Deserialize, Serialize};

/// The six POS kinds the positional tagset distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosKind {
    Noun,
    Verb,
    Adjective,
    Pronoun,
    Numeral,
    Adverb,
}

impl PosKind {
    /// The literal prefix token of this kind's XPOS strings
    pub fn prefix(self) -> &'static str {
        match self {
            PosKind::Noun => "dkt",
            PosKind::Verb => "vksm",
            PosKind::Adjective => "bdv",
            PosKind::Pronoun => "įv",
            PosKind::Numeral => "sktv",
            PosKind::Adverb => "prv",
        }
    }

    /// Reverse prefix lookup
    pub fn from_prefix(token: &str) -> Option<Self> {
        match token {
            "dkt" => Some(PosKind::Noun),
            "vksm" => Some(PosKind::Verb),
            "bdv" => Some(PosKind::Adjective),
            "įv" => Some(PosKind::Pronoun),
            "sktv" => Some(PosKind::Numeral),
            "prv" => Some(PosKind::Adverb),
            _ => None,
        }
    }

    /// Human-readable kind name, for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            PosKind::Noun => "noun",
            PosKind::Verb => "verb",
            PosKind::Adjective => "adjective",
            PosKind::Pronoun => "pronoun",
            PosKind::Numeral => "numeral",
            PosKind::Adverb => "adverb",
        }
    }
}

impl std::fmt::Display for PosKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A noun analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noun {
    pub word: String,
    pub lemma: String,
    pub gender: Option<Gender>,
    pub number: Option<Number>,
    pub case: Option<Case>,
    pub proper: bool,
    pub reflexive: bool,
}

impl Noun {
    /// Create a bare noun record; attributes default to unset
    pub fn new(word: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            gender: None,
            number: None,
            case: None,
            proper: false,
            reflexive: false,
        }
    }
}

/// A verb analysis (finite forms, participles, gerunds, infinitives)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    pub word: String,
    pub lemma: String,
    pub verb_form: Option<VerbForm>,
    pub number: Option<Number>,
    pub tense: Option<Tense>,
    pub person: Option<Person>,
    pub mood: Option<Mood>,
    pub gender: Option<Gender>,
    pub case: Option<Case>,
    pub reflexive: bool,
    /// Positive unless a negation prefix was seen
    pub polarity: Polarity,
    pub definiteness: Option<Definiteness>,
    pub voice: Option<Voice>,
}

impl Verb {
    /// Create a bare verb record; polarity defaults to positive
    pub fn new(word: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            verb_form: None,
            number: None,
            tense: None,
            person: None,
            mood: None,
            gender: None,
            case: None,
            reflexive: false,
            polarity: Polarity::Positive,
            definiteness: None,
            voice: None,
        }
    }
}

/// An adjective analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjective {
    pub word: String,
    pub lemma: String,
    pub gender: Option<Gender>,
    pub degree: Option<Degree>,
    pub number: Option<Number>,
    pub case: Option<Case>,
    pub definite: bool,
}

impl Adjective {
    /// Create a bare adjective record
    pub fn new(word: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            gender: None,
            degree: None,
            number: None,
            case: None,
            definite: false,
        }
    }
}

/// A pronoun analysis; gender, number and case are all required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronoun {
    pub word: String,
    pub lemma: String,
    pub gender: Gender,
    pub number: Number,
    pub case: Case,
}

impl Pronoun {
    /// Create a pronoun record; the type signature enforces the required
    /// attribute set
    pub fn new(
        word: impl Into<String>,
        lemma: impl Into<String>,
        gender: Gender,
        number: Number,
        case: Case,
    ) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            gender,
            number,
            case,
        }
    }
}

/// A numeral analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numeral {
    pub word: String,
    pub lemma: String,
    pub num_form: Option<NumForm>,
    pub num_type: NumType,
    pub gender: Option<Gender>,
    pub number: Option<Number>,
    pub case: Option<Case>,
    /// Pronominal (definite) paradigm member
    pub definite: bool,
    pub degree: Option<Degree>,
}

impl Numeral {
    /// Create a bare numeral record of the given type
    pub fn new(word: impl Into<String>, lemma: impl Into<String>, num_type: NumType) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            num_form: None,
            num_type,
            gender: None,
            number: None,
            case: None,
            definite: false,
            degree: None,
        }
    }

    /// Builder-style numeral form setter
    pub fn with_form(mut self, num_form: NumForm) -> Self {
        self.num_form = Some(num_form);
        self
    }

    /// Builder-style gender setter
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Builder-style degree setter
    pub fn with_degree(mut self, degree: Degree) -> Self {
        self.degree = Some(degree);
        self
    }
}

/// An adverb analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adverb {
    pub word: String,
    pub lemma: String,
    /// Positive unless marked comparative or superlative
    pub degree: Degree,
    /// UD `PronType` value for pronominal adverbs; the positional tagset
    /// has no code for it, so it survives only in UFeats
    pub pron_type: Option<String>,
}

impl Adverb {
    /// Create an adverb record; degree defaults to positive
    pub fn new(word: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            degree: Degree::Positive,
            pron_type: None,
        }
    }
}

/// A word's morphosyntactic identity, tagged by part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    Noun(Noun),
    Verb(Verb),
    Adjective(Adjective),
    Pronoun(Pronoun),
    Numeral(Numeral),
    Adverb(Adverb),
}

impl Record {
    /// The POS kind of this record
    pub fn kind(&self) -> PosKind {
        match self {
            Record::Noun(_) => PosKind::Noun,
            Record::Verb(_) => PosKind::Verb,
            Record::Adjective(_) => PosKind::Adjective,
            Record::Pronoun(_) => PosKind::Pronoun,
            Record::Numeral(_) => PosKind::Numeral,
            Record::Adverb(_) => PosKind::Adverb,
        }
    }

    /// The surface form
    pub fn word(&self) -> &str {
        match self {
            Record::Noun(r) => &r.word,
            Record::Verb(r) => &r.word,
            Record::Adjective(r) => &r.word,
            Record::Pronoun(r) => &r.word,
            Record::Numeral(r) => &r.word,
            Record::Adverb(r) => &r.word,
        }
    }

    /// The dictionary base form
    pub fn lemma(&self) -> &str {
        match self {
            Record::Noun(r) => &r.lemma,
            Record::Verb(r) => &r.lemma,
            Record::Adjective(r) => &r.lemma,
            Record::Pronoun(r) => &r.lemma,
            Record::Numeral(r) => &r.lemma,
            Record::Adverb(r) => &r.lemma,
        }
    }

    /// The set value attributes, in the variant's canonical XPOS order
    ///
    /// This is the only generic introspection the model offers; boolean
    /// flags are deliberately excluded.
    pub fn attributes(&self) -> Vec<Attr> {
        let mut attrs = Vec::new();
        match self {
            Record::Noun(r) => {
                push(&mut attrs, r.gender.map(Attr::Gender));
                push(&mut attrs, r.number.map(Attr::Number));
                push(&mut attrs, r.case.map(Attr::Case));
            }
            Record::Verb(r) => {
                push(&mut attrs, r.gender.map(Attr::Gender));
                push(&mut attrs, r.number.map(Attr::Number));
                push(&mut attrs, r.person.map(Attr::Person));
                push(&mut attrs, r.case.map(Attr::Case));
                push(&mut attrs, r.tense.map(Attr::Tense));
                push(&mut attrs, r.mood.map(Attr::Mood));
                push(&mut attrs, r.voice.map(Attr::Voice));
                push(&mut attrs, r.verb_form.map(Attr::VerbForm));
            }
            Record::Adjective(r) => {
                push(&mut attrs, r.degree.map(Attr::Degree));
                push(&mut attrs, r.gender.map(Attr::Gender));
                push(&mut attrs, r.number.map(Attr::Number));
                push(&mut attrs, r.case.map(Attr::Case));
            }
            Record::Pronoun(r) => {
                attrs.push(Attr::Gender(r.gender));
                attrs.push(Attr::Number(r.number));
                attrs.push(Attr::Case(r.case));
            }
            Record::Numeral(r) => {
                push(&mut attrs, r.num_form.map(Attr::NumForm));
                attrs.push(Attr::NumType(r.num_type));
                push(&mut attrs, r.degree.map(Attr::Degree));
                push(&mut attrs, r.gender.map(Attr::Gender));
                push(&mut attrs, r.number.map(Attr::Number));
                push(&mut attrs, r.case.map(Attr::Case));
            }
            Record::Adverb(r) => {
                attrs.push(Attr::Degree(r.degree));
            }
        }
        attrs
    }
}

fn push(attrs: &mut Vec<Attr>, attr: Option<Attr>) {
    if let Some(a) = attr {
        attrs.push(a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order_is_positional() {
        let mut num = Numeral::new("pirmas", "pirmas", NumType::Ordinal)
            .with_form(NumForm::Word)
            .with_gender(Gender::Masculine);
        num.number = Some(Number::Singular);
        num.case = Some(Case::Nominative);
        let rec = Record::Numeral(num);
        let codes: Vec<_> = rec.attributes().iter().map(|a| a.code()).collect();
        assert_eq!(codes, vec!["raid", "kelint", "vyr", "vns", "V"]);
    }

    #[test]
    fn test_pronoun_requires_full_slot() {
        let p = Pronoun::new(
            "jis",
            "jis",
            Gender::Masculine,
            Number::Singular,
            Case::Nominative,
        );
        let rec = Record::Pronoun(p);
        assert_eq!(rec.attributes().len(), 3);
    }

    #[test]
    fn test_defaults() {
        let v = Verb::new("eina", "eiti");
        assert_eq!(v.polarity, Polarity::Positive);
        assert!(!v.reflexive);
        let a = Adverb::new("greitai", "greitai");
        assert_eq!(a.degree, Degree::Positive);
    }
}

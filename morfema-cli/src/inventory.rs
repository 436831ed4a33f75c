//! Lexeme inventory loading
//!
//! The `generate` command declines every lexeme in its inventory. An
//! inventory file is line-based: `lemma<TAB>num_type[<TAB>degree]`, with
//! `#` comments and blank lines ignored. The numeral type and degree use
//! the tagset codes (`kiek`, `kelint`, `daugin`, `kuopin`, `trup`;
//! `nelygin`, `aukšt`, `aukšč`). When no file is given, a built-in list
//! covering the common numeral lexemes is used.

use crate::error::CliError;
use morfema_core::{Degree, NumForm, NumType, Numeral};

/// The built-in lexeme list: (lemma, type code, degree code)
const DEFAULT_INVENTORY: &[(&str, &str, Option<&str>)] = &[
    // cardinals 1–9
    ("vienas", "kiek", None),
    ("du", "kiek", None),
    ("trys", "kiek", None),
    ("keturi", "kiek", None),
    ("penki", "kiek", None),
    ("šeši", "kiek", None),
    ("septyni", "kiek", None),
    ("aštuoni", "kiek", None),
    ("devyni", "kiek", None),
    // teens
    ("vienuolika", "kiek", None),
    ("dvylika", "kiek", None),
    ("trylika", "kiek", None),
    ("keturiolika", "kiek", None),
    ("penkiolika", "kiek", None),
    ("šešiolika", "kiek", None),
    ("septyniolika", "kiek", None),
    ("aštuoniolika", "kiek", None),
    ("devyniolika", "kiek", None),
    // round numbers
    ("dešimtis", "kiek", None),
    ("šimtas", "kiek", None),
    ("tūkstantis", "kiek", None),
    ("milijonas", "kiek", None),
    ("milijardas", "kiek", None),
    // plural-only cardinals
    ("dveji", "daugin", None),
    ("treji", "daugin", None),
    ("ketveri", "daugin", None),
    ("penkeri", "daugin", None),
    ("šešeri", "daugin", None),
    ("septyneri", "daugin", None),
    ("aštuoneri", "daugin", None),
    ("devyneri", "daugin", None),
    // collectives
    ("dvejetas", "kuopin", None),
    ("trejetas", "kuopin", None),
    ("ketvertas", "kuopin", None),
    ("penketas", "kuopin", None),
    ("šešetas", "kuopin", None),
    ("septynetas", "kuopin", None),
    ("aštuonetas", "kuopin", None),
    ("devynetas", "kuopin", None),
    // ordinals
    ("pirmas", "kelint", None),
    ("antras", "kelint", None),
    ("trečias", "kelint", None),
    ("ketvirtas", "kelint", None),
    ("penktas", "kelint", None),
    ("šeštas", "kelint", None),
    ("septintas", "kelint", None),
    ("aštuntas", "kelint", None),
    ("devintas", "kelint", None),
    ("dešimtas", "kelint", None),
    ("dvidešimt pirmas", "kelint", None),
];

/// The built-in lexeme list as paradigm seeds
pub fn default_inventory() -> Vec<Numeral> {
    DEFAULT_INVENTORY
        .iter()
        .map(|(lemma, num_type, degree)| {
            let num_type = NumType::from_code(num_type).unwrap_or(NumType::Cardinal);
            let mut seed = Numeral::new(*lemma, *lemma, num_type).with_form(NumForm::Word);
            seed.degree = degree.and_then(Degree::from_code);
            seed
        })
        .collect()
}

/// Parse an inventory file's contents into paradigm seeds
pub fn parse_inventory(contents: &str) -> Result<Vec<Numeral>, CliError> {
    let mut seeds = Vec::new();
    for (idx, raw_line) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let lemma = fields.next().unwrap_or_default();
        let type_code = fields.next().ok_or_else(|| CliError::InvalidInventory {
            line: line_no,
            message: "expected lemma<TAB>num_type".to_string(),
        })?;
        let num_type =
            NumType::from_code(type_code).ok_or_else(|| CliError::InvalidInventory {
                line: line_no,
                message: format!("unknown numeral type {type_code:?}"),
            })?;
        let mut seed = Numeral::new(lemma, lemma, num_type).with_form(NumForm::Word);
        if let Some(degree_code) = fields.next() {
            let degree =
                Degree::from_code(degree_code).ok_or_else(|| CliError::InvalidInventory {
                    line: line_no,
                    message: format!("unknown degree {degree_code:?}"),
                })?;
            seed.degree = Some(degree);
        }
        seeds.push(seed);
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inventory_is_non_empty() {
        let seeds = default_inventory();
        assert!(seeds.len() > 40);
        assert!(seeds.iter().all(|s| s.num_form == Some(NumForm::Word)));
    }

    #[test]
    fn test_parse_inventory() {
        let text = "# ordinals\npirmas\tkelint\n\ndu\tkiek\nantras\tkelint\taukšč\n";
        let seeds = parse_inventory(text).unwrap();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].lemma, "pirmas");
        assert_eq!(seeds[0].num_type, NumType::Ordinal);
        assert_eq!(seeds[2].degree, Some(Degree::Superlative));
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let err = parse_inventory("du\tnope\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_parse_rejects_missing_type() {
        assert!(parse_inventory("du\n").is_err());
    }
}

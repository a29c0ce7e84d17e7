//! Pattern document definitions: vehicle plates, email addresses and phones.

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::attributes::{slice, slice_number};
use crate::engine::{format_phone, AttributeExtractor, Format, PatternMatcher};
use crate::pipeline::PatternSpec;

use super::tables::DDD_STATES;

lazy_static! {
    // Old Brazilian (ABC-1234) and Mercosul (ABC1D23) plates
    pub static ref PLATE_PATTERN: Regex = Regex::new(
        r"[a-zA-Z]{3}\s?\-?[0-9][A-Za-z0-9][0-9]{2}"
    ).unwrap();

    pub static ref EMAIL_PATTERN: Regex = Regex::new(
        r"[a-zA-Z0-9_.-]+@[a-zA-Z0-9-]+\.[a-z]+(\.[a-z]+)?(\.[a-z]+)?"
    ).unwrap();

    // Optional DDD in assigned ranges, then an 8 or 9 digit subscriber number
    pub static ref PHONE_PATTERN: Regex = Regex::new(
        r"(?:\(?(?:[14689][1-9]|2[12478]|3[1234578]|5[1345]|7[134579])\)?)?\s?(?:[2-8]|9[1-9])[0-9]{3}(?:\s|\-|\.)?[0-9]{4}"
    ).unwrap();
}

pub fn plate() -> PatternSpec {
    PatternSpec::new(PatternMatcher::new(&PLATE_PATTERN)).with_strip_punctuation(true)
}

pub const PLATE_FORMAT: Format = Format::Mask("###-####");
pub const PLATE_ATTRIBUTES: &[AttributeExtractor] = &[AttributeExtractor::new("padrao", plate_standard)];

fn plate_standard(value: &str) -> Option<String> {
    let standard = match value.chars().nth(4) {
        Some(c) if c.is_ascii_digit() => "brasil",
        _ => "mercosul",
    };
    Some(standard.to_string())
}

pub fn email() -> PatternSpec {
    PatternSpec::new(PatternMatcher::new(&EMAIL_PATTERN))
}

pub const EMAIL_ATTRIBUTES: &[AttributeExtractor] = &[
    AttributeExtractor::new("local", email_local),
    AttributeExtractor::new("dominio", email_domain),
];

fn email_local(value: &str) -> Option<String> {
    value.split('@').next().map(str::to_string)
}

fn email_domain(value: &str) -> Option<String> {
    value.split('@').nth(1).map(str::to_string)
}

pub fn phone() -> PatternSpec {
    PatternSpec::new(PatternMatcher::new(&PHONE_PATTERN)).with_strip_punctuation(true)
}

pub const PHONE_FORMAT: Format = Format::Custom(format_phone);
pub const PHONE_ATTRIBUTES: &[AttributeExtractor] = &[
    AttributeExtractor::new("ddd", phone_area_code),
    AttributeExtractor::new("estado", phone_state),
    AttributeExtractor::new("tipo", phone_kind),
];

fn has_area_code(value: &str) -> bool {
    value.chars().count() > 9
}

fn phone_area_code(value: &str) -> Option<String> {
    has_area_code(value).then(|| slice(value, 0, 1))
}

fn phone_state(value: &str) -> Option<String> {
    if !has_area_code(value) {
        return None;
    }
    slice_number(value, 0, 1)
        .and_then(|ddd| DDD_STATES.get(ddd).copied().flatten())
        .map(str::to_string)
}

fn phone_kind(value: &str) -> Option<String> {
    let kind = match value.chars().count() {
        8 | 10 => "fixo",
        _ => "celular",
    };
    Some(kind.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_pattern() {
        let valid_plates = vec!["ABC1234", "ABC-1234", "abc 1234", "BRA2E19", "xx ABC1D23 yy"];

        for plate in valid_plates {
            assert!(PLATE_PATTERN.is_match(plate), "Plate should match: {}", plate);
        }

        let invalid_plates = vec!["AB1234", "ABC12", "1234ABC", "ABC-A234"];

        for plate in invalid_plates {
            assert!(!PLATE_PATTERN.is_match(plate), "Plate should not match: {}", plate);
        }
    }

    #[test]
    fn test_plate_standard() {
        assert_eq!(plate_standard("ABC1234"), Some("brasil".to_string()));
        assert_eq!(plate_standard("BRA2E19"), Some("mercosul".to_string()));
    }

    #[test]
    fn test_email_pattern() {
        let found = EMAIL_PATTERN.find("contato: abc@abc.com.br.").map(|m| m.as_str());
        assert_eq!(found, Some("abc@abc.com.br"));
        assert!(!EMAIL_PATTERN.is_match("abc@abc"));
        assert!(!EMAIL_PATTERN.is_match("@abc.com"));
    }

    #[test]
    fn test_email_parts() {
        assert_eq!(email_local("abc@abc.com.br"), Some("abc".to_string()));
        assert_eq!(email_domain("abc@abc.com.br"), Some("abc.com.br".to_string()));
    }

    #[test]
    fn test_phone_pattern() {
        let cases = vec![
            ("11987659876", "11987659876"),
            ("987659876", "987659876"),
            ("98765-9876", "98765-9876"),
            ("(11) 98765-4321", "(11) 98765-4321"),
            ("tel:3265.9876", "3265.9876"),
        ];

        for (text, expected) in cases {
            let found = PHONE_PATTERN.find(text).map(|m| m.as_str());
            assert_eq!(found, Some(expected), "Phone should match: {}", text);
        }

        assert!(!PHONE_PATTERN.is_match("1234"));
        assert!(!PHONE_PATTERN.is_match("0000-0000"));
    }

    #[test]
    fn test_phone_attributes() {
        assert_eq!(phone_area_code("11987659876"), Some("11".to_string()));
        assert_eq!(phone_area_code("987659876"), None);
        assert_eq!(phone_state("21987659876"), Some("RJ".to_string()));
        assert_eq!(phone_state("20987659876"), None);
        assert_eq!(phone_state("987659876"), None);
        assert_eq!(phone_kind("1132659876"), Some("fixo".to_string()));
        assert_eq!(phone_kind("32659876"), Some("fixo".to_string()));
        assert_eq!(phone_kind("987659876"), Some("celular".to_string()));
    }
}

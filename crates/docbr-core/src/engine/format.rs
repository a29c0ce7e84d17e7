//! Canonical masked formatting.

/// Placeholder character in mask templates.
pub const PLACEHOLDER: char = '#';

/// How a document type renders its canonical masked form.
#[derive(Debug, Clone, Copy)]
pub enum Format {
    /// No mask; the parsed value is returned as is.
    None,
    /// Literal template, each `#` takes the next value character.
    Mask(&'static str),
    /// Type-specific rule.
    Custom(fn(&str) -> String),
}

impl Format {
    pub fn apply(&self, value: &str) -> String {
        match self {
            Format::None => value.to_string(),
            Format::Mask(mask) => apply_mask(value, mask),
            Format::Custom(rule) => rule(value),
        }
    }

    pub fn mask(&self) -> Option<&'static str> {
        match self {
            Format::Mask(mask) => Some(*mask),
            _ => None,
        }
    }
}

/// Substitute `#` positions of `mask` in order with the characters of
/// `value`, copying every other mask character unchanged.
///
/// Placeholders left once the value runs out are dropped; value characters
/// beyond the placeholder count are ignored.
pub fn apply_mask(value: &str, mask: &str) -> String {
    let mut chars = value.chars();
    let mut out = String::with_capacity(mask.len());

    for m in mask.chars() {
        if m == PLACEHOLDER {
            if let Some(c) = chars.next() {
                out.push(c);
            }
        } else {
            out.push(m);
        }
    }

    out
}

/// Phone rendering: `(DD)NNNNN-NNNN` when an area code is present (more than
/// nine digits), else `NNNNN-NNNN`.
pub fn format_phone(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();
    let split = len.saturating_sub(4);
    let tail: String = chars[split..].iter().collect();

    if len > 9 {
        let area: String = chars[..2].iter().collect();
        let body: String = chars[2..split].iter().collect();
        format!("({}){}-{}", area, body, tail)
    } else {
        let body: String = chars[..split].iter().collect();
        format!("{}-{}", body, tail)
    }
}

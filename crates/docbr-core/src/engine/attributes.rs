//! Named attribute extraction.
//!
//! Extractors are plain functions over a normalized (check-digit) or matched
//! (pattern) value: fixed-offset slices or lookups in static tables. Slices
//! are clamped so short values never panic.

use crate::error::ConfigurationError;

/// Wildcard that selects every registered attribute.
pub const ALL_ATTRIBUTES: &str = "*";

/// A registered attribute and the function that extracts it.
#[derive(Debug, Clone, Copy)]
pub struct AttributeExtractor {
    pub name: &'static str,
    pub extract: fn(&str) -> Option<String>,
}

impl AttributeExtractor {
    pub const fn new(name: &'static str, extract: fn(&str) -> Option<String>) -> Self {
        Self { name, extract }
    }
}

/// Result of resolving requested names against a type's extractors.
#[derive(Debug, Clone)]
pub struct AttributeSelection {
    pub extractors: Vec<AttributeExtractor>,
    /// Exactly one concrete name was requested, so callers get bare values.
    pub single: bool,
}

impl AttributeSelection {
    pub fn names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name).collect()
    }
}

/// Resolve requested attribute names for `doctype`.
///
/// Any unknown name other than `"*"` aborts the request. `"*"` anywhere in
/// the request then selects every attribute in registry order; otherwise
/// duplicates collapse and order of first appearance is kept.
pub fn select_attributes<S: AsRef<str>>(
    doctype: &str,
    registered: &[AttributeExtractor],
    requested: &[S],
) -> Result<AttributeSelection, ConfigurationError> {
    if registered.is_empty() {
        return Err(ConfigurationError::NoAttributes(doctype.to_string()));
    }
    if requested.is_empty() {
        return Err(ConfigurationError::EmptyAttributeRequest(doctype.to_string()));
    }

    let mut wildcard = false;
    let mut extractors: Vec<AttributeExtractor> = Vec::with_capacity(requested.len());
    for name in requested {
        let name = name.as_ref();
        if name == ALL_ATTRIBUTES {
            wildcard = true;
            continue;
        }

        let extractor = registered
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ConfigurationError::UnknownAttribute {
                doctype: doctype.to_string(),
                attribute: name.to_string(),
            })?;

        if !extractors.iter().any(|e| e.name == name) {
            extractors.push(*extractor);
        }
    }

    if wildcard {
        return Ok(AttributeSelection {
            extractors: registered.to_vec(),
            single: false,
        });
    }

    let single = extractors.len() == 1;
    Ok(AttributeSelection { extractors, single })
}

/// Characters `start..=end` of `value`, clamped to its length.
pub fn slice(value: &str, start: usize, end: usize) -> String {
    value
        .chars()
        .skip(start)
        .take((end + 1).saturating_sub(start))
        .collect()
}

/// Integer value of characters `start..=end`, if they are all digits.
pub fn slice_number(value: &str, start: usize, end: usize) -> Option<usize> {
    let part = slice(value, start, end);
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Look up the code at `start..=end` in `table`; unknown codes give `""`.
pub fn lookup(value: &str, start: usize, end: usize, table: &[&str]) -> String {
    slice_number(value, start, end)
        .and_then(|code| table.get(code))
        .map(|s| s.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(v: &str) -> Option<String> {
        Some(slice(v, 0, 0))
    }

    fn second(v: &str) -> Option<String> {
        Some(slice(v, 1, 1))
    }

    const REGISTERED: [AttributeExtractor; 2] = [
        AttributeExtractor::new("first", first),
        AttributeExtractor::new("second", second),
    ];

    #[test]
    fn test_select_wildcard_returns_all() {
        let selection = select_attributes("x", &REGISTERED, &["*"]).unwrap();
        assert_eq!(selection.names(), vec!["first", "second"]);
        assert!(!selection.single);

        let selection = select_attributes("x", &REGISTERED, &["second", "*"]).unwrap();
        assert_eq!(selection.names(), vec!["first", "second"]);
    }

    #[test]
    fn test_select_single_name() {
        let selection = select_attributes("x", &REGISTERED, &["second", "second"]).unwrap();
        assert_eq!(selection.names(), vec!["second"]);
        assert!(selection.single);
    }

    #[test]
    fn test_select_keeps_request_order() {
        let selection = select_attributes("x", &REGISTERED, &["second", "first"]).unwrap();
        assert_eq!(selection.names(), vec!["second", "first"]);
        assert!(!selection.single);
    }

    #[test]
    fn test_select_unknown_aborts() {
        let err = select_attributes("x", &REGISTERED, &["first", "third"]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownAttribute {
                doctype: "x".to_string(),
                attribute: "third".to_string(),
            }
        );

        let err = select_attributes("x", &REGISTERED, &["*", "third"]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownAttribute {
                doctype: "x".to_string(),
                attribute: "third".to_string(),
            }
        );
    }

    #[test]
    fn test_select_without_attributes() {
        let err = select_attributes::<&str>("pis", &[], &["*"]).unwrap_err();
        assert_eq!(err, ConfigurationError::NoAttributes("pis".to_string()));

        let err = select_attributes::<&str>("x", &REGISTERED, &[]).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyAttributeRequest("x".to_string()));
    }

    #[test]
    fn test_slice_helpers() {
        assert_eq!(slice("15559539000152", 0, 7), "15559539");
        assert_eq!(slice("123", 1, 9), "23");
        assert_eq!(slice("123", 5, 9), "");
        assert_eq!(slice_number("15559539000152", 8, 11), Some(1));
        assert_eq!(slice_number("ab", 0, 1), None);
        assert_eq!(lookup("x2", 1, 1, &["a", "b", "c"]), "c");
        assert_eq!(lookup("x7", 1, 1, &["a", "b", "c"]), "");
    }
}

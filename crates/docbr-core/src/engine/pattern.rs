//! Structural matching for documents without check digits.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How much of the input a match has to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// First match anywhere in the input.
    #[default]
    Anywhere,
    /// The first match must span the whole input.
    Whole,
}

/// Regex matcher with a coverage policy.
#[derive(Debug, Clone, Copy)]
pub struct PatternMatcher {
    pattern: &'static Regex,
    policy: MatchPolicy,
}

impl PatternMatcher {
    pub const fn new(pattern: &'static Regex) -> Self {
        Self {
            pattern,
            policy: MatchPolicy::Anywhere,
        }
    }

    /// Set the coverage policy.
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn pattern(&self) -> &'static Regex {
        self.pattern
    }

    /// Return the first accepted match.
    pub fn find<'a>(&self, text: &'a str) -> Option<&'a str> {
        let found = self.pattern.find(text)?;

        match self.policy {
            MatchPolicy::Anywhere => Some(found.as_str()),
            MatchPolicy::Whole if found.start() == 0 && found.end() == text.len() => {
                Some(found.as_str())
            }
            MatchPolicy::Whole => None,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}

/// Drop separators from a matched value.
///
/// Removes the space and the ASCII punctuation runs `()*+,-./`, `:;<=>?@`,
/// ``[\]^_` `` and `{|}~`. Other characters, including `!"#$%&'`, stay.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|&c| !is_separator(c)).collect()
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '('..='/' | ':'..='@' | '['..='`' | '{'..='~')
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref DIGITS: Regex = Regex::new(r"[0-9]{3}").unwrap();
    }

    #[test]
    fn test_find_anywhere() {
        let matcher = PatternMatcher::new(&DIGITS);
        assert_eq!(matcher.policy(), MatchPolicy::Anywhere);
        assert_eq!(matcher.find("ab123cd"), Some("123"));
        assert_eq!(matcher.find("ab12cd"), None);
    }

    #[test]
    fn test_find_whole() {
        let matcher = PatternMatcher::new(&DIGITS).with_policy(MatchPolicy::Whole);
        assert_eq!(matcher.policy(), MatchPolicy::Whole);
        assert_eq!(matcher.pattern().as_str(), "[0-9]{3}");
        assert_eq!(matcher.find("123"), Some("123"));
        assert_eq!(matcher.find("ab123"), None);
        assert_eq!(matcher.find("1234"), None);
        assert!(!matcher.is_match(""));
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("ABC-1234"), "ABC1234");
        assert_eq!(strip_punctuation("(11) 98765.4321"), "11987654321");
        assert_eq!(strip_punctuation("a_b[c]{d}~e@f"), "abcdef");
        assert_eq!(strip_punctuation("a!b#c"), "a!b#c");
    }
}

//! Per-element pipelines for the two document categories.
//!
//! A [`DocumentPipeline`] turns one raw string into a canonical value, a
//! validity flag or the value that attribute extractors read. Batch plumbing
//! lives in [`crate::dispatch`]; nothing here ever fails, an element that
//! does not qualify is simply `None` or `false`.

use crate::engine::{
    digit_row, is_repeated, normalize_digits, strip_punctuation, AttributeExtractor,
    ChecksumEngine, FederalUnitCheck, MatchPolicy, PatternMatcher,
};

/// Knobs shared by every pipeline call in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Drop a trailing `.0` before normalizing digits.
    pub strip_float_suffix: bool,
    /// Override the matcher's coverage policy for pattern documents.
    pub match_policy: Option<MatchPolicy>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            strip_float_suffix: true,
            match_policy: None,
        }
    }
}

/// Attribute values of one document, in extractor order.
pub type ExtractedAttributes = Vec<(&'static str, Option<String>)>;

/// Capability interface for one document category.
pub trait DocumentPipeline: Send + Sync {
    /// Canonical (unformatted) value, or `None` when the element does not
    /// qualify.
    fn parse_one(&self, raw: &str, options: &PipelineOptions) -> Option<String>;

    /// Full validity of one element.
    ///
    /// With `lazy` the input is trusted to be in canonical form already.
    fn validate_one(&self, raw: &str, lazy: bool, options: &PipelineOptions) -> bool;

    /// Value the attribute extractors read, or `None` to null the element.
    fn attribute_source(&self, raw: &str, lazy: bool, options: &PipelineOptions) -> Option<String>;

    /// Run `extractors` over one element.
    fn extract_one(
        &self,
        raw: &str,
        lazy: bool,
        extractors: &[AttributeExtractor],
        options: &PipelineOptions,
    ) -> Option<ExtractedAttributes> {
        let source = self.attribute_source(raw, lazy, options)?;
        Some(
            extractors
                .iter()
                .map(|extractor| (extractor.name, (extractor.extract)(&source)))
                .collect(),
        )
    }
}

/// Fixed-width numeric document verified by check digits.
#[derive(Debug, Clone, Copy)]
pub struct CheckDigitSpec {
    length: usize,
    checksum: ChecksumEngine,
    federal_unit: Option<FederalUnitCheck>,
}

impl CheckDigitSpec {
    pub const fn new(length: usize, checksum: ChecksumEngine) -> Self {
        Self {
            length,
            checksum,
            federal_unit: None,
        }
    }

    /// Also require a valid federal unit code.
    pub const fn with_federal_unit(mut self, check: FederalUnitCheck) -> Self {
        self.federal_unit = Some(check);
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn checksum(&self) -> &ChecksumEngine {
        &self.checksum
    }

    pub fn federal_unit(&self) -> Option<FederalUnitCheck> {
        self.federal_unit
    }

    /// Normalize raw text to the document width.
    pub fn normalize(&self, raw: &str, options: &PipelineOptions) -> String {
        normalize_digits(raw, self.length, options.strip_float_suffix)
    }

    /// Checksum, federal unit and repeated-digit checks on a digit row.
    pub fn is_valid_row(&self, row: &[u8]) -> bool {
        if is_repeated(row) || !self.checksum.verify(row) {
            return false;
        }
        self.federal_unit.is_none_or(|check| check.is_valid(row))
    }

    /// Fill in the check digits for the digits of `prefix`.
    ///
    /// The prefix is zero-extended or truncated to the document width before
    /// the check digits are written over it.
    pub fn complete(&self, prefix: &str) -> String {
        let mut row = digit_row(prefix, self.length);
        row.truncate(self.length);

        for check in self.checksum.check_digits(&row) {
            row[check.position] = check.digit;
        }

        row.iter().map(|d| char::from(b'0' + d)).collect()
    }

    fn canonical(&self, raw: &str, lazy: bool, options: &PipelineOptions) -> String {
        if lazy {
            raw.to_string()
        } else {
            self.normalize(raw, options)
        }
    }
}

impl DocumentPipeline for CheckDigitSpec {
    fn parse_one(&self, raw: &str, options: &PipelineOptions) -> Option<String> {
        let value = self.normalize(raw, options);
        if is_repeated(&digit_row(&value, self.length)) {
            return None;
        }
        Some(value)
    }

    fn validate_one(&self, raw: &str, lazy: bool, options: &PipelineOptions) -> bool {
        let value = self.canonical(raw, lazy, options);
        self.is_valid_row(&digit_row(&value, self.length))
    }

    fn attribute_source(&self, raw: &str, lazy: bool, options: &PipelineOptions) -> Option<String> {
        let value = self.canonical(raw, lazy, options);
        if is_repeated(&digit_row(&value, self.length)) {
            return None;
        }
        Some(value)
    }
}

/// Free-form document recognized by a regular expression.
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    matcher: PatternMatcher,
    strip_punctuation: bool,
}

impl PatternSpec {
    pub const fn new(matcher: PatternMatcher) -> Self {
        Self {
            matcher,
            strip_punctuation: false,
        }
    }

    /// Remove separators from matched values.
    pub const fn with_strip_punctuation(mut self, strip: bool) -> Self {
        self.strip_punctuation = strip;
        self
    }

    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    pub fn strips_punctuation(&self) -> bool {
        self.strip_punctuation
    }

    fn matched<'a>(&self, raw: &'a str, options: &PipelineOptions) -> Option<&'a str> {
        match options.match_policy {
            Some(policy) => self.matcher.with_policy(policy).find(raw),
            None => self.matcher.find(raw),
        }
    }

    fn matched_value(&self, raw: &str, options: &PipelineOptions) -> Option<String> {
        let found = self.matched(raw, options)?;
        if self.strip_punctuation {
            Some(strip_punctuation(found))
        } else {
            Some(found.to_string())
        }
    }
}

impl DocumentPipeline for PatternSpec {
    fn parse_one(&self, raw: &str, options: &PipelineOptions) -> Option<String> {
        self.matched_value(raw, options)
    }

    // `lazy` has no meaning for a regex match.
    fn validate_one(&self, raw: &str, _lazy: bool, options: &PipelineOptions) -> bool {
        self.matched(raw, options).is_some()
    }

    fn attribute_source(&self, raw: &str, _lazy: bool, options: &PipelineOptions) -> Option<String> {
        self.matched_value(raw, options)
    }
}

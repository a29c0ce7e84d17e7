//! Document-agnostic processing primitives.

pub mod attributes;
pub mod checksum;
pub mod format;
pub mod normalize;
pub mod pattern;

pub use attributes::{select_attributes, AttributeExtractor, AttributeSelection, ALL_ATTRIBUTES};
pub use checksum::{ChecksumEngine, CheckDigit, FederalUnitCheck, SpecialAdjustment, WeightPair};
pub use format::{apply_mask, format_phone, Format};
pub use normalize::{digit_row, is_repeated, normalize_digits};
pub use pattern::{strip_punctuation, MatchPolicy, PatternMatcher};

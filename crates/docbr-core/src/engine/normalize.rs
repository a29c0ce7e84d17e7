//! Digit normalization for check-digit documents.
//!
//! Raw input can carry masks, letters, stray punctuation or a float
//! serialization tail (`82683688377.0`). Normalization keeps only the digits,
//! right-aligns them and pads or truncates on the left to the document width.
//! It never fails: anything without digits becomes a string of zeros.

/// Normalize `raw` to a string of exactly `width` ASCII digits.
///
/// When `strip_float_suffix` is set, a trailing `.0` is discarded before the
/// digits are collected.
pub fn normalize_digits(raw: &str, width: usize, strip_float_suffix: bool) -> String {
    let text = if strip_float_suffix {
        strip_dot_zero(raw)
    } else {
        raw
    };

    let digits: Vec<u8> = text.bytes().filter(u8::is_ascii_digit).collect();

    // Right-aligned, so extra digits fall off the left.
    let kept = &digits[digits.len().saturating_sub(width)..];

    let mut out = String::with_capacity(width);
    for _ in kept.len()..width {
        out.push('0');
    }
    out.extend(kept.iter().map(|&b| b as char));
    out
}

/// Turn a string into its digit row, zero-extended on the right to `width`.
///
/// Every non-digit character maps to 0. Rows longer than `width` are kept
/// whole.
pub fn digit_row(text: &str, width: usize) -> Vec<u8> {
    let mut row: Vec<u8> = text
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8).unwrap_or(0))
        .collect();

    if row.len() < width {
        row.resize(width, 0);
    }
    row
}

/// True when every digit in the row is the same one.
///
/// An empty row counts as repeated.
pub fn is_repeated(row: &[u8]) -> bool {
    match row.first() {
        Some(&first) => row.iter().all(|&d| d == first),
        None => true,
    }
}

fn strip_dot_zero(raw: &str) -> &str {
    match raw.strip_suffix(".0") {
        // Only the `0` matters: the `.` is filtered out with the rest.
        Some(head) => head,
        None => raw,
    }
}

//! Weighted-sum check digit generation and validation.
//!
//! Every check-digit document in the registry is verified by the same
//! algorithm: for each (weights, position) pair, take the dot product of the
//! digit row with the weights, reduce it modulo M, post-process the remainder
//! into a digit and write it back at the target position so later pairs see
//! it. The document is valid when every generated digit matches the digit
//! already there.

/// One weight sequence and the row position its check digit lands on.
#[derive(Debug, Clone, Copy)]
pub struct WeightPair {
    /// Weights, applied left to right; the row is truncated or zero-extended
    /// to this length.
    pub weights: &'static [u32],
    /// Position of the generated check digit.
    pub position: usize,
}

impl WeightPair {
    pub const fn new(weights: &'static [u32], position: usize) -> Self {
        Self { weights, position }
    }
}

/// One-off tweaks to the generic algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAdjustment {
    /// CNH rule: when the previous raw remainder was 10 or more, the current
    /// raw remainder `r` becomes `r + 9` if `r < 2`, else `r - 2`.
    CnhCarry,
}

impl SpecialAdjustment {
    fn apply(self, previous_raw: Option<u32>, raw: u32) -> u32 {
        match self {
            SpecialAdjustment::CnhCarry => match previous_raw {
                Some(prev) if prev >= 10 => {
                    if raw < 2 {
                        raw + 9
                    } else {
                        raw - 2
                    }
                }
                _ => raw,
            },
        }
    }
}

/// Federal unit predicate used by the voter registration number.
///
/// The digits at `left` and `right` form a two-digit state code: `1X` is
/// always valid, `2X` only for X < 9 and `0X` only for X > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FederalUnitCheck {
    pub left: usize,
    pub right: usize,
}

impl FederalUnitCheck {
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    pub fn is_valid(&self, row: &[u8]) -> bool {
        let (Some(&left), Some(&right)) = (row.get(self.left), row.get(self.right)) else {
            return false;
        };

        match left {
            1 => true,
            2 => right < 9,
            0 => right > 0,
            _ => false,
        }
    }
}

/// A generated check digit and where it belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDigit {
    pub digit: u8,
    pub position: usize,
}

/// Generic weighted-sum-mod-N engine.
#[derive(Debug, Clone, Copy)]
pub struct ChecksumEngine {
    modulo: u32,
    pairs: &'static [WeightPair],
    post_op: fn(u32) -> u32,
    special: Option<SpecialAdjustment>,
}

impl ChecksumEngine {
    pub const fn new(modulo: u32, pairs: &'static [WeightPair], post_op: fn(u32) -> u32) -> Self {
        Self {
            modulo,
            pairs,
            post_op,
            special: None,
        }
    }

    /// Attach a special adjustment.
    pub const fn with_special(mut self, special: SpecialAdjustment) -> Self {
        self.special = Some(special);
        self
    }

    pub fn modulo(&self) -> u32 {
        self.modulo
    }

    pub fn pairs(&self) -> &'static [WeightPair] {
        self.pairs
    }

    pub fn special(&self) -> Option<SpecialAdjustment> {
        self.special
    }

    /// Generate the check digits for a digit row.
    ///
    /// Returns an empty list for an empty row.
    pub fn check_digits(&self, row: &[u8]) -> Vec<CheckDigit> {
        if row.is_empty() {
            return Vec::new();
        }

        let mut work = row.to_vec();
        let mut previous_raw = None;
        let mut out = Vec::with_capacity(self.pairs.len());

        for pair in self.pairs {
            let sum: u32 = work
                .iter()
                .zip(pair.weights.iter())
                .map(|(&d, &w)| u32::from(d) * w)
                .sum();
            let mut raw = sum % self.modulo;

            if let Some(special) = self.special {
                raw = special.apply(previous_raw, raw);
            }
            previous_raw = Some(raw);

            let digit = (self.post_op)(raw) as u8;
            let position = pair.position.min(work.len() - 1);
            work[position] = digit;
            out.push(CheckDigit { digit, position });
        }

        out
    }

    /// True when every generated check digit matches the row.
    pub fn verify(&self, row: &[u8]) -> bool {
        let digits = self.check_digits(row);
        !digits.is_empty() && digits.iter().all(|cd| row[cd.position] == cd.digit)
    }
}

/// `0` for remainders below 2, else `11 - x` (CPF, CNPJ, PIS, RENAVAM).
pub fn eleven_minus(x: u32) -> u32 {
    if x < 2 { 0 } else { 11 - x }
}

/// `0` for remainders above 9, else unchanged (CNH).
pub fn zero_above_nine(x: u32) -> u32 {
    if x > 9 { 0 } else { x }
}

/// `0` for a remainder of 10, else unchanged (voter registration).
pub fn ten_to_zero(x: u32) -> u32 {
    if x == 10 { 0 } else { x }
}

/// `1` for a remainder of 10, else unchanged (civil registry certificate).
pub fn ten_to_one(x: u32) -> u32 {
    if x == 10 { 1 } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize::digit_row;

    static CPF_PAIRS: [WeightPair; 2] = [
        WeightPair::new(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 0, 0], 9),
        WeightPair::new(&[11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 0], 10),
    ];

    static CNH_PAIRS: [WeightPair; 2] = [
        WeightPair::new(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 0], 9),
        WeightPair::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0], 10),
    ];

    static SHORT_PAIRS: [WeightPair; 2] = [
        WeightPair::new(&[1, 0, 0], 1),
        WeightPair::new(&[1, 1, 0], 2),
    ];

    fn identity(x: u32) -> u32 {
        x
    }

    #[test]
    fn test_generated_digits_feed_later_pairs() {
        let engine = ChecksumEngine::new(10, &SHORT_PAIRS, identity);
        assert_eq!(engine.modulo(), 10);

        // The second pair sees the digit written by the first (3 + 3).
        let digits = engine.check_digits(&[3, 0, 0]);
        assert_eq!(
            digits,
            vec![
                CheckDigit { digit: 3, position: 1 },
                CheckDigit { digit: 6, position: 2 },
            ]
        );
        assert!(engine.verify(&[3, 3, 6]));
        assert!(!engine.verify(&[3, 0, 3]));
        assert!(!engine.verify(&[3, 0, 0]));
    }

    #[test]
    fn test_cpf_digits() {
        let engine = ChecksumEngine::new(11, &CPF_PAIRS, eleven_minus);
        assert!(engine.verify(&digit_row("82683688377", 11)));
        assert!(engine.verify(&digit_row("52998224725", 11)));
        assert!(!engine.verify(&digit_row("52998224726", 11)));
    }

    #[test]
    fn test_cnh_carry_adjustment() {
        let plain = ChecksumEngine::new(11, &CNH_PAIRS, zero_above_nine);
        let special = plain.with_special(SpecialAdjustment::CnhCarry);

        // First raw remainder is 10, so the second digit is shifted by -2.
        let row = digit_row("10000000108", 11);
        assert!(special.verify(&row));
        assert!(!plain.verify(&row));

        // First raw remainder below 10 leaves both variants in agreement.
        let row = digit_row("84223533040", 11);
        assert!(special.verify(&row));
        assert!(plain.verify(&row));
    }

    #[test]
    fn test_position_clamps_to_row() {
        let engine = ChecksumEngine::new(11, &CPF_PAIRS, eleven_minus);
        let digits = engine.check_digits(&[1, 2, 3]);
        assert!(digits.iter().all(|cd| cd.position == 2));
    }

    #[test]
    fn test_empty_row_is_invalid() {
        let engine = ChecksumEngine::new(11, &CPF_PAIRS, eleven_minus);
        assert!(engine.check_digits(&[]).is_empty());
        assert!(!engine.verify(&[]));
    }

    #[test]
    fn test_federal_unit_check() {
        let check = FederalUnitCheck::new(0, 1);
        assert!(check.is_valid(&[1, 9]));
        assert!(check.is_valid(&[2, 8]));
        assert!(!check.is_valid(&[2, 9]));
        assert!(check.is_valid(&[0, 1]));
        assert!(!check.is_valid(&[0, 0]));
        assert!(!check.is_valid(&[3, 1]));
        assert!(!check.is_valid(&[1]));
    }

    #[test]
    fn test_post_operations() {
        assert_eq!(eleven_minus(0), 0);
        assert_eq!(eleven_minus(1), 0);
        assert_eq!(eleven_minus(2), 9);
        assert_eq!(zero_above_nine(10), 0);
        assert_eq!(zero_above_nine(9), 9);
        assert_eq!(ten_to_zero(10), 0);
        assert_eq!(ten_to_one(10), 1);
        assert_eq!(ten_to_one(3), 3);
    }
}

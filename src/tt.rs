// SPDX-License-Identifier: Apache-2.0

//! Truth tables for small single-output Boolean functions.
//!
//! We represent a 4-input function `f(a,b,c,d) -> o` as a `u16` where bit `i`
//! corresponds to the output value on the input assignment encoded by `i`:
//! - `a = (i >> 0) & 1`
//! - `b = (i >> 1) & 1`
//! - `c = (i >> 2) & 1`
//! - `d = (i >> 3) & 1`
//!
//! That is, `a` is the least-significant selector bit and toggles fastest.
//!
//! Cut functions handed to the resynthesis engine may be narrower than four
//! inputs; those are carried as a [`TruthTable`] and widened with
//! [`TruthTable::extend_to_4`].

use std::fmt;
use std::str::FromStr;

use bitvec::vec::BitVec;
use serde::{Deserialize, Serialize};

/// Widest function a [`TruthTable`] can carry.
pub const MAX_VARS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TruthTable16(pub u16);

impl TruthTable16 {
    pub const fn const0() -> Self {
        Self(0x0000)
    }

    pub const fn const1() -> Self {
        Self(0xFFFF)
    }

    /// Returns the truth table for the given input variable index.
    ///
    /// Variable index mapping:
    /// - 0: a (LSB of assignment index)
    /// - 1: b
    /// - 2: c
    /// - 3: d (MSB of assignment index)
    pub const fn var(index: usize) -> Self {
        match index {
            0 => Self(0xAAAA),
            1 => Self(0xCCCC),
            2 => Self(0xF0F0),
            3 => Self(0xFF00),
            _ => panic!("TruthTable16::var index out of range (expected 0..=3)"),
        }
    }

    #[inline]
    pub const fn not(self) -> Self {
        Self(!self.0)
    }

    #[inline]
    pub const fn and(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Complements the table when `negated` is set.
    #[inline]
    pub const fn negate_if(self, negated: bool) -> Self {
        if negated { self.not() } else { self }
    }

    pub const fn is_const0(self) -> bool {
        self.0 == 0
    }

    /// Numeric successor, wrapping from `0xFFFF` back to `const0`.
    ///
    /// Starting from `const0` and stepping until `const0` comes around again
    /// visits all 65536 functions exactly once.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[inline]
    pub fn get_bit(self, assignment_index: u8) -> bool {
        debug_assert!(assignment_index < 16);
        ((self.0 >> assignment_index) & 1) != 0
    }

    #[inline]
    pub fn set_bit(&mut self, assignment_index: u8, value: bool) {
        debug_assert!(assignment_index < 16);
        let mask = 1u16 << assignment_index;
        if value {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    /// Returns whether the function depends on input `var`.
    pub fn has_var(self, var: usize) -> bool {
        let shift = 1u32 << var;
        let mask = Self::var(var).0;
        (((self.0 & mask) >> shift) ^ (self.0 & !mask)) != 0
    }
}

impl fmt::Display for TruthTable16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

#[inline]
pub fn decode_assignment(i: u8) -> [bool; 4] {
    debug_assert!(i < 16);
    [
        (i & 0b0001) != 0,
        (i & 0b0010) != 0,
        (i & 0b0100) != 0,
        (i & 0b1000) != 0,
    ]
}

#[inline]
pub fn encode_assignment(bits: [bool; 4]) -> u8 {
    (bits[0] as u8) | ((bits[1] as u8) << 1) | ((bits[2] as u8) << 2) | ((bits[3] as u8) << 3)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTruthTableError {
    TooManyVars { num_vars: usize },
    BadDigit { text: String },
    TooWide { value: u64, num_vars: usize },
}

impl fmt::Display for ParseTruthTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyVars { num_vars } => write!(
                f,
                "truth tables support at most {} inputs; got {}",
                MAX_VARS, num_vars
            ),
            Self::BadDigit { text } => write!(f, "invalid hex truth table: {:?}", text),
            Self::TooWide { value, num_vars } => write!(
                f,
                "truth table 0x{:x} has bits set beyond the {} rows of a {}-input function",
                value,
                1usize << num_vars,
                num_vars
            ),
        }
    }
}

impl std::error::Error for ParseTruthTableError {}

/// A truth table over `num_vars` inputs (at most [`MAX_VARS`]).
///
/// Row ordering matches [`TruthTable16`]: bit `i` of `bits` is the output on
/// the assignment whose input `k` is bit `k` of `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    num_vars: usize,
    bits: BitVec,
}

impl TruthTable {
    pub fn const0(num_vars: usize) -> Self {
        assert!(
            num_vars <= MAX_VARS,
            "TruthTable::const0: {} inputs exceeds the supported maximum of {}",
            num_vars,
            MAX_VARS
        );
        Self {
            num_vars,
            bits: BitVec::repeat(false, 1 << num_vars),
        }
    }

    pub fn const1(num_vars: usize) -> Self {
        Self::const0(num_vars).not()
    }

    /// Projection function for input `index`.
    pub fn var(num_vars: usize, index: usize) -> Self {
        assert!(index < num_vars, "variable {} out of range for {} inputs", index, num_vars);
        let mut tt = Self::const0(num_vars);
        for row in 0..tt.num_rows() {
            tt.bits.set(row, (row >> index) & 1 != 0);
        }
        tt
    }

    /// Builds a truth table from the low `2^num_vars` bits of `value`.
    pub fn from_u64(num_vars: usize, value: u64) -> Result<Self, ParseTruthTableError> {
        if num_vars > MAX_VARS {
            return Err(ParseTruthTableError::TooManyVars { num_vars });
        }
        let rows = 1usize << num_vars;
        if rows < 64 && (value >> rows) != 0 {
            return Err(ParseTruthTableError::TooWide { value, num_vars });
        }
        let mut tt = Self::const0(num_vars);
        for row in 0..rows {
            tt.bits.set(row, (value >> row) & 1 != 0);
        }
        Ok(tt)
    }

    /// Parses a hex truth table (optional `0x` prefix).
    pub fn from_hex(num_vars: usize, text: &str) -> Result<Self, ParseTruthTableError> {
        let digits = text.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
        let value = u64::from_str_radix(digits, 16).map_err(|_| ParseTruthTableError::BadDigit {
            text: text.to_string(),
        })?;
        Self::from_u64(num_vars, value)
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_rows(&self) -> usize {
        self.bits.len()
    }

    pub fn get_bit(&self, row: usize) -> bool {
        self.bits[row]
    }

    pub fn set_bit(&mut self, row: usize, value: bool) {
        self.bits.set(row, value);
    }

    pub fn not(&self) -> Self {
        Self {
            num_vars: self.num_vars,
            bits: !self.bits.clone(),
        }
    }

    pub fn and(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars);
        Self {
            num_vars: self.num_vars,
            bits: self.bits.clone() & other.bits.as_bitslice(),
        }
    }

    pub fn xor(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars);
        Self {
            num_vars: self.num_vars,
            bits: self.bits.clone() ^ other.bits.as_bitslice(),
        }
    }

    pub fn to_u64(&self) -> u64 {
        self.bits
            .iter()
            .by_vals()
            .enumerate()
            .fold(0u64, |acc, (row, bit)| acc | ((bit as u64) << row))
    }

    /// Widens the function to exactly four inputs.
    ///
    /// Inputs beyond `num_vars` are don't-cares: the narrow pattern is
    /// replicated so the result does not depend on them. Returns `None` for
    /// functions wider than four inputs.
    pub fn extend_to_4(&self) -> Option<TruthTable16> {
        if self.num_vars > 4 {
            return None;
        }
        let rows = self.num_rows();
        let mut out = TruthTable16::const0();
        for row in 0u8..16 {
            out.set_bit(row, self.bits[row as usize % rows]);
        }
        Some(out)
    }
}

impl From<TruthTable16> for TruthTable {
    fn from(tt: TruthTable16) -> Self {
        // A u16 always fits a 4-input table.
        let mut out = Self::const0(4);
        for row in 0..16 {
            out.bits.set(row, tt.get_bit(row as u8));
        }
        out
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = std::cmp::max(1, self.num_rows() / 4);
        write!(f, "0x{:0width$x}", self.to_u64(), width = digits)
    }
}

impl FromStr for TruthTable16 {
    type Err = ParseTruthTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tt = TruthTable::from_hex(4, s)?;
        Ok(TruthTable16(tt.to_u64() as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_var_projections_match_tt16() {
        for i in 0..4 {
            let wide = TruthTable::var(4, i);
            assert_eq!(wide.extend_to_4(), Some(TruthTable16::var(i)));
        }
    }

    #[test_case(0, 0x1, 0xFFFF; "const1 zero inputs")]
    #[test_case(0, 0x0, 0x0000; "const0 zero inputs")]
    #[test_case(1, 0x2, 0xAAAA; "identity one input")]
    #[test_case(1, 0x1, 0x5555; "inverter one input")]
    #[test_case(2, 0x8, 0x8888; "and two inputs")]
    #[test_case(2, 0x6, 0x6666; "xor two inputs")]
    #[test_case(3, 0xE8, 0xE8E8; "majority three inputs")]
    #[test_case(4, 0x1234, 0x1234; "four inputs unchanged")]
    fn test_extend_to_4(num_vars: usize, value: u64, want: u16) {
        let tt = TruthTable::from_u64(num_vars, value).unwrap();
        assert_eq!(tt.extend_to_4(), Some(TruthTable16(want)));
    }

    #[test]
    fn test_extend_rejects_wide_functions() {
        let tt = TruthTable::var(5, 4);
        assert_eq!(tt.extend_to_4(), None);
    }

    #[test]
    fn test_from_hex_and_display() {
        let tt = TruthTable::from_hex(2, "0x8").unwrap();
        assert_eq!(tt.to_u64(), 0x8);
        assert_eq!(tt.to_string(), "0x8");
        let tt16: TruthTable16 = "6996".parse().unwrap();
        assert_eq!(tt16, TruthTable16(0x6996));
        assert_eq!(tt16.to_string(), "0x6996");
    }

    #[test]
    fn test_from_hex_errors() {
        assert_eq!(
            TruthTable::from_hex(2, "0x1f"),
            Err(ParseTruthTableError::TooWide {
                value: 0x1f,
                num_vars: 2
            })
        );
        assert!(matches!(
            TruthTable::from_hex(2, "zz"),
            Err(ParseTruthTableError::BadDigit { .. })
        ));
        assert_eq!(
            TruthTable::from_u64(7, 0),
            Err(ParseTruthTableError::TooManyVars { num_vars: 7 })
        );
    }

    #[test]
    fn test_bitwise_ops() {
        let a = TruthTable::var(2, 0);
        let b = TruthTable::var(2, 1);
        assert_eq!(a.and(&b).to_u64(), 0x8);
        assert_eq!(a.xor(&b).to_u64(), 0x6);
        assert_eq!(a.not().to_u64(), 0x5);
        assert_eq!(TruthTable::const1(3).to_u64(), 0xFF);
    }

    #[test]
    fn test_next_visits_every_function_once() {
        let mut tt = TruthTable16::const0();
        let mut count = 0usize;
        loop {
            count += 1;
            tt = tt.next();
            if tt.is_const0() {
                break;
            }
        }
        assert_eq!(count, 1 << 16);
    }

    #[test]
    fn test_has_var() {
        let and_ab = TruthTable16::var(0).and(TruthTable16::var(1));
        assert!(and_ab.has_var(0));
        assert!(and_ab.has_var(1));
        assert!(!and_ab.has_var(2));
        assert!(!and_ab.has_var(3));
    }

    #[test]
    fn test_round_trip_tt16_conversion() {
        let tt = TruthTable16(0x9E37);
        let wide: TruthTable = tt.into();
        assert_eq!(wide.extend_to_4(), Some(tt));
    }
}

// SPDX-License-Identifier: Apache-2.0

//! 4-input NPN canonicalization.
//!
//! NPN equivalence considers:
//! - input negations (N)
//! - input permutations (P)
//! - output negation (N)
//!
//! The canonical representative of a class is its numerically smallest
//! `u16` truth table. [`exact_npn_canonization`] finds it for a single function
//! by enumerating all 768 transforms; [`CanonTable`] holds the answer for every
//! one of the 65536 functions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::tt::{TruthTable16, decode_assignment, encode_assignment};

/// Number of 4-input functions.
pub const NUM_FUNCTIONS: usize = 1 << 16;

/// A 4-element permutation expressed as an array of indices.
///
/// Semantics: `perm[i]` is the original variable index (0..=3) that drives
/// variable `i` of the canonical function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Perm4(pub [u8; 4]);

impl Perm4 {
    pub const fn identity() -> Self {
        Self([0, 1, 2, 3])
    }
}

/// An NPN transform over 4 variables.
///
/// Relates a function `f` to a canonical function `r`: for an original input
/// assignment `x`, build the canonical assignment `y` with
/// `y[i] = x[perm[i]] XOR input_neg(perm[i])`; then
/// `f(x) = r(y) XOR output_neg`.
///
/// Note the input negation mask is indexed by the *original* variable. When a
/// canonical circuit is instantiated over a cut, canonical input `i` is wired
/// to leaf `perm[i]`, complemented if that leaf's bit is set in the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NpnTransform {
    pub perm: Perm4,
    pub input_neg_mask: u8, // low 4 bits used
    pub output_neg: bool,
}

impl NpnTransform {
    pub const fn identity() -> Self {
        Self {
            perm: Perm4::identity(),
            input_neg_mask: 0,
            output_neg: false,
        }
    }

    /// Whether original input `i` is complemented.
    #[inline]
    pub const fn input_negated(self, i: usize) -> bool {
        ((self.input_neg_mask >> i) & 1) != 0
    }

    /// Packed polarity: bits 0..=3 are the input negations, bit 4 is the output
    /// negation.
    #[inline]
    pub const fn polarity(self) -> u8 {
        (self.input_neg_mask & 0xF) | ((self.output_neg as u8) << 4)
    }
}

/// Maps an original assignment `x` to the canonical assignment `y`.
#[inline]
fn canonical_assignment(x: u8, xform: NpnTransform) -> u8 {
    let x_bits = decode_assignment(x);
    let mut y_bits = [false; 4];
    for i in 0..4usize {
        let orig_var = xform.perm.0[i] as usize;
        y_bits[i] = x_bits[orig_var] ^ xform.input_negated(orig_var);
    }
    encode_assignment(y_bits)
}

/// Transforms `tt` into the canonical domain: returns `r` with
/// `tt == unapply_npn(r, xform)`.
pub fn apply_npn(tt: TruthTable16, xform: NpnTransform) -> TruthTable16 {
    let mut out = TruthTable16::const0();
    for x in 0u8..16 {
        let y = canonical_assignment(x, xform);
        out.set_bit(y, tt.get_bit(x) ^ xform.output_neg);
    }
    out
}

/// Reconstructs the original function from a canonical function `r`, per the
/// semantics documented on `NpnTransform`.
pub fn unapply_npn(r: TruthTable16, xform: NpnTransform) -> TruthTable16 {
    let mut out = TruthTable16::const0();
    for x in 0u8..16 {
        let y = canonical_assignment(x, xform);
        out.set_bit(x, r.get_bit(y) ^ xform.output_neg);
    }
    out
}

pub(crate) fn all_perms4() -> [Perm4; 24] {
    // Lexicographic over the [u8;4] array.
    [
        Perm4([0, 1, 2, 3]),
        Perm4([0, 1, 3, 2]),
        Perm4([0, 2, 1, 3]),
        Perm4([0, 2, 3, 1]),
        Perm4([0, 3, 1, 2]),
        Perm4([0, 3, 2, 1]),
        Perm4([1, 0, 2, 3]),
        Perm4([1, 0, 3, 2]),
        Perm4([1, 2, 0, 3]),
        Perm4([1, 2, 3, 0]),
        Perm4([1, 3, 0, 2]),
        Perm4([1, 3, 2, 0]),
        Perm4([2, 0, 1, 3]),
        Perm4([2, 0, 3, 1]),
        Perm4([2, 1, 0, 3]),
        Perm4([2, 1, 3, 0]),
        Perm4([2, 3, 0, 1]),
        Perm4([2, 3, 1, 0]),
        Perm4([3, 0, 1, 2]),
        Perm4([3, 0, 2, 1]),
        Perm4([3, 1, 0, 2]),
        Perm4([3, 1, 2, 0]),
        Perm4([3, 2, 0, 1]),
        Perm4([3, 2, 1, 0]),
    ]
}

/// All 768 transforms in the fixed order used for tie-breaking: permutation
/// (lexicographic), then input mask, then output negation.
pub fn all_transforms() -> impl Iterator<Item = NpnTransform> {
    all_perms4().into_iter().flat_map(|perm| {
        (0u8..16).flat_map(move |input_neg_mask| {
            [false, true].into_iter().map(move |output_neg| NpnTransform {
                perm,
                input_neg_mask,
                output_neg,
            })
        })
    })
}

/// Returns the NPN-canonical representative for `tt`, and the transform
/// relating them: `tt == unapply_npn(canon_tt, xform)`.
///
/// Ties between transforms that reach the same representative go to the first
/// one in `all_transforms` order.
pub fn exact_npn_canonization(tt: TruthTable16) -> (TruthTable16, NpnTransform) {
    let mut best_tt = TruthTable16(u16::MAX);
    let mut best_xform = NpnTransform::identity();
    let mut found = false;

    for xform in all_transforms() {
        let cand = apply_npn(tt, xform);
        if !found || cand.0 < best_tt.0 {
            best_tt = cand;
            best_xform = xform;
            found = true;
        }
    }

    (best_tt, best_xform)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonEntry {
    pub representative: TruthTable16,
    pub xform: NpnTransform,
}

/// Dense canonicalization results for every 4-input function.
pub struct CanonTable {
    dense: Vec<CanonEntry>, // length 65536
    num_classes: usize,
}

impl CanonTable {
    /// Builds the table by orbit enumeration.
    ///
    /// Functions are scanned in ascending order; the first unassigned one is
    /// the minimum of its class, and its images under every transform are
    /// assigned to it. Each function receives the same transform
    /// `exact_npn_canonization` would pick.
    pub fn build() -> Self {
        let mut dense: Vec<Option<CanonEntry>> = vec![None; NUM_FUNCTIONS];
        let mut num_classes = 0usize;
        let transforms: Vec<NpnTransform> = all_transforms().collect();

        let mut tt = TruthTable16::const0();
        loop {
            if dense[tt.0 as usize].is_none() {
                num_classes += 1;
                for &xform in &transforms {
                    let image = unapply_npn(tt, xform);
                    let slot = &mut dense[image.0 as usize];
                    if slot.is_none() {
                        *slot = Some(CanonEntry {
                            representative: tt,
                            xform,
                        });
                    }
                }
            }
            tt = tt.next();
            if tt.is_const0() {
                break;
            }
        }

        log::debug!("CanonTable::build: classes={}", num_classes);
        let dense = dense
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                // Every function lies in the orbit of its class minimum, which
                // was visited before it.
                entry.unwrap_or_else(|| panic!("function 0x{:04x} left unassigned", i))
            })
            .collect();
        Self { dense, num_classes }
    }

    /// Returns a process-wide table, built on first use.
    pub fn shared() -> &'static CanonTable {
        static SHARED: Lazy<CanonTable> = Lazy::new(CanonTable::build);
        &SHARED
    }

    #[inline]
    pub fn lookup(&self, tt: TruthTable16) -> CanonEntry {
        self.dense[tt.0 as usize]
    }

    #[inline]
    pub fn representative(&self, tt: TruthTable16) -> TruthTable16 {
        self.dense[tt.0 as usize].representative
    }

    pub fn is_representative(&self, tt: TruthTable16) -> bool {
        self.representative(tt) == tt
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Iterates the class representatives in ascending order.
    pub fn representatives(&self) -> impl Iterator<Item = TruthTable16> + '_ {
        self.dense
            .iter()
            .enumerate()
            .filter(|(i, entry)| entry.representative.0 as usize == *i)
            .map(|(_, entry)| entry.representative)
    }
}

#![allow(non_snake_case)]

//! Fixed-base scalar multiplication with a signed comb table.
//!
//! The scalar is viewed as `COMB_N` combs of `COMB_T` teeth, the teeth
//! within a comb spaced `COMB_S` bits apart; the table stores, for each
//! comb, every sign pattern of its teeth (with the top tooth fixed
//! positive), so that one table hit per comb consumes `COMB_T` signed
//! bits at once.  Evaluation then needs only `COMB_S` doublings in
//! total.
//!
//! Signed-bit recoding requires an odd scalar; evaluation conditionally
//! adds the (odd) group order first, which does not change the result.

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use zeroize::Zeroize;

use crate::backend::serial::u64::scalar::L;
use crate::edwards::EdwardsPoint;
use crate::edwards::ProjectiveNielsPoint;
use crate::scalar::Scalar;
use crate::traits::BasepointTable;
use crate::traits::Identity;

/// Number of combs.
pub const COMB_N: usize = 5;
/// Teeth per comb.
pub const COMB_T: usize = 5;
/// Spacing between the teeth of one comb, in bits.
pub const COMB_S: usize = 11;

// COMB_N * COMB_T * COMB_S = 275 bits, enough for any scalar below
// 2*l < 2^254 after the odd-conditioning step.
const COMB_BITS: usize = COMB_N * COMB_T * COMB_S;

/// One comb: all tooth sign patterns with the top tooth positive.
#[derive(Copy, Clone)]
pub(crate) struct CombRow([ProjectiveNielsPoint; 1 << (COMB_T - 1)]);

impl CombRow {
    /// Look up the entry for `index` in constant time, negating it if
    /// `negate` is set.
    fn select(&self, index: u8, negate: Choice) -> ProjectiveNielsPoint {
        debug_assert!((index as usize) < (1 << (COMB_T - 1)));

        let mut entry = ProjectiveNielsPoint::identity();
        for (j, candidate) in self.0.iter().enumerate() {
            entry.conditional_assign(candidate, (j as u8).ct_eq(&index));
        }
        entry.conditional_negate(negate);
        entry
    }
}

/// A precomputed comb table of multiples of a point, enabling fast
/// fixed-base scalar multiplication.
#[derive(Copy, Clone)]
pub struct EdwardsBasepointTable {
    rows: [CombRow; COMB_N],
}

impl Zeroize for EdwardsBasepointTable {
    fn zeroize(&mut self) {
        for row in self.rows.iter_mut() {
            for entry in row.0.iter_mut() {
                entry.zeroize();
            }
        }
    }
}

/// Recode `scalar` into `COMB_BITS` signed bits \\( \epsilon_i \in \\{-1,+1\\} \\)
/// with \\( \sum_i \epsilon_i 2^i \\) equal to the scalar (or the
/// scalar plus \\( \ell \\) when the scalar is even).  Returns the bits
/// of \\( y = (x + 2^{275} - 1)/2 \\); tooth \\( i \\) is then
/// \\( 2 y_i - 1 \\).
fn recode(scalar: &Scalar) -> [u64; 5] {
    let bytes = scalar.to_bytes();
    let mut w = [0u64; 5];
    for i in 0..4 {
        let mut word = 0u64;
        for j in 0..8 {
            word |= (bytes[i * 8 + j] as u64) << (8 * j);
        }
        w[i] = word;
    }

    // Contract the order's 56-bit limbs into 64-bit words.
    let l0 = (L[1] << 56) | L[0];
    let l1 = (L[2] << 48) | (L[1] >> 8);
    let l2 = (L[3] << 40) | (L[2] >> 16);
    let l3 = (L[4] << 32) | (L[3] >> 24);
    let l_words = [l0, l1, l2, l3];

    // x <- x + l if x is even; l is odd, so x becomes odd.
    let even_mask = (w[0] & 1).wrapping_sub(1);
    let mut carry = 0u64;
    for i in 0..4 {
        let (s1, c1) = w[i].overflowing_add(l_words[i] & even_mask);
        let (s2, c2) = s1.overflowing_add(carry);
        w[i] = s2;
        carry = (c1 as u64) + (c2 as u64);
    }
    w[4] = carry;

    // y <- (x + 2^275 - 1) / 2.  The constant has all ones below bit
    // 275, so add it word by word, then shift right one bit.
    let addend = [
        u64::max_value(),
        u64::max_value(),
        u64::max_value(),
        u64::max_value(),
        (1u64 << (COMB_BITS - 256)) - 1,
    ];
    let mut carry = 0u64;
    for i in 0..5 {
        let (s1, c1) = w[i].overflowing_add(addend[i]);
        let (s2, c2) = s1.overflowing_add(carry);
        w[i] = s2;
        carry = (c1 as u64) + (c2 as u64);
    }
    debug_assert!(carry == 0);

    for i in 0..4 {
        w[i] = (w[i] >> 1) | (w[i + 1] << 63);
    }
    w[4] >>= 1;

    w
}

#[inline(always)]
fn bit(words: &[u64; 5], index: usize) -> u64 {
    (words[index / 64] >> (index % 64)) & 1
}

impl BasepointTable for EdwardsBasepointTable {
    type Point = EdwardsPoint;

    /// Create a table of precomputed multiples of `basepoint`.
    fn create(basepoint: &EdwardsPoint) -> EdwardsBasepointTable {
        // powers[k] = 2^(k*COMB_S) * basepoint
        let mut powers = [EdwardsPoint::identity(); COMB_N * COMB_T];
        powers[0] = *basepoint;
        for k in 1..(COMB_N * COMB_T) {
            powers[k] = powers[k - 1].mul_by_pow_2(COMB_S as u32);
        }

        let empty_row = CombRow([ProjectiveNielsPoint::identity(); 1 << (COMB_T - 1)]);
        let mut rows = [empty_row; COMB_N];
        for i in 0..COMB_N {
            for pattern in 0..(1usize << (COMB_T - 1)) {
                // Entry = Q_top + sum_j (pattern_j ? + : -) Q_j,
                // where Q_j = powers[i*COMB_T + j].
                let mut entry = powers[i * COMB_T + COMB_T - 1];
                for j in 0..(COMB_T - 1) {
                    let Q_j = &powers[i * COMB_T + j];
                    if (pattern >> j) & 1 == 1 {
                        entry = &entry + Q_j;
                    } else {
                        entry = &entry - Q_j;
                    }
                }
                rows[i].0[pattern] = entry.to_projective_niels();
            }
        }

        EdwardsBasepointTable { rows }
    }

    /// Recover the point this table was built from.
    fn basepoint(&self) -> EdwardsPoint {
        self.mul_base(&Scalar::one())
    }

    /// Compute `scalar * B`, where `B` is the table's point, in
    /// constant time.
    fn mul_base(&self, scalar: &Scalar) -> EdwardsPoint {
        let y = recode(scalar);

        let mut acc = EdwardsPoint::identity();
        for l in (0..COMB_S).rev() {
            if l != COMB_S - 1 {
                acc = acc.double();
            }
            for i in 0..COMB_N {
                // Tooth j of comb i sits at bit (i*COMB_T + j)*COMB_S + l.
                let base = i * COMB_T;
                let top = bit(&y, (base + COMB_T - 1) * COMB_S + l);
                let mut index = 0u8;
                for j in 0..(COMB_T - 1) {
                    index |= (bit(&y, (base + j) * COMB_S + l) as u8) << j;
                }

                // If the top tooth is -1, negate the whole pattern:
                // flip the index bits and negate the selected entry.
                let negate = Choice::from((top ^ 1) as u8);
                let flip = (top as u8).wrapping_sub(1) & ((1 << (COMB_T - 1)) - 1);
                let entry = self.rows[i].select(index ^ flip, negate);

                acc = (&acc + &entry).to_extended();
            }
        }

        acc
    }
}

impl EdwardsBasepointTable {
    /// The size in bytes of a comb table, for callers that allocate
    /// storage themselves.
    pub const SIZEOF: usize = core::mem::size_of::<EdwardsBasepointTable>();
    /// The alignment of a comb table.
    pub const ALIGNOF: usize = core::mem::align_of::<EdwardsBasepointTable>();
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;

    #[test]
    fn recode_reconstructs_scalar() {
        // sum_i (2*y_i - 1) * 2^i == x (mod l), for odd and even x.
        for &seed in &[0x11u8, 0x12u8] {
            let s = Scalar::from_bytes_mod_order([seed; 32]);
            let y = recode(&s);
            let two = Scalar::from(2u64);
            let mut acc = Scalar::zero();
            for i in (0..COMB_BITS).rev() {
                acc = acc * two;
                if bit(&y, i) == 1 {
                    acc = acc + Scalar::one();
                } else {
                    acc = acc - Scalar::one();
                }
            }
            assert_eq!(acc, s);
        }
    }

    #[test]
    fn comb_matches_variable_base() {
        let B = constants::basepoint().0;
        let table = EdwardsBasepointTable::create(&B);
        for &k in &[0u64, 1, 2, 8, 94839243, 0xffff_ffff_ffff_ffff] {
            let s = Scalar::from(k);
            assert_eq!(table.mul_base(&s), B * s);
        }
    }

    #[test]
    fn basepoint_roundtrip() {
        let B = constants::basepoint().0;
        let table = EdwardsBasepointTable::create(&B);
        assert_eq!(table.basepoint(), B);
    }
}

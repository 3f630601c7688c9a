#![allow(non_snake_case)]

//! Implementation of the interleaved window method, also known as Straus' method.

use core::borrow::Borrow;

use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::LookupTable;

/// Perform multiscalar multiplication by the interleaved window
/// method, also known as Straus' method (since it was apparently
/// [first published][solution] by Straus in 1964, as a solution to [a
/// problem][problem] posted in the American Mathematical Monthly in
/// 1963).
///
/// It is easy to combine two scalar multiplications in this way, and
/// the doubling chain is shared between every term of the sum, so the
/// marginal cost of another base is only its window additions.
///
/// The constant-time version considered here processes the scalars in
/// signed radix 16 and selects every window entry with a full-table
/// scan, so the timing is independent of the scalar values.
///
/// [solution]: https://www.jstor.org/stable/2310929
/// [problem]: https://www.jstor.org/stable/2312273
pub struct Straus {}

impl Straus {
    /// Constant-time Straus multiscalar multiplication.
    pub(crate) fn multiscalar_mul<I, J>(scalars: I, points: J) -> EdwardsPoint
    where
        I: IntoIterator,
        I::Item: Borrow<Scalar>,
        J: IntoIterator,
        J::Item: Borrow<EdwardsPoint>,
    {
        use crate::edwards::ProjectiveNielsPoint;

        let lookup_tables: Vec<LookupTable<ProjectiveNielsPoint>> = points
            .into_iter()
            .map(|point| LookupTable::from(point.borrow()))
            .collect();

        let scalar_digits: Vec<[i8; 64]> = scalars
            .into_iter()
            .map(|s| s.borrow().to_radix_16())
            .collect();

        let mut Q = EdwardsPoint::identity();
        for i in (0..64).rev() {
            Q = Q.mul_by_pow_2(4);
            for (s_i, lookup_table_i) in scalar_digits.iter().zip(lookup_tables.iter()) {
                // R_i = s_{i,j} * P_i
                let R_i = lookup_table_i.select(s_i[i]);
                // Q = 16*Q + R_i
                Q = (&Q + &R_i).to_extended();
            }
        }

        Q
    }
}

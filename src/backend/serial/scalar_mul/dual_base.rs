#![allow(non_snake_case)]

//! Constant-time multiplication of one base by two scalars.

use crate::edwards::EdwardsPoint;
use crate::edwards::ProjectiveNielsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::LookupTable;

/// One pass of the radix-16 ladder over a shared table of odd multiples.
fn ladder(lookup_table: &LookupTable<ProjectiveNielsPoint>, digits: &[i8; 64]) -> EdwardsPoint {
    let mut tmp2;
    let tmp3 = EdwardsPoint::identity();
    let mut tmp1 = &tmp3 + &lookup_table.select(digits[63]);
    for i in (0..63).rev() {
        tmp2 = tmp1.to_projective();
        tmp1 = tmp2.double();
        tmp2 = tmp1.to_projective();
        tmp1 = tmp2.double();
        tmp2 = tmp1.to_projective();
        tmp1 = tmp2.double();
        tmp2 = tmp1.to_projective();
        tmp1 = tmp2.double();
        let tmp = tmp1.to_extended();
        tmp1 = &tmp + &lookup_table.select(digits[i]);
    }
    tmp1.to_extended()
}

/// Compute `(a * P, b * P)` in constant time with respect to both
/// scalars.
///
/// The window table of `P` is built once and shared between the two
/// ladders, which is what makes this cheaper than two independent
/// multiplications.
pub(crate) fn mul(point: &EdwardsPoint, a: &Scalar, b: &Scalar) -> (EdwardsPoint, EdwardsPoint) {
    let lookup_table = LookupTable::from(point);
    let a_digits = a.to_radix_16();
    let b_digits = b.to_radix_16();

    (
        ladder(&lookup_table, &a_digits),
        ladder(&lookup_table, &b_digits),
    )
}

//! Various constants, such as the Ristretto basepoint and the order of
//! the group.
//!
//! The heavyweight objects (the basepoint's decoded representative and
//! its precomputed multiplication table) are built on first use and
//! cached for the lifetime of the process; nothing here mutates after
//! initialisation.

use std::sync::OnceLock;

use crate::edwards::ProjectiveNielsPoint;
use crate::ristretto::CompressedRistretto;
use crate::ristretto::RistrettoBasepointTable;
use crate::ristretto::RistrettoPoint;
use crate::traits::BasepointTable;
use crate::window::NafLookupTable8;

/// The Ristretto basepoint, in `CompressedRistretto` format.
pub const RISTRETTO_BASEPOINT_COMPRESSED: CompressedRistretto = CompressedRistretto([
    0xe2, 0xf2, 0xae, 0x0a, 0x6a, 0xbc, 0x4e, 0x71, 0xa8, 0x84, 0xa9, 0x61, 0xc5, 0x00, 0x51,
    0x5f, 0x58, 0xe3, 0x0b, 0x6a, 0xa5, 0x82, 0xdd, 0x8d, 0xb6, 0xa6, 0x59, 0x45, 0xe0, 0x8d,
    0x2d, 0x76,
]);

/// The canonical little-endian encoding of the group order
/// \\( \ell = 2^{252} + 27742317777372353535851937790883648493 \\).
///
/// Exported as raw bytes because \\( \ell \equiv 0 \\) as a `Scalar`.
pub const BASEPOINT_ORDER_BYTES: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

/// The size in bytes of a precomputed basepoint table, for callers that
/// manage storage themselves.
pub const SIZEOF_PRECOMPUTED_TABLE: usize =
    core::mem::size_of::<RistrettoBasepointTable>();

/// The alignment of a precomputed basepoint table.
pub const ALIGNOF_PRECOMPUTED_TABLE: usize =
    core::mem::align_of::<RistrettoBasepointTable>();

/// The Ristretto basepoint, as a `RistrettoPoint`.
///
/// Decoded from [`RISTRETTO_BASEPOINT_COMPRESSED`] on first use; the
/// decoding is canonical, so the constant is self-checking.
pub fn basepoint() -> RistrettoPoint {
    static BASEPOINT: OnceLock<RistrettoPoint> = OnceLock::new();
    *BASEPOINT.get_or_init(|| {
        RISTRETTO_BASEPOINT_COMPRESSED
            .decompress()
            .expect("the basepoint encoding is canonical")
    })
}

/// A precomputed table of multiples of the Ristretto basepoint, for
/// fast fixed-base scalar multiplication.  Built on first use.
pub fn basepoint_table() -> &'static RistrettoBasepointTable {
    static TABLE: OnceLock<RistrettoBasepointTable> = OnceLock::new();
    TABLE.get_or_init(|| RistrettoBasepointTable::create(&basepoint()))
}

/// Odd multiples of the basepoint for the variable-time double-base
/// multiplication.  Built on first use.
pub(crate) fn basepoint_naf_table() -> &'static NafLookupTable8<ProjectiveNielsPoint> {
    static TABLE: OnceLock<NafLookupTable8<ProjectiveNielsPoint>> = OnceLock::new();
    TABLE.get_or_init(|| NafLookupTable8::from(&basepoint().0))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::constants as field_constants;
    use crate::field::FieldElement;
    use crate::scalar::Scalar;
    use crate::traits::{IsIdentity, ValidityCheck};

    /// Test that SQRT_M1 is the positive square root of -1
    #[test]
    fn test_sqrt_minus_one() {
        let minus_one = FieldElement::minus_one();
        let sqrt_m1_sq = &field_constants::SQRT_M1 * &field_constants::SQRT_M1;
        assert_eq!(minus_one, sqrt_m1_sq);
        assert!(bool::from(!field_constants::SQRT_M1.is_negative()));
    }

    #[test]
    fn test_sqrt_constants_sign() {
        let minus_one = FieldElement::minus_one();
        let (was_nonzero_square, invsqrt_m1) = minus_one.invsqrt();
        assert!(bool::from(was_nonzero_square));
        let sign_test_sqrt = &invsqrt_m1 * &field_constants::SQRT_M1;
        assert_eq!(sign_test_sqrt, minus_one);
    }

    #[test]
    fn test_sqrt_ad_minus_one() {
        let a = FieldElement::minus_one();
        let ad_minus_one = &(&a * &field_constants::EDWARDS_D) + &a;
        let should_be_ad_minus_one = field_constants::SQRT_AD_MINUS_ONE.square();
        assert_eq!(should_be_ad_minus_one, ad_minus_one);
    }

    #[test]
    fn test_invsqrt_a_minus_d() {
        // 1/sqrt(a-d) squared times (a-d) is one.
        let a = FieldElement::minus_one();
        let a_minus_d = &a - &field_constants::EDWARDS_D;
        let check = &field_constants::INVSQRT_A_MINUS_D.square() * &a_minus_d;
        assert_eq!(check, FieldElement::one());
    }

    #[test]
    fn test_one_minus_d_squared() {
        let one = FieldElement::one();
        let d_sq = field_constants::EDWARDS_D.square();
        assert_eq!(&one - &d_sq, field_constants::ONE_MINUS_EDWARDS_D_SQUARED);
        let d_minus_one = &field_constants::EDWARDS_D - &one;
        assert_eq!(
            d_minus_one.square(),
            field_constants::EDWARDS_D_MINUS_ONE_SQUARED
        );
    }

    #[test]
    fn basepoint_is_valid_and_nontrivial() {
        let B = basepoint();
        assert!(B.0.is_valid());
        assert!(!B.is_identity());
    }

    #[test]
    fn basepoint_has_order_l() {
        let B = basepoint();
        // (l - 1) B + B == identity
        let l_minus_one = -Scalar::one();
        let almost = &B * &l_minus_one;
        assert!((&almost + &B).is_identity());
        assert_eq!(almost, -B);
    }

    #[test]
    fn order_bytes_reduce_to_zero() {
        assert_eq!(
            Scalar::from_bytes_mod_order(BASEPOINT_ORDER_BYTES),
            Scalar::zero()
        );
        let not_canonical: Option<Scalar> =
            Scalar::from_canonical_bytes(BASEPOINT_ORDER_BYTES).into();
        assert!(not_canonical.is_none());
    }

    #[test]
    fn basepoint_table_matches_basepoint() {
        let table = basepoint_table();
        assert_eq!(table.basepoint(), basepoint());
        let s = Scalar::from(104729u64);
        assert_eq!(table.mul_base(&s), &basepoint() * &s);
    }

    #[test]
    fn table_geometry_is_published() {
        assert_eq!(
            SIZEOF_PRECOMPUTED_TABLE,
            core::mem::size_of::<RistrettoBasepointTable>()
        );
        assert!(ALIGNOF_PRECOMPUTED_TABLE.is_power_of_two());
    }
}

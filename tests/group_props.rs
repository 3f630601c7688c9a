//! Property-based tests of the algebraic structure.

use proptest::prelude::*;

use ristretto255::constants;
use ristretto255::ristretto::RistrettoPoint;
use ristretto255::scalar::Scalar;
use ristretto255::traits::{Identity, IsIdentity, MultiscalarMul};

fn scalars() -> impl Strategy<Value = Scalar> {
    prop::array::uniform32(any::<u8>()).prop_map(Scalar::from_bytes_mod_order)
}

fn points() -> impl Strategy<Value = RistrettoPoint> {
    (prop::array::uniform32(any::<u8>()), prop::array::uniform32(any::<u8>())).prop_map(
        |(lo, hi)| {
            let mut bytes = [0u8; 64];
            bytes[..32].copy_from_slice(&lo);
            bytes[32..].copy_from_slice(&hi);
            RistrettoPoint::from_uniform_bytes(&bytes)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

    #[test]
    fn scalar_addition_is_associative(a in scalars(), b in scalars(), c in scalars()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn scalar_multiplication_distributes(a in scalars(), b in scalars(), c in scalars()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn scalar_inverse_is_inverse(a in scalars()) {
        prop_assume!(a != Scalar::zero());
        let ainv = a.invert().unwrap();
        prop_assert_eq!(a * ainv, Scalar::one());
    }

    #[test]
    fn scalar_halve_undoes_doubling(a in scalars()) {
        prop_assert_eq!(a.halve() + a.halve(), a);
        prop_assert_eq!((a + a).halve(), a);
    }

    #[test]
    fn point_addition_is_associative(p in points(), q in points(), r in points()) {
        prop_assert_eq!((p + q) + r, p + (q + r));
    }

    #[test]
    fn point_negation_cancels(p in points()) {
        prop_assert!((p + (-p)).is_identity());
        prop_assert_eq!(p - p, RistrettoPoint::identity());
    }

    #[test]
    fn double_is_self_addition(p in points()) {
        prop_assert_eq!(p.double(), p + p);
    }

    #[test]
    fn scalar_mul_distributes_over_points(k in scalars(), p in points(), q in points()) {
        prop_assert_eq!((p + q) * k, p * k + q * k);
    }

    #[test]
    fn scalar_mul_distributes_over_scalars(k1 in scalars(), k2 in scalars(), p in points()) {
        prop_assert_eq!(p * (k1 + k2), p * k1 + p * k2);
    }

    #[test]
    fn multiplying_by_group_order_gives_identity(p in points()) {
        // l = (l - 1) + 1, and -1 represents l - 1.
        let almost = p * (-Scalar::one());
        prop_assert!((almost + p).is_identity());
    }

    #[test]
    fn codec_roundtrip(p in points()) {
        let decoded = p.compress().decompress().unwrap();
        prop_assert_eq!(decoded, p);
        prop_assert_eq!(decoded.compress(), p.compress());
    }

    #[test]
    fn encodings_are_equal_iff_elements_are(p in points(), q in points()) {
        prop_assert_eq!(p.compress() == q.compress(), p == q);
    }

    #[test]
    fn torque_does_not_change_the_element(p in points()) {
        let torqued = p.debugging_torque();
        prop_assert_eq!(torqued.compress(), p.compress());
    }

    #[test]
    fn pscale_does_not_change_the_element(p in points(), factor in prop::array::uniform32(any::<u8>())) {
        let scaled = p.debugging_pscale(&factor);
        prop_assert_eq!(scaled.compress(), p.compress());
    }

    #[test]
    fn multiscalar_matches_naive_sum(a in scalars(), b in scalars(), p in points(), q in points()) {
        let fast = RistrettoPoint::multiscalar_mul(&[a, b], &[p, q]);
        prop_assert_eq!(fast, p * a + q * b);
    }

    #[test]
    fn dual_scalarmul_matches_two_multiplications(a in scalars(), b in scalars(), p in points()) {
        let (ap, bp) = p.dual_scalarmul(&a, &b);
        prop_assert_eq!(ap, p * a);
        prop_assert_eq!(bp, p * b);
    }

    #[test]
    fn vartime_double_base_matches_constant_time(a in scalars(), b in scalars(), p in points()) {
        let fast = RistrettoPoint::vartime_double_scalar_mul_basepoint(&a, &p, &b);
        prop_assert_eq!(fast, p * a + constants::basepoint() * b);
    }

    #[test]
    fn elligator_inverse_images_map_back(p in points(), which in 0u32..32) {
        let inverted = p.invert_elligator_nonuniform(which);
        if bool::from(inverted.is_some()) {
            let bytes = inverted.unwrap();
            prop_assert_eq!(RistrettoPoint::from_hash_nonuniform(&bytes), p);
        }
    }

    #[test]
    fn direct_scalarmul_matches_decoded_path(k in scalars(), p in points()) {
        let wire = p.compress();
        let direct = RistrettoPoint::direct_scalarmul(&wire, &k, true, false).unwrap();
        prop_assert_eq!(direct, (p * k).compress());
    }
}

/// Over many random elements, each `which` branch of the Elligator
/// inverse should succeed for roughly half of the inputs.
#[test]
fn elligator_inverse_success_rate_is_about_half() {
    let b = constants::basepoint();
    let mut successes = 0u32;
    let mut trials = 0u32;
    for k in 1u64..41 {
        let p = &b * &Scalar::from(k.wrapping_mul(0x9e3779b97f4a7c15));
        for which in 0..8u32 {
            trials += 1;
            if bool::from(p.invert_elligator_nonuniform(which).is_some()) {
                successes += 1;
            }
        }
    }
    assert_eq!(trials, 320);
    // Expected 160; allow a wide margin.
    assert!(
        successes >= 110 && successes <= 210,
        "successes = {}",
        successes
    );
}

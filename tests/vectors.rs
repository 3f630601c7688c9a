//! End-to-end tests against the published ristretto255 test vectors.

use sha2::Sha512;

use ristretto255::constants;
use ristretto255::ristretto::{CompressedRistretto, RistrettoPoint};
use ristretto255::scalar::Scalar;
use ristretto255::traits::{BasepointTable, Identity, MultiscalarMul};

fn compressed(hex_str: &str) -> CompressedRistretto {
    let bytes = hex::decode(hex_str).unwrap();
    CompressedRistretto::from_slice(&bytes)
}

#[test]
fn identity_encodes_as_all_zero() {
    assert_eq!(
        RistrettoPoint::identity().compress(),
        compressed("0000000000000000000000000000000000000000000000000000000000000000")
    );
}

#[test]
fn basepoint_encoding_vector() {
    let expected =
        compressed("e2f2ae0a6abc4e71a884a961c500515f58e30b6aa582dd8db6a65945e08d2d76");
    assert_eq!(constants::RISTRETTO_BASEPOINT_COMPRESSED, expected);
    assert_eq!(constants::basepoint().compress(), expected);
}

#[test]
fn double_basepoint_encoding_vector() {
    let expected =
        compressed("6a493210f7499cd17fecb510ae0cea23a110e8d5b901f8acadd3095c73a3b919");
    let b = constants::basepoint();
    assert_eq!(b.double().compress(), expected);
}

#[test]
fn scalar_two_agrees_across_all_multiplication_paths() {
    let expected =
        compressed("6a493210f7499cd17fecb510ae0cea23a110e8d5b901f8acadd3095c73a3b919");
    let b = constants::basepoint();
    let two = Scalar::from(2u64);

    // add, double
    assert_eq!((&b + &b).compress(), expected);
    assert_eq!(b.double().compress(), expected);

    // variable-base
    assert_eq!((&b * &two).compress(), expected);

    // fixed-base comb
    assert_eq!(constants::basepoint_table().mul_base(&two).compress(), expected);

    // multiscalar (Straus) as 1*B + 1*B
    let ones = [Scalar::one(), Scalar::one()];
    let points = [b, b];
    assert_eq!(
        RistrettoPoint::multiscalar_mul(&ones, &points).compress(),
        expected
    );

    // dual
    let (two_b, four_b) = b.dual_scalarmul(&two, &Scalar::from(4u64));
    assert_eq!(two_b.compress(), expected);
    assert_eq!(four_b, b.double().double());

    // variable-time double-base as 0*B2 + 2*B
    let zero = Scalar::zero();
    assert_eq!(
        RistrettoPoint::vartime_double_scalar_mul_basepoint(&zero, &b, &two).compress(),
        expected
    );

    // wire-to-wire
    let direct = RistrettoPoint::direct_scalarmul(
        &constants::RISTRETTO_BASEPOINT_COMPRESSED,
        &two,
        false,
        false,
    )
    .unwrap();
    assert_eq!(direct, expected);
}

#[test]
fn all_ones_string_must_fail_to_decode() {
    let bad =
        compressed("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
    assert!(bad.decompress().is_none());
}

#[test]
fn more_bad_encodings_fail_to_decode() {
    let bad_encodings = [
        // Non-canonical field element (p - 1).
        "ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
        // Negative field element (s = 1 has lobit 0, but s = -1 is the
        // canonical encoding of p - 1, caught above; here: 2 with its
        // sign flipped, i.e. p - 2).
        "ebffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
    ];
    for hex_str in bad_encodings.iter() {
        assert!(compressed(hex_str).decompress().is_none(), "{}", hex_str);
    }
}

#[test]
fn uniform_hash_to_group_espresso_vector() {
    // From the ristretto255 one-way-map test vectors.
    let label = b"Ristretto is traditionally a short shot of espresso coffee";
    let point = RistrettoPoint::hash_from_bytes::<Sha512>(label);
    let expected =
        compressed("3066f82a1a747d45120d1740f14358531a8f04bbffe6a819f86dfe50f44a0a46");
    assert_eq!(point.compress(), expected);
}

#[test]
fn compressed_roundtrip_through_decompress() {
    let b = constants::basepoint();
    for k in 0u64..16 {
        let p = &b * &Scalar::from(k);
        let encoded = p.compress();
        let decoded = encoded.decompress().unwrap();
        assert_eq!(decoded, p);
        assert_eq!(decoded.compress(), encoded);
    }
}

#[test]
fn scalar_decode_vectors() {
    // l - 1 is canonical, l and above are not.
    let l_minus_1: [u8; 32] = [
        0xec, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
        0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x10,
    ];
    let ok: Option<Scalar> = Scalar::from_canonical_bytes(l_minus_1).into();
    assert_eq!(ok.unwrap(), -Scalar::one());

    let not_ok: Option<Scalar> =
        Scalar::from_canonical_bytes(constants::BASEPOINT_ORDER_BYTES).into();
    assert!(not_ok.is_none());
}

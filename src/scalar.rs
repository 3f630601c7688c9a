// Based on curve25519-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence

//! Arithmetic on scalars (integers mod the group order).
//!
//! Both the ristretto255 group and the Ed25519 basepoint have prime order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\).
//!
//! All arithmetic on `Scalars` is done modulo \\( \ell \\), and every
//! `Scalar` holds the canonical (fully reduced) little-endian encoding
//! of its value.
//!
//! To create a [`Scalar`](struct.Scalar.html) from a supposedly canonical
//! encoding, use [`Scalar::from_canonical_bytes`], which returns the
//! reduced value together with a mask telling whether the encoding was
//! canonical.  To unconditionally reduce a 256-bit or 512-bit integer,
//! use [`Scalar::from_bytes_mod_order`] or
//! [`Scalar::from_bytes_mod_order_wide`]; integers of any other length
//! reduce through [`Scalar::from_le_bytes_mod_order`].

use core::borrow::Borrow;
use core::cmp::{Eq, PartialEq};
use core::fmt::Debug;
use core::iter::{Product, Sum};
use core::ops::Index;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use rand_core::{CryptoRng, RngCore};

use digest::generic_array::typenum::U64;
use digest::Digest;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

use zeroize::Zeroize;

use crate::backend;

/// An `UnpackedScalar` represents an element of the field GF(l), optimized for speed.
///
/// This is a type alias for one of the scalar types in the `backend`
/// module.
type UnpackedScalar = backend::serial::u64::scalar::Scalar56;

/// The `Scalar` struct holds an integer \\(s < \ell \\) which
/// represents an element of \\(\mathbb Z / \ell\\).
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// `bytes` is a little-endian byte encoding of an integer representing a scalar modulo the
    /// group order.
    ///
    /// # Invariant
    ///
    /// The integer representing this scalar is canonical: it is always
    /// fully reduced mod \\( \ell \\).  Every constructor below
    /// maintains this.
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// Construct a `Scalar` by reducing a 256-bit little-endian integer
    /// modulo the group order \\( \ell \\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        UnpackedScalar::from_bytes(&bytes).reduce().pack()
    }

    /// Construct a `Scalar` by reducing a 512-bit little-endian integer
    /// modulo the group order \\( \ell \\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        UnpackedScalar::from_bytes_wide(input).pack()
    }

    /// Construct a `Scalar` by reducing a little-endian integer of any
    /// length modulo the group order \\( \ell \\).
    ///
    /// The input is folded 32 bytes at a time, most significant chunk
    /// first, through the wide reduction.
    pub fn from_le_bytes_mod_order(input: &[u8]) -> Scalar {
        let mut acc = Scalar::zero();
        for chunk in input.rchunks(32) {
            // acc <- acc * 2^(8*len) + chunk
            let mut wide = [0u8; 64];
            wide[..chunk.len()].copy_from_slice(chunk);
            wide[chunk.len()..chunk.len() + 32].copy_from_slice(&acc.bytes);
            acc = Scalar::from_bytes_mod_order_wide(&wide);
        }
        acc
    }

    /// Attempt to construct a `Scalar` from a canonical byte representation.
    ///
    /// # Return
    ///
    /// A `CtOption` whose mask is set iff `bytes` was the canonical
    /// encoding of a value below \\( \ell \\).  The wrapped scalar is
    /// the reduced value in either case, so callers that want the
    /// original C-style "reduce and report" behaviour can combine this
    /// with [`Scalar::from_bytes_mod_order`].
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> CtOption<Scalar> {
        let unpacked = UnpackedScalar::from_bytes(&bytes);
        let is_canonical = unpacked.is_canonical();
        CtOption::new(unpacked.reduce().pack(), is_canonical)
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).unwrap_u8() == 1u8
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl Index<usize> for Scalar {
    type Output = u8;

    /// Index the bytes of the representative for this `Scalar`.  Mutation is not permitted.
    fn index(&self, _index: usize) -> &u8 {
        &(self.bytes[_index])
    }
}

impl<'b> MulAssign<&'b Scalar> for Scalar {
    fn mul_assign(&mut self, _rhs: &'b Scalar) {
        *self = UnpackedScalar::mul(&self.unpack(), &_rhs.unpack()).pack();
    }
}

define_mul_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn mul(self, _rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::mul(&self.unpack(), &_rhs.unpack()).pack()
    }
}

define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> AddAssign<&'b Scalar> for Scalar {
    fn add_assign(&mut self, _rhs: &'b Scalar) {
        *self = *self + _rhs;
    }
}

define_add_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn add(self, _rhs: &'b Scalar) -> Scalar {
        // Both operands hold reduced values, so the backend addition's
        // single conditional subtraction keeps the result reduced.
        UnpackedScalar::add(&self.unpack(), &_rhs.unpack()).pack()
    }
}

define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> SubAssign<&'b Scalar> for Scalar {
    fn sub_assign(&mut self, _rhs: &'b Scalar) {
        *self = *self - _rhs;
    }
}

define_sub_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::sub(&self.unpack(), &rhs.unpack()).pack()
    }
}

define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        UnpackedScalar::neg(&self.unpack()).pack()
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 32];
        for i in 0..32 {
            bytes[i] = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
        }
        Scalar { bytes }
    }
}

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                formatter.write_str("a canonically encoded 32-byte scalar")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or(serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                let s: Option<Scalar> = Scalar::from_canonical_bytes(bytes).into();
                s.ok_or(serde::de::Error::custom(
                    &"scalar was not canonically encoded",
                ))
            }
        }

        deserializer.deserialize_tuple(32, ScalarVisitor)
    }
}

impl<T> Product<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::one(), |acc, item| acc * item.borrow())
    }
}

impl<T> Sum<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::zero(), |acc, item| acc + item.borrow())
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::zero()
    }
}

impl From<u8> for Scalar {
    fn from(x: u8) -> Scalar {
        let mut s_bytes = [0u8; 32];
        s_bytes[0] = x;
        Scalar { bytes: s_bytes }
    }
}

impl From<u16> for Scalar {
    fn from(x: u16) -> Scalar {
        use byteorder::{ByteOrder, LittleEndian};
        let mut s_bytes = [0u8; 32];
        LittleEndian::write_u16(&mut s_bytes, x);
        Scalar { bytes: s_bytes }
    }
}

impl From<u32> for Scalar {
    fn from(x: u32) -> Scalar {
        use byteorder::{ByteOrder, LittleEndian};
        let mut s_bytes = [0u8; 32];
        LittleEndian::write_u32(&mut s_bytes, x);
        Scalar { bytes: s_bytes }
    }
}

impl From<u64> for Scalar {
    /// Construct a scalar from the given `u64`.
    fn from(x: u64) -> Scalar {
        use byteorder::{ByteOrder, LittleEndian};
        let mut s_bytes = [0u8; 32];
        LittleEndian::write_u64(&mut s_bytes, x);
        Scalar { bytes: s_bytes }
    }
}

impl From<u128> for Scalar {
    fn from(x: u128) -> Scalar {
        use byteorder::{ByteOrder, LittleEndian};
        let mut s_bytes = [0u8; 32];
        LittleEndian::write_u128(&mut s_bytes, x);
        Scalar { bytes: s_bytes }
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Scalar {
    /// Return a `Scalar` chosen uniformly at random using a user-provided RNG.
    ///
    /// # Inputs
    ///
    /// * `rng`: any RNG which implements the `RngCore + CryptoRng` interface.
    ///
    /// # Returns
    ///
    /// A random scalar within ℤ/lℤ.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut scalar_bytes = [0u8; 64];
        rng.fill_bytes(&mut scalar_bytes);
        Scalar::from_bytes_mod_order_wide(&scalar_bytes)
    }

    /// Hash a slice of bytes into a scalar.
    ///
    /// Takes a type parameter `D`, which is any `Digest` producing 64
    /// bytes (512 bits) of output.
    ///
    /// Convenience wrapper around `from_hash`.
    pub fn hash_from_bytes<D>(input: &[u8]) -> Scalar
    where
        D: Digest<OutputSize = U64> + Default,
    {
        let mut hash = D::default();
        hash.update(input);
        Scalar::from_hash(hash)
    }

    /// Construct a scalar from an existing `Digest` instance.
    ///
    /// Use this instead of `hash_from_bytes` if it is more convenient
    /// to stream data into the `Digest` than to pass a single byte
    /// slice.
    pub fn from_hash<D>(hash: D) -> Scalar
    where
        D: Digest<OutputSize = U64>,
    {
        let mut output = [0u8; 64];
        output.copy_from_slice(hash.finalize().as_slice());
        Scalar::from_bytes_mod_order_wide(&output)
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the little-endian byte encoding of the integer representing this Scalar.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Construct the scalar \\( 0 \\).
    pub fn zero() -> Self {
        Scalar { bytes: [0u8; 32] }
    }

    /// Construct the scalar \\( 1 \\).
    pub fn one() -> Self {
        Scalar {
            bytes: [
                1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                0, 0, 0, 0, 0,
            ],
        }
    }

    /// Compute `self / 2 (mod l)`.
    ///
    /// `halve` is the inverse of doubling: `s.halve() + s.halve() == s`
    /// for every scalar, and `Scalar::one().halve()` is
    /// \\( (\ell+1)/2 \\).
    pub fn halve(&self) -> Scalar {
        UnpackedScalar::halve(&self.unpack()).pack()
    }

    /// Compute the multiplicative inverse of this scalar.
    ///
    /// # Return
    ///
    /// A `CtOption` wrapping \\( s^{-1} \bmod \ell \\), whose mask is
    /// set iff the input was nonzero.  The wrapped value for a zero
    /// input is zero.
    pub fn invert(&self) -> CtOption<Scalar> {
        let inverse = self.unpack().invert().pack();
        CtOption::new(inverse, !self.ct_eq(&Scalar::zero()))
    }

    /// Write this scalar in radix 16, with coefficients in \\([-8,8)\\),
    /// i.e., compute \\(a\_i\\) such that
    /// $$
    ///    a = a\_0 + a\_1 16\^1 + \cdots + a_{63} 16\^{63},
    /// $$
    /// with \\(-8 \leq a_i < 8\\) for \\(0 \leq i < 63\\) and \\(-8 \leq a_{63} \leq 8\\).
    pub(crate) fn to_radix_16(&self) -> [i8; 64] {
        debug_assert!(self[31] <= 127);
        let mut output = [0i8; 64];

        // Step 1: change radix.
        // Convert from radix 256 (bytes) to radix 16 (nibbles)
        #[inline(always)]
        fn bot_half(x: u8) -> u8 {
            x & 15
        }
        #[inline(always)]
        fn top_half(x: u8) -> u8 {
            (x >> 4) & 15
        }

        for i in 0..32 {
            output[2 * i] = bot_half(self[i]) as i8;
            output[2 * i + 1] = top_half(self[i]) as i8;
        }
        // Precondition note: since self[31] <= 127, output[63] <= 7

        // Step 2: recenter coefficients from [0,16) to [-8,8)
        for i in 0..63 {
            let carry = (output[i] + 8) >> 4;
            output[i] -= carry << 4;
            output[i + 1] += carry;
        }
        // Precondition note: output[63] is not recentered.  It
        // increases by carry <= 1.  Thus output[63] <= 8.

        output
    }

    /// Compute a width-\\(w\\) "Non-Adjacent Form" of this scalar.
    ///
    /// A width-\\(w\\) NAF of a positive integer \\(k\\) is an expression
    /// $$
    /// k = \sum_{i=0}\^m n\_i 2\^i,
    /// $$
    /// where each nonzero coefficient \\(n\_i\\) is odd and bounded by
    /// \\(|n\_i| < 2\^{w-1}\\), and among any \\(w\\) consecutive
    /// coefficients at most one is nonzero.
    ///
    /// Intended for use by the variable-time multiplications only.
    pub(crate) fn non_adjacent_form(&self, w: usize) -> [i8; 256] {
        // required by the NAF definition
        debug_assert!(w >= 2);
        // required so that the NAF digits fit in i8
        debug_assert!(w <= 8);

        use byteorder::{ByteOrder, LittleEndian};

        let mut naf = [0i8; 256];

        let mut x_u64 = [0u64; 5];
        LittleEndian::read_u64_into(&self.bytes, &mut x_u64[0..4]);

        let width = 1 << w;
        let window_mask = width - 1;

        let mut pos = 0;
        let mut carry = 0;
        while pos < 256 {
            // Construct a buffer of bits of the scalar, starting at bit `pos`
            let u64_idx = pos / 64;
            let bit_idx = pos % 64;
            let bit_buf: u64 = if bit_idx < 64 - w {
                // This window's bits are contained in a single u64
                x_u64[u64_idx] >> bit_idx
            } else {
                // Combine the current u64's bits with the bits from the next u64
                (x_u64[u64_idx] >> bit_idx) | (x_u64[1 + u64_idx] << (64 - bit_idx))
            };

            // Add the carry into the current window
            let window = carry + (bit_buf & window_mask);

            if window & 1 == 0 {
                // If the window slides over a zero, do nothing.
                pos += 1;
                continue;
            }

            if window < width / 2 {
                carry = 0;
                naf[pos] = window as i8;
            } else {
                carry = 1;
                naf[pos] = (window as i8).wrapping_sub(width as i8);
            }

            pos += w;
        }

        naf
    }

    /// Unpack this `Scalar` to an `UnpackedScalar` for faster arithmetic.
    pub(crate) fn unpack(&self) -> UnpackedScalar {
        UnpackedScalar::from_bytes(&self.bytes)
    }
}

impl UnpackedScalar {
    /// Pack the limbs of this `UnpackedScalar` into a `Scalar`.
    fn pack(&self) -> Scalar {
        Scalar {
            bytes: self.to_bytes(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// x = 2238329342913194256032495932344128051776374960164957527413114840482143558222
    pub static X: Scalar = Scalar {
        bytes: [
            0x4e, 0x5a, 0xb4, 0x34, 0x5d, 0x47, 0x08, 0x84, 0x59, 0x13, 0xb4, 0x64, 0x1b, 0xc2,
            0x7d, 0x52, 0x52, 0xa5, 0x85, 0x10, 0x1b, 0xcc, 0x42, 0x44, 0xd4, 0x49, 0xf4, 0xa8,
            0x79, 0xd9, 0xf2, 0x04,
        ],
    };
    /// 1/x = 6859937278830797291664592131120606308688036382723378951768035303146619657244
    pub static XINV: Scalar = Scalar {
        bytes: [
            0x1c, 0xdc, 0x17, 0xfc, 0xe0, 0xe9, 0xa5, 0xbb, 0xd9, 0x24, 0x7e, 0x56, 0xbb, 0x01,
            0x63, 0x47, 0xbb, 0xba, 0x31, 0xed, 0xd5, 0xa9, 0xbb, 0x96, 0xd5, 0x0b, 0xcd, 0x7a,
            0x3f, 0x96, 0x2a, 0x0f,
        ],
    };

    /// The largest clamped integer
    static LARGEST_CLAMPED_INPUT: [u8; 32] = [
        0xf8, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ];

    #[test]
    fn invert_known_pair() {
        let inv_x = X.invert().unwrap();
        assert_eq!(inv_x, XINV);
        let should_be_one = &inv_x * &X;
        assert_eq!(should_be_one, Scalar::one());
    }

    #[test]
    fn invert_zero_fails() {
        let i: Option<Scalar> = Scalar::zero().invert().into();
        assert!(i.is_none());
    }

    #[test]
    fn non_canonical_decode_fails() {
        // l + 2
        let l_plus_two_bytes: [u8; 32] = [
            0xef, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
            0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x10,
        ];
        let a: Option<Scalar> = Scalar::from_canonical_bytes(l_plus_two_bytes).into();
        assert!(a.is_none());

        // ... but mod-order reduction maps it to two.
        let b = Scalar::from_bytes_mod_order(l_plus_two_bytes);
        assert_eq!(b, Scalar::from(2u64));
    }

    #[test]
    fn canonical_decode_roundtrips() {
        let a: Option<Scalar> = Scalar::from_canonical_bytes(X.to_bytes()).into();
        assert_eq!(a.unwrap(), X);
    }

    #[test]
    fn from_u64_products() {
        let fortytwo = Scalar::from(42u64);
        let six = Scalar::from(6u64);
        let seven = Scalar::from(7u64);
        assert_eq!(fortytwo, six * seven);
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = Scalar::from_bytes_mod_order(LARGEST_CLAMPED_INPUT);
        let b = X;
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a - &a, Scalar::zero());
    }

    #[test]
    fn neg_twice_is_identity() {
        assert_eq!(-(-X), X);
        assert_eq!(-Scalar::zero(), Scalar::zero());
    }

    #[test]
    fn halve_times_two() {
        let two = Scalar::from(2u64);
        assert_eq!(X.halve() * two, X);
        let h = Scalar::one().halve();
        assert_eq!(&h + &h, Scalar::one());
    }

    #[test]
    fn from_le_bytes_mod_order_matches_wide() {
        let mut wide = [0u8; 64];
        for i in 0..64 {
            wide[i] = (i as u8).wrapping_mul(0x93);
        }
        assert_eq!(
            Scalar::from_le_bytes_mod_order(&wide[..]),
            Scalar::from_bytes_mod_order_wide(&wide)
        );
        // Short inputs reduce as plain little-endian integers.
        assert_eq!(Scalar::from_le_bytes_mod_order(&[7u8]), Scalar::from(7u64));
        assert_eq!(Scalar::from_le_bytes_mod_order(&[]), Scalar::zero());
        // A 96-byte input folds consistently: value = 2^512 + 1, where
        // 2^512 mod l is computed independently as (2^256 mod l)^2.
        let mut long = [0u8; 96];
        long[0] = 1;
        long[64] = 1;
        let mut two_to_256 = [0u8; 64];
        two_to_256[32] = 1;
        let t = Scalar::from_bytes_mod_order_wide(&two_to_256);
        let expected = t * t + Scalar::one();
        assert_eq!(Scalar::from_le_bytes_mod_order(&long), expected);
    }

    #[test]
    fn to_radix_16_reconstructs() {
        let digits = X.to_radix_16();
        let sixteen = Scalar::from(16u64);
        let mut acc = Scalar::zero();
        for i in (0..64).rev() {
            acc = acc * sixteen;
            let d = digits[i];
            if d < 0 {
                acc = acc - Scalar::from((-d) as u64);
            } else {
                acc = acc + Scalar::from(d as u64);
            }
        }
        assert_eq!(acc, X);
    }

    #[test]
    fn non_adjacent_form_reconstructs() {
        for &w in &[5usize, 6, 7, 8] {
            let naf = X.non_adjacent_form(w);
            let two = Scalar::from(2u64);
            let mut acc = Scalar::zero();
            for i in (0..256).rev() {
                acc = acc * two;
                let d = naf[i];
                if d < 0 {
                    acc = acc - Scalar::from((-d) as u64);
                } else if d > 0 {
                    acc = acc + Scalar::from(d as u64);
                }
            }
            assert_eq!(acc, X);
        }
    }

    #[test]
    fn sum_and_product_iterators() {
        let two = Scalar::from(2u64);
        let scalars = [two, two, two];
        let sum: Scalar = scalars.iter().sum();
        let product: Scalar = scalars.iter().product();
        assert_eq!(sum, Scalar::from(6u64));
        assert_eq!(product, Scalar::from(8u64));
    }
}

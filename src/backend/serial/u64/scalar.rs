//! Arithmetic mod \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\)
//! with five 56-bit unsaturated limbs, reduced with the Barrett method.

use subtle::Choice;
use subtle::ConditionallySelectable;

use zeroize::Zeroize;

/// The `Scalar56` struct represents an element in \\( \mathbb Z / \ell\mathbb Z \\)
/// as five 56-bit limbs (the top limb is 40 bits).
#[derive(Copy, Clone, Debug)]
pub struct Scalar56(pub(crate) [u64; 5]);

/// The order of the group, \\( \ell \\).
pub(crate) const L: [u64; 5] = [
    0x0012_631a_5cf5_d3ed,
    0x00f9_dea2_f79c_d658,
    0x0000_0000_0000_14de,
    0x0000_0000_0000_0000,
    0x0000_0000_1000_0000,
];

/// The Barrett constant \\( \mu = \lfloor 2^{464} / \ell \rfloor \\).
const MU: [u64; 5] = [
    0x009c_e5a3_0a2c_131b,
    0x0021_5d08_6329_a7ed,
    0x00ff_ffff_ffeb_2106,
    0x00ff_ffff_ffff_ffff,
    0x0000_000f_ffff_ffff,
];

const MASK16: u64 = 0x0000_0000_0000_ffff;
const MASK40: u64 = 0x0000_00ff_ffff_ffff;
const MASK56: u64 = 0x00ff_ffff_ffff_ffff;

/// u64 * u64 = u128 multiply helper
#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

#[inline(always)]
fn shr128(value: u128, shift: usize) -> u64 {
    (value >> shift) as u64
}

/// Borrow-propagating "is a < b" on 56-bit limbs: 1 if the subtraction
/// a - b underflows, else 0.
#[inline(always)]
fn lt(a: u64, b: u64) -> u64 {
    a.wrapping_sub(b) >> 63
}

/// Conditionally subtract \\( \ell \\) once, mapping \\( [0, 2\ell) \\)
/// onto \\( [0, \ell) \\).  Constant time.
fn sub_order(mut r: [u64; 5]) -> [u64; 5] {
    let mut t = [0u64; 5];
    let mut pb;

    let b = lt(r[0], L[0]);
    t[0] = r[0].wrapping_sub(L[0]).wrapping_add(b << 56);
    pb = b + L[1];
    let b = lt(r[1], pb);
    t[1] = r[1].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b + L[2];
    let b = lt(r[2], pb);
    t[2] = r[2].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b + L[3];
    let b = lt(r[3], pb);
    t[3] = r[3].wrapping_sub(pb).wrapping_add(b << 56);
    pb = b + L[4];
    let b = lt(r[4], pb);
    t[4] = r[4].wrapping_sub(pb).wrapping_add(b << 40);

    // keep r if r was smaller than l
    let mask = b.wrapping_sub(1);
    r[0] ^= mask & (r[0] ^ t[0]);
    r[1] ^= mask & (r[1] ^ t[1]);
    r[2] ^= mask & (r[2] ^ t[2]);
    r[3] ^= mask & (r[3] ^ t[3]);
    r[4] ^= mask & (r[4] ^ t[4]);
    r
}

/// Barrett reduction of a wide value split as `r1 = x mod 2^264` and
/// `q1 = x >> 248`, both in 56-bit limbs.
#[rustfmt::skip]
fn barrett_reduce(q1: &[u64; 5], r1: &[u64; 5]) -> [u64; 5] {
    let mut r2 = [0u64; 5];
    let mut q3 = [0u64; 5];
    let mut c: u128;
    let mut f: u64;
    let mut b: u64;
    let mut pb: u64;

    // q2 = mu * q1, of which only the part above 2^264 is kept:
    // q3 = q2 >> 264.
    c = m(MU[0], q1[3]) + m(MU[3], q1[0]) + m(MU[1], q1[2]) + m(MU[2], q1[1]); f = shr128(c, 56);
    c = m(MU[0], q1[4]) + (f as u128) + m(MU[4], q1[0]) + m(MU[3], q1[1]) + m(MU[1], q1[3]) + m(MU[2], q1[2]);
    f = c as u64; q3[0] = (f >> 40) & MASK16; f = shr128(c, 56);
    c = m(MU[4], q1[1]) + (f as u128) + m(MU[1], q1[4]) + m(MU[2], q1[3]) + m(MU[3], q1[2]);
    f = c as u64; q3[0] |= (f << 16) & MASK56; q3[1] = (f >> 40) & MASK16; f = shr128(c, 56);
    c = m(MU[4], q1[2]) + (f as u128) + m(MU[2], q1[4]) + m(MU[3], q1[3]);
    f = c as u64; q3[1] |= (f << 16) & MASK56; q3[2] = (f >> 40) & MASK16; f = shr128(c, 56);
    c = m(MU[4], q1[3]) + (f as u128) + m(MU[3], q1[4]);
    f = c as u64; q3[2] |= (f << 16) & MASK56; q3[3] = (f >> 40) & MASK16; f = shr128(c, 56);
    c = m(MU[4], q1[4]) + (f as u128);
    f = c as u64; q3[3] |= (f << 16) & MASK56; q3[4] = (f >> 40) & MASK16; f = shr128(c, 56);
    q3[4] |= f << 16;

    // r2 = (q3 * l) mod 2^264
    c = m(L[0], q3[0]);
    r2[0] = (c as u64) & MASK56; f = shr128(c, 56);
    c = m(L[0], q3[1]) + (f as u128) + m(L[1], q3[0]);
    r2[1] = (c as u64) & MASK56; f = shr128(c, 56);
    c = m(L[0], q3[2]) + (f as u128) + m(L[2], q3[0]) + m(L[1], q3[1]);
    r2[2] = (c as u64) & MASK56; f = shr128(c, 56);
    c = m(L[0], q3[3]) + (f as u128) + m(L[3], q3[0]) + m(L[1], q3[2]) + m(L[2], q3[1]);
    r2[3] = (c as u64) & MASK56; f = shr128(c, 56);
    c = m(L[0], q3[4]) + (f as u128) + m(L[4], q3[0]) + m(L[3], q3[1]) + m(L[1], q3[3]) + m(L[2], q3[2]);
    r2[4] = (c as u64) & MASK40;

    // out = r1 - r2 (mod 2^264), then at most two conditional
    // subtractions of l.
    let mut out = [0u64; 5];
    pb = 0;
    pb += r2[0]; b = lt(r1[0], pb); out[0] = r1[0].wrapping_sub(pb).wrapping_add(b << 56); pb = b;
    pb += r2[1]; b = lt(r1[1], pb); out[1] = r1[1].wrapping_sub(pb).wrapping_add(b << 56); pb = b;
    pb += r2[2]; b = lt(r1[2], pb); out[2] = r1[2].wrapping_sub(pb).wrapping_add(b << 56); pb = b;
    pb += r2[3]; b = lt(r1[3], pb); out[3] = r1[3].wrapping_sub(pb).wrapping_add(b << 56); pb = b;
    pb += r2[4]; b = lt(r1[4], pb); out[4] = r1[4].wrapping_sub(pb).wrapping_add(b << 40);

    sub_order(sub_order(out))
}

impl ConditionallySelectable for Scalar56 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Scalar56([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl Zeroize for Scalar56 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Scalar56 {
    /// Return the zero scalar.
    pub fn zero() -> Scalar56 {
        Scalar56([0, 0, 0, 0, 0])
    }

    /// Return the one scalar.
    pub fn one() -> Scalar56 {
        Scalar56([1, 0, 0, 0, 0])
    }

    /// Unpack a 32-byte little-endian integer into 56-bit limbs,
    /// without reducing.
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar56 {
        let load8 = |input: &[u8]| -> u64 {
            (input[0] as u64)
                | ((input[1] as u64) << 8)
                | ((input[2] as u64) << 16)
                | ((input[3] as u64) << 24)
                | ((input[4] as u64) << 32)
                | ((input[5] as u64) << 40)
                | ((input[6] as u64) << 48)
                | ((input[7] as u64) << 56)
        };

        let x0 = load8(&bytes[0..8]);
        let x1 = load8(&bytes[8..16]);
        let x2 = load8(&bytes[16..24]);
        let x3 = load8(&bytes[24..32]);

        Scalar56([
            x0 & MASK56,
            ((x0 >> 56) | (x1 << 8)) & MASK56,
            ((x1 >> 48) | (x2 << 16)) & MASK56,
            ((x2 >> 40) | (x3 << 24)) & MASK56,
            x3 >> 32,
        ])
    }

    /// Reduce a 64-byte little-endian integer mod \\( \ell \\).
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar56 {
        let load8 = |input: &[u8]| -> u64 {
            (input[0] as u64)
                | ((input[1] as u64) << 8)
                | ((input[2] as u64) << 16)
                | ((input[3] as u64) << 24)
                | ((input[4] as u64) << 32)
                | ((input[5] as u64) << 40)
                | ((input[6] as u64) << 48)
                | ((input[7] as u64) << 56)
        };

        let x0 = load8(&bytes[0..8]);
        let x1 = load8(&bytes[8..16]);
        let x2 = load8(&bytes[16..24]);
        let x3 = load8(&bytes[24..32]);
        let x4 = load8(&bytes[32..40]);
        let x5 = load8(&bytes[40..48]);
        let x6 = load8(&bytes[48..56]);
        let x7 = load8(&bytes[56..64]);

        // r1 = x mod 2^264
        let r1 = [
            x0 & MASK56,
            ((x0 >> 56) | (x1 << 8)) & MASK56,
            ((x1 >> 48) | (x2 << 16)) & MASK56,
            ((x2 >> 40) | (x3 << 24)) & MASK56,
            ((x3 >> 32) | (x4 << 32)) & MASK40,
        ];

        // q1 = x >> 248
        let q1 = [
            ((x3 >> 56) | (x4 << 8)) & MASK56,
            ((x4 >> 48) | (x5 << 16)) & MASK56,
            ((x5 >> 40) | (x6 << 24)) & MASK56,
            ((x6 >> 32) | (x7 << 32)) & MASK56,
            x7 >> 24,
        ];

        Scalar56(barrett_reduce(&q1, &r1))
    }

    /// Pack the limbs of this `Scalar56` into 32 bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        // contract limbs into saturated words
        let c0 = (self.0[1] << 56) | self.0[0];
        let c1 = (self.0[2] << 48) | (self.0[1] >> 8);
        let c2 = (self.0[3] << 40) | (self.0[2] >> 16);
        let c3 = (self.0[4] << 32) | (self.0[3] >> 24);

        let mut out = [0u8; 32];
        out[0..8].copy_from_slice(&c0.to_le_bytes());
        out[8..16].copy_from_slice(&c1.to_le_bytes());
        out[16..24].copy_from_slice(&c2.to_le_bytes());
        out[24..32].copy_from_slice(&c3.to_le_bytes());
        out
    }

    /// Test whether the (unreduced) limbs are below \\( \ell \\),
    /// without branching.
    pub fn is_canonical(&self) -> Choice {
        let v = &self.0;
        let b = lt(v[0], L[0]);
        let b = lt(v[1], b + L[1]);
        let b = lt(v[2], b + L[2]);
        let b = lt(v[3], b + L[3]);
        let b = lt(v[4], b + L[4]);
        Choice::from(b as u8)
    }

    /// Reduce the limbs of a value below \\( 2^{256} \\) mod \\( \ell \\).
    ///
    /// A value loaded by `from_bytes` is below \\( 2^{256} < 2\cdot
    /// 2^{8}\ell \\), too large for the conditional subtraction alone,
    /// so route it through the wide reduction with a zero top half.
    pub fn reduce(&self) -> Scalar56 {
        let mut wide = [0u8; 64];
        wide[0..32].copy_from_slice(&self.to_bytes());
        Scalar56::from_bytes_wide(&wide)
    }

    /// Compute `a + b (mod l)`; both inputs must be reduced.
    pub fn add(a: &Scalar56, b: &Scalar56) -> Scalar56 {
        let mut r = [0u64; 5];
        let mut c;

        c = a.0[0] + b.0[0];
        r[0] = c & MASK56;
        c >>= 56;
        c += a.0[1] + b.0[1];
        r[1] = c & MASK56;
        c >>= 56;
        c += a.0[2] + b.0[2];
        r[2] = c & MASK56;
        c >>= 56;
        c += a.0[3] + b.0[3];
        r[3] = c & MASK56;
        c >>= 56;
        c += a.0[4] + b.0[4];
        r[4] = c;

        Scalar56(sub_order(r))
    }

    /// Compute `-b (mod l)`; the input must be reduced.
    pub fn neg(b: &Scalar56) -> Scalar56 {
        // l - b, then fold l - 0 = l back to zero.
        let mut r = [0u64; 5];
        let mut pb = 0;

        let bw = lt(L[0], pb + b.0[0]);
        r[0] = L[0].wrapping_sub(pb + b.0[0]).wrapping_add(bw << 56);
        pb = bw;
        let bw = lt(L[1], pb + b.0[1]);
        r[1] = L[1].wrapping_sub(pb + b.0[1]).wrapping_add(bw << 56);
        pb = bw;
        let bw = lt(L[2], pb + b.0[2]);
        r[2] = L[2].wrapping_sub(pb + b.0[2]).wrapping_add(bw << 56);
        pb = bw;
        let bw = lt(L[3], pb + b.0[3]);
        r[3] = L[3].wrapping_sub(pb + b.0[3]).wrapping_add(bw << 56);
        pb = bw;
        let bw = lt(L[4], pb + b.0[4]);
        r[4] = L[4].wrapping_sub(pb + b.0[4]).wrapping_add(bw << 40);
        debug_assert!(bw == 0);

        Scalar56(sub_order(r))
    }

    /// Compute `a - b (mod l)`; both inputs must be reduced.
    pub fn sub(a: &Scalar56, b: &Scalar56) -> Scalar56 {
        Scalar56::add(a, &Scalar56::neg(b))
    }

    /// Compute `a * b (mod l)`; both inputs must be reduced.
    #[rustfmt::skip]
    pub fn mul(a: &Scalar56, b: &Scalar56) -> Scalar56 {
        let x = &a.0;
        let y = &b.0;
        let mut q1 = [0u64; 5];
        let mut r1 = [0u64; 5];

        let c = m(x[0], y[0]);
        r1[0] = (c as u64) & MASK56; let f = shr128(c, 56);
        let c = m(x[0], y[1]) + (f as u128) + m(x[1], y[0]);
        r1[1] = (c as u64) & MASK56; let f = shr128(c, 56);
        let c = m(x[0], y[2]) + (f as u128) + m(x[2], y[0]) + m(x[1], y[1]);
        r1[2] = (c as u64) & MASK56; let f = shr128(c, 56);
        let c = m(x[0], y[3]) + (f as u128) + m(x[3], y[0]) + m(x[1], y[2]) + m(x[2], y[1]);
        r1[3] = (c as u64) & MASK56; let f = shr128(c, 56);
        let c = m(x[0], y[4]) + (f as u128) + m(x[4], y[0]) + m(x[3], y[1]) + m(x[1], y[3]) + m(x[2], y[2]);
        r1[4] = (c as u64) & MASK40; q1[0] = ((c as u64) >> 24) & 0xffff_ffff; let f = shr128(c, 56);

        let c = m(x[4], y[1]) + (f as u128) + m(x[1], y[4]) + m(x[2], y[3]) + m(x[3], y[2]);
        let f2 = c as u64; q1[0] |= (f2 << 32) & MASK56; q1[1] = (f2 >> 24) & 0xffff_ffff; let f = shr128(c, 56);
        let c = m(x[4], y[2]) + (f as u128) + m(x[2], y[4]) + m(x[3], y[3]);
        let f2 = c as u64; q1[1] |= (f2 << 32) & MASK56; q1[2] = (f2 >> 24) & 0xffff_ffff; let f = shr128(c, 56);
        let c = m(x[4], y[3]) + (f as u128) + m(x[3], y[4]);
        let f2 = c as u64; q1[2] |= (f2 << 32) & MASK56; q1[3] = (f2 >> 24) & 0xffff_ffff; let f = shr128(c, 56);
        let c = m(x[4], y[4]) + (f as u128);
        let f2 = c as u64; q1[3] |= (f2 << 32) & MASK56; q1[4] = (f2 >> 24) & 0xffff_ffff; let f = shr128(c, 56);
        q1[4] |= f << 32;

        Scalar56(barrett_reduce(&q1, &r1))
    }

    /// Compute `a^2 (mod l)`.
    pub fn square(&self) -> Scalar56 {
        Scalar56::mul(self, self)
    }

    /// Compute `a / 2 (mod l)`; the input must be reduced.
    pub fn halve(a: &Scalar56) -> Scalar56 {
        // If a is odd, add l (odd) to make the value even, then shift.
        let parity = a.0[0] & 1;
        let mask = 0u64.wrapping_sub(parity);

        let mut r = [0u64; 5];
        let mut c;
        c = a.0[0] + (L[0] & mask);
        r[0] = c & MASK56;
        c >>= 56;
        c += a.0[1] + (L[1] & mask);
        r[1] = c & MASK56;
        c >>= 56;
        c += a.0[2] + (L[2] & mask);
        r[2] = c & MASK56;
        c >>= 56;
        c += a.0[3] + (L[3] & mask);
        r[3] = c & MASK56;
        c >>= 56;
        c += a.0[4] + (L[4] & mask);
        r[4] = c;

        Scalar56([
            (r[0] >> 1) | ((r[1] & 1) << 55),
            (r[1] >> 1) | ((r[2] & 1) << 55),
            (r[2] >> 1) | ((r[3] & 1) << 55),
            (r[3] >> 1) | ((r[4] & 1) << 55),
            r[4] >> 1,
        ])
    }

    /// Compute `a^-1 (mod l)` as `a^(l-2)` with a fixed
    /// square-and-multiply chain.  Maps zero to zero.
    pub fn invert(&self) -> Scalar56 {
        // Uses the addition chain from
        // https://briansmith.org/ecc-inversion-addition-chains-01#curve25519_scalar_inversion
        let _1 = *self;
        let _10 = _1.square();
        let _100 = _10.square();
        let _11 = Scalar56::mul(&_10, &_1);
        let _101 = Scalar56::mul(&_10, &_11);
        let _111 = Scalar56::mul(&_10, &_101);
        let _1001 = Scalar56::mul(&_10, &_111);
        let _1011 = Scalar56::mul(&_10, &_1001);
        let _1111 = Scalar56::mul(&_100, &_1011);

        // _10000
        let mut y = Scalar56::mul(&_1111, &_1);

        #[inline]
        fn square_multiply(y: &mut Scalar56, squarings: usize, x: &Scalar56) {
            for _ in 0..squarings {
                *y = y.square();
            }
            *y = Scalar56::mul(y, x);
        }

        square_multiply(&mut y, 123 + 3, &_101);
        square_multiply(&mut y, 2 + 2, &_11);
        square_multiply(&mut y, 1 + 4, &_1111);
        square_multiply(&mut y, 1 + 4, &_1111);
        square_multiply(&mut y, 4, &_1001);
        square_multiply(&mut y, 2, &_11);
        square_multiply(&mut y, 1 + 4, &_1111);
        square_multiply(&mut y, 1 + 3, &_101);
        square_multiply(&mut y, 3 + 3, &_101);
        square_multiply(&mut y, 3, &_111);
        square_multiply(&mut y, 1 + 4, &_1111);
        square_multiply(&mut y, 2 + 3, &_111);
        square_multiply(&mut y, 2 + 2, &_11);
        square_multiply(&mut y, 1 + 4, &_1011);
        square_multiply(&mut y, 2 + 4, &_1011);
        square_multiply(&mut y, 6 + 4, &_1001);
        square_multiply(&mut y, 2 + 2, &_11);
        square_multiply(&mut y, 3 + 2, &_11);
        square_multiply(&mut y, 3 + 2, &_11);
        square_multiply(&mut y, 1 + 4, &_1001);
        square_multiply(&mut y, 1 + 3, &_111);
        square_multiply(&mut y, 2 + 4, &_1111);
        square_multiply(&mut y, 1 + 4, &_1011);
        square_multiply(&mut y, 3, &_101);
        square_multiply(&mut y, 2 + 4, &_1111);
        square_multiply(&mut y, 3, &_101);
        square_multiply(&mut y, 1 + 2, &_11);

        y
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// The canonical encoding of \\( \ell - 1 \\).
    const L_MINUS_ONE_BYTES: [u8; 32] = [
        236, 211, 245, 92, 26, 99, 18, 88, 214, 156, 247, 162, 222, 249, 222, 20, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 16,
    ];

    /// The canonical encoding of \\( \ell \\).
    const L_BYTES: [u8; 32] = [
        237, 211, 245, 92, 26, 99, 18, 88, 214, 156, 247, 162, 222, 249, 222, 20, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 16,
    ];

    #[test]
    fn pack_unpack_roundtrip() {
        let s = Scalar56::from_bytes(&L_MINUS_ONE_BYTES);
        assert_eq!(s.to_bytes(), L_MINUS_ONE_BYTES);
    }

    #[test]
    fn canonical_boundaries() {
        assert_eq!(Scalar56::zero().is_canonical().unwrap_u8(), 1);
        assert_eq!(Scalar56::one().is_canonical().unwrap_u8(), 1);
        assert_eq!(
            Scalar56::from_bytes(&L_MINUS_ONE_BYTES).is_canonical().unwrap_u8(),
            1
        );
        assert_eq!(Scalar56::from_bytes(&L_BYTES).is_canonical().unwrap_u8(), 0);
    }

    #[test]
    fn order_reduces_to_zero() {
        let l = Scalar56::from_bytes(&L_BYTES);
        assert_eq!(l.reduce().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn add_l_minus_one_and_one() {
        let lm1 = Scalar56::from_bytes(&L_MINUS_ONE_BYTES);
        let sum = Scalar56::add(&lm1, &Scalar56::one());
        assert_eq!(sum.to_bytes(), [0u8; 32]);
    }

    #[test]
    fn neg_of_one_is_l_minus_one() {
        let n = Scalar56::neg(&Scalar56::one());
        assert_eq!(n.to_bytes(), L_MINUS_ONE_BYTES);
        assert_eq!(Scalar56::neg(&Scalar56::zero()).to_bytes(), [0u8; 32]);
    }

    #[test]
    fn sub_is_inverse_of_add() {
        let a = Scalar56::from_bytes_wide(&[0xab; 64]);
        let b = Scalar56::from_bytes_wide(&[0x35; 64]);
        let sum = Scalar56::add(&a, &b);
        let back = Scalar56::sub(&sum, &b);
        assert_eq!(back.to_bytes(), a.to_bytes());
    }

    #[test]
    fn halve_doubles_back() {
        let a = Scalar56::from_bytes_wide(&[0x17; 64]);
        let h = Scalar56::halve(&a);
        assert_eq!(Scalar56::add(&h, &h).to_bytes(), a.to_bytes());
    }

    #[test]
    fn halve_one() {
        // (l+1)/2
        let h = Scalar56::halve(&Scalar56::one());
        let two = Scalar56::add(&Scalar56::one(), &Scalar56::one());
        assert_eq!(Scalar56::mul(&h, &two).to_bytes(), Scalar56::one().to_bytes());
    }

    #[test]
    fn invert_vs_mul() {
        let a = Scalar56::from_bytes_wide(&[0x5a; 64]);
        let ainv = a.invert();
        let prod = Scalar56::mul(&a, &ainv);
        assert_eq!(prod.to_bytes(), Scalar56::one().to_bytes());
    }

    #[test]
    fn invert_zero_is_zero() {
        assert_eq!(Scalar56::zero().invert().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn wide_reduction_of_small_value() {
        let mut wide = [0u8; 64];
        wide[0] = 7;
        assert_eq!(
            Scalar56::from_bytes_wide(&wide).to_bytes()[0],
            7
        );
    }
}

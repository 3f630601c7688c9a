//! A pure-Rust implementation of the [ristretto255][ristretto_main]
//! prime-order group.
//!
//! Ristretto constructs a group of prime order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\)
//! as a quotient of (the Edwards form of) Curve25519, with a canonical
//! 32-byte encoding per group element.  It is a safe drop-in group for
//! higher-level protocols: PAKEs, VOPRFs, signatures, commitments.
//!
//! # Organisation
//!
//! * [`ristretto`]: the group itself — `RistrettoPoint`,
//!   `CompressedRistretto`, encoding/decoding, hash-to-group and its
//!   inverse, and the scalar-multiplication entry points.
//! * [`scalar`]: arithmetic mod \\( \ell \\).
//! * [`edwards`]: the internal curve representation.  Points here are
//!   *representatives*, not group elements; most users never need it.
//! * [`constants`]: the basepoint, the group order, and the precomputed
//!   basepoint table.
//! * [`traits`]: the small trait vocabulary (`Identity`,
//!   `BasepointTable`, `MultiscalarMul`, ...).
//!
//! # Constant-time guarantees
//!
//! Every operation whose inputs may be secret runs in constant time:
//! no branch and no memory index depends on a secret value.  Fallible
//! constant-time operations return `subtle::CtOption` so that the
//! failure mask itself can be handled without branching.  The only
//! variable-time entry points are explicitly named `vartime_*` (or
//! documented as such, like the short-circuit mode of
//! `direct_scalarmul`) and must only see public data.
//!
//! Secret values implement `zeroize::Zeroize`; destruction is an
//! explicit `value.zeroize()`, which leaves the object in an
//! invalid-but-defined all-zero state.
//!
//! [ristretto_main]: https://ristretto.group/

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub mod backend;
pub mod constants;
pub mod edwards;
pub mod field;
pub mod ristretto;
pub mod scalar;
pub mod traits;
pub mod window;

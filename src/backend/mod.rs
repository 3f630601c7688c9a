//! Pluggable implementations for different architectures.
//!
//! The backend code is split into two parts: a serial backend,
//! and (eventually) vectorized backends.  Only the serial `u64`
//! backend exists today; the compiled semantics are fixed by the
//! front-end types, not by the limb layout.

pub mod serial;

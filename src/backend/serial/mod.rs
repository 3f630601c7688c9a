//! Serial implementations of field, scalar, and point arithmetic.

pub mod u64;

pub mod scalar_mul;

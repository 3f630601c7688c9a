//! The `u64` backend uses `u64`s with 128-bit products.

pub mod constants;
pub mod field;
pub mod scalar;

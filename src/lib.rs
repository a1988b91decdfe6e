//! Decoding helpers for Apple System Management Controller (SMC) data.

/// Binary codec, type dispatch, and key dump tooling.
pub mod smc;

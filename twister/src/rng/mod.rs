//! Deterministic random number generation
//!
//! Uses the MT19937 Mersenne Twister for deterministic 32-bit and 53-bit
//! floating point output.
//! CRITICAL: Output must stay bit-identical to the reference `mt19937ar`.

pub mod mt19937;
mod rand_impl;
pub mod seed;

pub use mt19937::Mt19937;
pub use seed::{SeedConfig, SeedError};

//! Mersenne Twister Core - Rust Engine
//!
//! Deterministic MT19937 pseudo-random number generation, bit-compatible
//! with the reference `mt19937ar` implementation.
//!
//! # Architecture
//!
//! - **rng::mt19937**: State vector, twist, tempering and extraction
//! - **rng::seed**: Scalar and array seeding, seed configuration
//!
//! # Critical Invariants
//!
//! 1. The state vector is always exactly 624 words
//! 2. All arithmetic wraps modulo 2^32
//! 3. Same seed produces the same sequence everywhere
//!
//! # Example
//! ```
//! use mersenne_twister_core_rs::Mt19937;
//!
//! let mut rng = Mt19937::new(5489);
//! assert_eq!(rng.next_u32(), 3499211612);
//! ```

pub mod rng;

pub use rng::{Mt19937, SeedConfig, SeedError};

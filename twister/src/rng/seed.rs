//! Seeding procedures and seed configuration
//!
//! Two deterministic procedures fill the state vector:
//!
//! - [`init_genrand`] expands a single 32-bit seed with a Knuth-style
//!   multiplicative recurrence.
//! - [`init_by_array`] folds an arbitrary-length key into a state that was
//!   first seeded with `19650218`.
//!
//! [`SeedConfig`] selects between them from configuration.

use crate::rng::mt19937::{Mt19937, N};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multiplier for the scalar seeding recurrence (Knuth TAOCP Vol. 2, p. 106)
pub const SCALAR_MULTIPLIER: u32 = 1_812_433_253;
/// Multiplier for the key-mixing pass of array seeding
pub const KEY_MULTIPLIER: u32 = 1_664_525;
/// Multiplier for the final diffusion pass of array seeding
pub const DIFFUSION_MULTIPLIER: u32 = 1_566_083_941;
/// Scalar seed applied before an array key is mixed in
pub const ARRAY_BASE_SEED: u32 = 19_650_218;

/// Errors that can occur while seeding
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed key must contain at least one word")]
    EmptyKey,
}

/// Fill `words` from a single 32-bit seed
pub fn init_genrand(words: &mut [u32; N], seed: u32) {
    words[0] = seed;
    for i in 1..N {
        let prev = words[i - 1];
        words[i] = SCALAR_MULTIPLIER
            .wrapping_mul(prev ^ (prev >> 30))
            .wrapping_add(i as u32);
    }
    log::trace!("seeded mt19937 with scalar {}", seed);
}

/// Fill `words` from an array key
///
/// # Errors
/// Returns [`SeedError::EmptyKey`] if `key` is empty; `words` is not
/// modified in that case.
pub fn init_by_array(words: &mut [u32; N], key: &[u32]) -> Result<(), SeedError> {
    if key.is_empty() {
        return Err(SeedError::EmptyKey);
    }
    mix_key(words, key);
    Ok(())
}

/// Array seeding proper. `key` must be non-empty.
pub(crate) fn mix_key(words: &mut [u32; N], key: &[u32]) {
    debug_assert!(!key.is_empty());

    init_genrand(words, ARRAY_BASE_SEED);

    let mut i = 1;
    let mut j = 0;
    for _ in 0..N.max(key.len()) {
        let prev = words[i - 1];
        words[i] = (words[i] ^ (prev ^ (prev >> 30)).wrapping_mul(KEY_MULTIPLIER))
            .wrapping_add(key[j])
            .wrapping_add(j as u32);
        i += 1;
        j += 1;
        if i >= N {
            words[0] = words[N - 1];
            i = 1;
        }
        if j >= key.len() {
            j = 0;
        }
    }

    for _ in 0..N - 1 {
        let prev = words[i - 1];
        words[i] = (words[i] ^ (prev ^ (prev >> 30)).wrapping_mul(DIFFUSION_MULTIPLIER))
            .wrapping_sub(i as u32);
        i += 1;
        if i >= N {
            words[0] = words[N - 1];
            i = 1;
        }
    }

    // MSB is 1, so the initial array is never all zero
    words[0] = 0x8000_0000;
    log::trace!("seeded mt19937 with {}-word key", key.len());
}

/// Split a 64-bit integer into a little-endian array key
///
/// The high word is only included when it is non-zero, so values below
/// 2^32 produce a one-word key. Zero yields `[0]`.
///
/// # Example
/// ```
/// use mersenne_twister_core_rs::rng::seed::key_from_u64;
///
/// assert_eq!(key_from_u64(7), vec![7]);
/// assert_eq!(key_from_u64(1 << 32), vec![0, 1]);
/// ```
pub fn key_from_u64(seed: u64) -> Vec<u32> {
    let lo = seed as u32;
    let hi = (seed >> 32) as u32;
    if hi == 0 {
        vec![lo]
    } else {
        vec![lo, hi]
    }
}

/// How a generator should be seeded
///
/// # Example
/// ```
/// use mersenne_twister_core_rs::SeedConfig;
///
/// let config: SeedConfig = serde_json::from_str(r#"{"type": "scalar", "seed": 5489}"#).unwrap();
/// let mut rng = config.build().unwrap();
/// assert_eq!(rng.next_u32(), 3499211612);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SeedConfig {
    /// Single 32-bit seed
    Scalar { seed: u32 },
    /// Array key of one or more 32-bit words
    Array { key: Vec<u32> },
    /// 64-bit integer, split into a key
    Wide { seed: u64 },
}

impl SeedConfig {
    /// Build a freshly seeded generator
    ///
    /// # Errors
    /// Returns [`SeedError::EmptyKey`] for an `Array` config with no words.
    pub fn build(&self) -> Result<Mt19937, SeedError> {
        match self {
            SeedConfig::Scalar { seed } => Ok(Mt19937::new(*seed)),
            SeedConfig::Array { key } => Mt19937::from_key(key),
            SeedConfig::Wide { seed } => Ok(Mt19937::from_u64(*seed)),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig::Scalar { seed: 5489 }
    }
}

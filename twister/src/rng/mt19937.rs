//! MT19937 Mersenne Twister generator
//!
//! A 32-bit generator with period 2^19937 - 1 and 623-dimensional
//! equidistribution. Output is bit-identical to the 2002 reference
//! generator by Matsumoto and Nishimura (`mt19937ar`).
//!
//! # Algorithm
//!
//! The state is 624 words plus a cursor. Each extraction tempers the word
//! under the cursor. When all 624 words have been consumed the whole vector
//! is regenerated ("twisted") in place before the next extraction.
//!
//! # Determinism
//!
//! Same seed → same sequence, on every platform. All arithmetic is wrapping
//! modulo 2^32.

use crate::rng::seed::{self, SeedError};

/// Degree of recurrence (number of state words)
pub const N: usize = 624;
/// Middle word offset (twist distance)
pub const M: usize = 397;
/// Constant vector a
pub const MATRIX_A: u32 = 0x9908_b0df;
/// Most significant w-r bits
pub const UPPER_MASK: u32 = 0x8000_0000;
/// Least significant r bits
pub const LOWER_MASK: u32 = 0x7fff_ffff;

/// Tempering mask applied after the 7-bit left shift
pub const TEMPERING_MASK_B: u32 = 0x9d2c_5680;
/// Tempering mask applied after the 15-bit left shift
pub const TEMPERING_MASK_C: u32 = 0xefc6_0000;

/// 2^26, weight of the high 27 bits in [`Mt19937::next_f64`]
const TWO_POW_26: f64 = 67_108_864.0;
/// 2^53, resolution of [`Mt19937::next_f64`]
const TWO_POW_53: f64 = 9_007_199_254_740_992.0;

/// Deterministic random number generator using MT19937
///
/// # Example
/// ```
/// use mersenne_twister_core_rs::Mt19937;
///
/// let mut rng = Mt19937::new(5489);
/// assert_eq!(rng.next_u32(), 3499211612);
///
/// let probability = rng.next_f64();
/// assert!(probability >= 0.0 && probability < 1.0);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    /// State vector
    words: [u32; N],
    /// Index of the next word to temper; `N` means a twist is due
    cursor: usize,
}

impl Mt19937 {
    /// Create a new generator from a single 32-bit seed
    ///
    /// The first extraction always twists, so the seeded words are never
    /// returned directly.
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u32)
    ///
    /// # Example
    /// ```
    /// use mersenne_twister_core_rs::Mt19937;
    ///
    /// let rng = Mt19937::new(12345);
    /// assert_eq!(rng.cursor(), 624);
    /// ```
    pub fn new(seed: u32) -> Self {
        let mut words = [0; N];
        seed::init_genrand(&mut words, seed);
        Self { words, cursor: N }
    }

    /// Create a new generator from an array key
    ///
    /// Every word of the key influences the state, so keys wider than
    /// 32 bits are supported.
    ///
    /// # Errors
    /// Returns [`SeedError::EmptyKey`] if `key` is empty.
    ///
    /// # Example
    /// ```
    /// use mersenne_twister_core_rs::Mt19937;
    ///
    /// let mut rng = Mt19937::from_key(&[0x123, 0x234, 0x345, 0x456]).unwrap();
    /// assert_eq!(rng.next_u32(), 1067595299);
    ///
    /// assert!(Mt19937::from_key(&[]).is_err());
    /// ```
    pub fn from_key(key: &[u32]) -> Result<Self, SeedError> {
        let mut words = [0; N];
        seed::init_by_array(&mut words, key)?;
        Ok(Self { words, cursor: N })
    }

    /// Create a new generator from a 64-bit integer seed
    ///
    /// The integer is split into little-endian 32-bit words (high word
    /// dropped when zero) and used as an array key, matching how Python's
    /// `random.seed` feeds integers to this generator.
    ///
    /// `SeedableRng::seed_from_u64` produces the same stream. This is a
    /// different stream from [`Mt19937::new`] even for seeds below 2^32.
    ///
    /// # Example
    /// ```
    /// use mersenne_twister_core_rs::Mt19937;
    ///
    /// let mut rng = Mt19937::from_u64(0);
    /// assert_eq!(rng.next_f64(), 0.8444218515250481);
    /// ```
    pub fn from_u64(seed: u64) -> Self {
        let mut words = [0; N];
        seed::mix_key(&mut words, &seed::key_from_u64(seed));
        Self { words, cursor: N }
    }

    /// Reseed in place from a single 32-bit seed
    ///
    /// Equivalent to replacing `self` with `Mt19937::new(seed)`.
    pub fn reseed(&mut self, seed: u32) {
        seed::init_genrand(&mut self.words, seed);
        self.cursor = N;
    }

    /// Reseed in place from an array key
    ///
    /// # Errors
    /// Returns [`SeedError::EmptyKey`] if `key` is empty. The generator is
    /// left untouched in that case.
    pub fn reseed_with_key(&mut self, key: &[u32]) -> Result<(), SeedError> {
        seed::init_by_array(&mut self.words, key)?;
        self.cursor = N;
        Ok(())
    }

    /// Generate next random u32 value
    ///
    /// Twists first if the state vector is exhausted, then tempers and
    /// returns the word under the cursor.
    ///
    /// # Example
    /// ```
    /// use mersenne_twister_core_rs::Mt19937;
    ///
    /// let mut rng = Mt19937::new(5489);
    /// let first: Vec<u32> = (0..3).map(|_| rng.next_u32()).collect();
    /// assert_eq!(first, vec![3499211612, 581869302, 3890346734]);
    /// ```
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor >= N {
            self.twist();
        }

        let y = self.words[self.cursor];
        self.cursor += 1;
        temper(y)
    }

    /// Generate random f64 in range [0.0, 1.0) with 53-bit resolution
    ///
    /// Consumes two u32 draws: 27 bits from the first, 26 from the second.
    ///
    /// # Example
    /// ```
    /// use mersenne_twister_core_rs::Mt19937;
    ///
    /// let mut rng = Mt19937::new(12345);
    /// let value = rng.next_f64();
    /// assert!(value >= 0.0 && value < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let a = self.next_u32() >> 5;
        let b = self.next_u32() >> 6;
        (f64::from(a) * TWO_POW_26 + f64::from(b)) * (1.0 / TWO_POW_53)
    }

    /// Index of the next word to be tempered (624 means a twist is due)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current (untempered) state vector
    pub fn words(&self) -> &[u32; N] {
        &self.words
    }

    /// Regenerate all N words in place and rewind the cursor
    ///
    /// Indices wrap modulo N, so positions past `N - M` read words that were
    /// already regenerated earlier in the same pass.
    fn twist(&mut self) {
        let mt = &mut self.words;
        for k in 0..N {
            let y = (mt[k] & UPPER_MASK) | (mt[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            mt[k] = mt[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.cursor = 0;
        log::trace!("mt19937 state twisted");
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937")
            .field("cursor", &self.cursor)
            .field("head", &&self.words[..4])
            .finish_non_exhaustive()
    }
}

/// Tempering transform applied to each extracted word
#[inline]
fn temper(mut y: u32) -> u32 {
    y ^= y >> 11;
    y ^= (y << 7) & TEMPERING_MASK_B;
    y ^= (y << 15) & TEMPERING_MASK_C;
    y ^= y >> 18;
    y
}

//! `rand_core` integration
//!
//! Lets samplers built on `rand_core` draw from [`Mt19937`] directly.

use crate::rng::mt19937::Mt19937;
use rand_core::{impls, Error, RngCore, SeedableRng};

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        Mt19937::next_u32(self)
    }

    /// Low word first
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    /// Little-endian scalar seed
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Mt19937::new(u32::from_le_bytes(seed))
    }

    /// Same stream as [`Mt19937::from_u64`], not rand_core's PCG expansion
    fn seed_from_u64(state: u64) -> Self {
        Mt19937::from_u64(state)
    }
}
